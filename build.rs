//! Embeds build metadata shown by `--version`.
//!
//! Dev builds carry the build date and git SHA. Builds with the `release`
//! feature carry the date only, so official version strings stay clean.
//! Outside a git checkout the missing values become "unknown".

use vergen_gitcl::{BuildBuilder, Emitter};

fn main() {
    if let Err(err) = emit() {
        println!("cargo:warning=build metadata unavailable: {}", err);
        println!("cargo:rustc-env=VERGEN_BUILD_DATE=unknown");
        #[cfg(not(feature = "release"))]
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }
}

fn emit() -> Result<(), Box<dyn std::error::Error>> {
    let build = BuildBuilder::default().build_date(true).build()?;
    let mut emitter = Emitter::default();
    emitter.add_instructions(&build)?;

    #[cfg(not(feature = "release"))]
    {
        let git = vergen_gitcl::GitclBuilder::default().sha(true).build()?;
        emitter.add_instructions(&git)?;
    }

    emitter.emit()?;
    Ok(())
}
