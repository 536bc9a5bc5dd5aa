//! cutreview - review detected cuts and preview the edited result

mod commands;

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cutreview::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The review TUI owns the terminal, so its logs go to a file
    let log_file = match cli.command {
        Commands::Review(_) => review_log_path(),
        _ => None,
    };
    init_logging(cli.verbose, log_file);

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Review(args) => commands::review::handle(&args, config_path),
        Commands::Simulate(args) => commands::simulate::handle(&args, config_path),
        Commands::Analyze(args) => commands::analyze::handle(&args, config_path),
        Commands::Metrics(args) => commands::metrics::handle(&args, config_path),
        Commands::Report(args) => commands::report::handle(&args),
        Commands::SetStatus(args) => commands::set_status::handle(&args),
        Commands::Config(command) => commands::config::handle(command, config_path),
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}

/// Default tracing filter for the given `-v` count.
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "cutreview=warn",
        1 => "cutreview=info",
        _ => "cutreview=debug",
    }
}

/// Install the tracing subscriber. `RUST_LOG` overrides `-v`.
fn init_logging(verbose: u8, log_file: Option<PathBuf>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let registry = tracing_subscriber::registry().with(filter);

    let file = log_file.and_then(|path| open_log_file(&path));
    let result = match file {
        Some(file) => registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .try_init(),
        None => registry
            .with(fmt::layer().with_writer(io::stderr))
            .try_init(),
    };
    if let Err(err) = result {
        eprintln!("failed to initialize logging: {}", err);
    }
}

fn review_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("cutreview").join("review.log"))
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    File::options().create(true).append(true).open(path).ok()
}
