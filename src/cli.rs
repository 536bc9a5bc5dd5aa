//! Command-line interface definitions.
//!
//! Lives in the library so the man page generator can reuse it.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::cuts::CutStatus;

/// Version string with build metadata.
#[cfg(not(feature = "release"))]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

/// Version string with build metadata.
#[cfg(feature = "release")]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "cutreview")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Review detected cuts and preview the edited result")]
pub struct Cli {
    /// Config file (default: $CUTREVIEW_CONFIG, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Review cuts interactively in the terminal
    #[command(after_help = "Keys: space play/pause, p preview, a accept/reject, j/k select, ? help, q quit\n\
Mouse: drag on the timeline to scrub, click a cut to select it")]
    Review(ReviewArgs),

    /// Play the edited result headlessly and print every skip
    Simulate(SimulateArgs),

    /// Detect cuts with the mock analyzer and write a cut file
    Analyze(AnalyzeArgs),

    /// Print time saved, cut count, and final duration
    Metrics(MetricsArgs),

    /// Print a text report of the review
    Report(CutsArgs),

    /// Accept or reject a single cut
    SetStatus(SetStatusArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

// A cut file plus an optional duration override.
#[derive(Args, Debug, Clone)]
pub struct CutsArgs {
    /// Cut file (JSON)
    pub cuts: PathBuf,

    /// Media duration in seconds (overrides the file's duration)
    #[arg(short, long, value_name = "SECS")]
    pub duration: Option<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct ReviewArgs {
    #[command(flatten)]
    pub input: CutsArgs,

    /// Do not write status changes back to the cut file
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub input: CutsArgs,

    /// Frame step in milliseconds (default: the configured frame interval)
    #[arg(long, value_name = "MS")]
    pub frame_ms: Option<u64>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Media duration in seconds
    #[arg(short, long, value_name = "SECS")]
    pub duration: f64,

    /// Seed for the mock detector
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct MetricsArgs {
    #[command(flatten)]
    pub input: CutsArgs,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SetStatusArgs {
    /// Cut file (JSON)
    pub cuts: PathBuf,

    /// Id of the cut to change
    pub id: String,

    /// New status: accepted or rejected
    pub status: CutStatus,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
