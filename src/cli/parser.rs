use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimecard
/// CLI punch clock backed by one JSON timecard per day
#[derive(Parser)]
#[command(
    name = "rtimecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple punch-clock CLI: clock in and out, track breaks and see when your day is done",
    long_about = None,
    infer_subcommands = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Override the timecard directory (useful for tests or shared setups)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no network update checks)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clock in and start a work interval
    #[command(alias = "i")]
    In {
        /// Backdate the punch: minutes ago (e.g. 15) or HH:MM today
        #[arg(value_name = "OFFSET")]
        offset: Option<String>,
    },

    /// Clock out and close the open work interval
    #[command(alias = "o")]
    Out {
        /// Backdate the punch: minutes ago (e.g. 15) or HH:MM today
        #[arg(value_name = "OFFSET")]
        offset: Option<String>,
    },

    /// Clock in or out, whichever comes next
    #[command(alias = "c")]
    Clock {
        /// Backdate the punch: minutes ago (e.g. 15) or HH:MM today
        #[arg(value_name = "OFFSET")]
        offset: Option<String>,
    },

    /// Show today's timecard: intervals, totals and time remaining
    #[command(alias = "s")]
    Status,

    /// Revert the most recent punch
    #[command(alias = "u")]
    Undo,

    /// Print the version and check for a newer release
    #[command(alias = "v")]
    Version,

    /// Download and install the latest release
    Update,

    /// Install the binary, default config and shell greeting hook
    Install,

    /// Remove the installed binary and shell greeting hook
    Uninstall,

    /// Shell greeting: offer the day's first clock-in (used by the profile hook)
    Auto,
}
