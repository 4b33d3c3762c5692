use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the startup report.
///
/// With no arguments the full report runs with default settings.
#[derive(Parser, Debug)]
#[clap(name = "startup-report", about = "Spoken desktop startup report")]
pub struct Args {
    /// Path to configuration YAML file
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Print the report without speaking it
    #[clap(short, long)]
    pub mute: bool,

    /// Exit right after the farewell instead of pausing
    #[clap(long)]
    pub no_pause: bool,

    /// Subcommands
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a default configuration file
    InitConfig {
        /// Path to output configuration file
        #[clap(default_value = "startup-report.yaml")]
        path: PathBuf,
    },
}
