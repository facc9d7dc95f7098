//! CLI definition and command handlers

use clap::Parser;

pub mod absences;

/// Post today's Personio absences to Slack
#[derive(Parser, Debug)]
#[command(name = "personio-absences")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The YAML configuration file (defaults to ./config.yml when present)
    #[arg(long, short = 'c', env = "PERSONIO_ABSENCES_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging regardless of the configured level
    #[arg(long, env = "PERSONIO_ABSENCES_DEBUG", hide_env = true)]
    pub debug: bool,
}
