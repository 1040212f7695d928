// NOTE: Command Organization
//
// One-shot commands (search, analyze) run a single request and exit.
// `interactive` keeps a query session alive so typed lines go through the
// same debounced search pipeline the analyzer view uses.
// Preference commands (theme, config) never touch the network.

mod commands;

pub use commands::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "hourscope")]
#[command(about = "Find the busiest posting hours of a subreddit", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Override the API base URL from the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Log level (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}
