//! CLI module.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// YouTube comment analyzer
///
/// Collects public comments for a YouTube video and packages them, ranked by
/// likes, into a report for language-model analysis. Runs as an MCP server.
#[derive(Parser, Debug)]
#[command(name = "yt-comment-analyzer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start MCP server for AI assistant integration (Claude, ChatGPT, etc.)
    Mcp,

    /// Run the analysis once and print the report
    Analyze {
        /// YouTube video URL
        url: String,

        /// Maximum number of comments to fetch
        #[arg(short, long, allow_negative_numbers = true)]
        max_comments: Option<i64>,
    },

    /// Print the MCP tool definitions as JSON
    Tools,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Write the current configuration to the default path
    Init,

    /// Show configuration file path
    Path,
}
