//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Skip remote description fetching (cards show loading placeholders)
    #[arg(long)]
    pub no_fetch: bool,
}

/// Projects command arguments.
#[derive(Debug, Args)]
pub struct ProjectsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Skip remote description fetching (cards show loading placeholders)
    #[arg(long)]
    pub no_fetch: bool,
}

/// Readme command arguments.
#[derive(Debug, Args)]
pub struct ReadmeCommand {
    /// The project identifier (owner/repo)
    pub identifier: String,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
