//! Command-line interface for folio.
//!
//! This module provides the CLI structure for the `folio` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, ProjectsCommand, ReadmeCommand, ShowCommand};

/// folio - Present your portfolio in the terminal
///
/// Renders a portfolio document (profile, education, skills, experience,
/// projects, testimonials) and resolves each project's description from
/// its repository README.
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the full portfolio
    Show(ShowCommand),

    /// Render the project cards
    Projects(ProjectsCommand),

    /// Show a project's README in the detail overlay
    Readme(ReadmeCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.quiet, self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Verbosity;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "folio");
    }

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["folio", "show"]).unwrap();
        assert!(matches!(cli.command, Command::Show(_)));
    }

    #[test]
    fn test_parse_show_flags() {
        let cli = Cli::try_parse_from(["folio", "show", "--json", "--no-fetch"]).unwrap();
        if let Command::Show(cmd) = cli.command {
            assert!(cmd.json);
            assert!(cmd.no_fetch);
        } else {
            panic!("expected show command");
        }
    }

    #[test]
    fn test_parse_projects() {
        let cli = Cli::try_parse_from(["folio", "projects"]).unwrap();
        assert!(matches!(cli.command, Command::Projects(_)));
    }

    #[test]
    fn test_parse_readme() {
        let cli = Cli::try_parse_from(["folio", "readme", "octo/widget"]).unwrap();
        if let Command::Readme(cmd) = cli.command {
            assert_eq!(cmd.identifier, "octo/widget");
        } else {
            panic!("expected readme command");
        }
    }

    #[test]
    fn test_parse_readme_requires_identifier() {
        assert!(Cli::try_parse_from(["folio", "readme"]).is_err());
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["folio", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Show { .. })
        ));
    }

    #[test]
    fn test_parse_with_config_path() {
        let cli = Cli::try_parse_from(["folio", "-c", "/custom/config.toml", "show"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_verbosity_mapping() {
        let quiet = Cli::try_parse_from(["folio", "-q", "show"]).unwrap();
        assert_eq!(quiet.verbosity(), Verbosity::Quiet);

        let normal = Cli::try_parse_from(["folio", "show"]).unwrap();
        assert_eq!(normal.verbosity(), Verbosity::Normal);

        let verbose = Cli::try_parse_from(["folio", "-v", "show"]).unwrap();
        assert_eq!(verbose.verbosity(), Verbosity::Verbose);

        let trace = Cli::try_parse_from(["folio", "-vv", "show"]).unwrap();
        assert_eq!(trace.verbosity(), Verbosity::Trace);
    }
}
