//! Command-line interface for flightregistry.
//!
//! This module provides the CLI structure for the `flightreg` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, DurationsCommand, InputArgs, ListCommand, LongestCommand, StatsCommand,
    StatusArg,
};

use crate::logging::Verbosity;

/// flightreg - Query a set of flight records
///
/// Loads flights from a JSON file into an in-memory registry and answers
/// status, duration and longest-flight queries over them.
#[derive(Debug, Parser)]
#[command(name = "flightreg")]
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
    /// List flights, optionally filtered by status
    List(ListCommand),

    /// Show the flight with the longest duration
    Longest(LongestCommand),

    /// Compute and show the duration of every flight
    Durations(DurationsCommand),

    /// Show counts by status
    Stats(StatsCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "flightreg");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_with_status() {
        let cli = Cli::try_parse_from(["flightreg", "list", "--status", "delayed"]).unwrap();
        match cli.command {
            Command::List(cmd) => {
                assert_eq!(cmd.status, Some(StatusArg::Delayed));
                assert!(cmd.exclude.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_with_excludes() {
        let cli =
            Cli::try_parse_from(["flightreg", "list", "-x", "F1", "--exclude", "F2"]).unwrap();
        let Command::List(cmd) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(cmd.exclude, vec!["F1", "F2"]);
    }

    #[test]
    fn test_parse_longest_with_file_and_format() {
        let cli = Cli::try_parse_from([
            "flightreg",
            "longest",
            "--file",
            "/tmp/flights.json",
            "--format",
            "json",
        ])
        .unwrap();
        let Command::Longest(cmd) = cli.command else {
            panic!("expected longest command");
        };
        assert_eq!(cmd.input.file, Some(PathBuf::from("/tmp/flights.json")));
        assert_eq!(cmd.input.format, Some(crate::config::OutputFormat::Json));
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        assert!(Cli::try_parse_from(["flightreg", "list", "--status", "boarding"]).is_err());
    }

    #[test]
    fn test_parse_with_config() {
        let cli =
            Cli::try_parse_from(["flightreg", "-c", "/custom/config.toml", "stats"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_verbosity() {
        let cli = Cli::try_parse_from(["flightreg", "-vv", "durations"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Trace);

        let cli = Cli::try_parse_from(["flightreg", "-q", "durations"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = Cli::try_parse_from(["flightreg", "config", "validate"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: None })
        ));
    }
}
