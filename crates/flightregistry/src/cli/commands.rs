//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::config::OutputFormat;

/// Where to read flights from.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// JSON file holding an array of flight records
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only show flights with this status
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,

    /// Drop these flight numbers before listing
    #[arg(short = 'x', long, value_name = "FLIGHT")]
    pub exclude: Vec<String>,

    /// Flights file and output format.
    #[command(flatten)]
    pub input: InputArgs,
}

/// Longest command arguments.
#[derive(Debug, Args)]
pub struct LongestCommand {
    /// Flights file and output format.
    #[command(flatten)]
    pub input: InputArgs,
}

/// Durations command arguments.
#[derive(Debug, Args)]
pub struct DurationsCommand {
    /// Flights file and output format.
    #[command(flatten)]
    pub input: InputArgs,
}

/// Stats command arguments.
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Flights file and output format.
    #[command(flatten)]
    pub input: InputArgs,
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

/// Flight status argument for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// ON TIME
    OnTime,
    /// DELAYED
    Delayed,
    /// CANCELLED
    Cancelled,
}

impl From<StatusArg> for crate::flight::Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::OnTime => Self::OnTime,
            StatusArg::Delayed => Self::Delayed,
            StatusArg::Cancelled => Self::Cancelled,
        }
    }
}
