//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::entry::Den;

/// Check-in command arguments.
#[derive(Debug, Args)]
pub struct CheckinCommand {
    /// Scout name
    #[arg(short, long)]
    pub name: String,

    /// The scout's den
    #[arg(short, long, value_enum)]
    pub den: DenArg,

    /// Car number (defaults to the next available number)
    #[arg(short = 'N', long = "number")]
    pub car_number: Option<i32>,

    /// Car weight in ounces
    #[arg(short = 'w', long = "weight", default_value_t = 5.0)]
    pub car_weight: f64,
}

/// Roster command arguments.
#[derive(Debug, Args)]
pub struct RosterCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Race-day commands.
#[derive(Debug, Subcommand)]
pub enum RaceCommand {
    /// Start race day once enough cars are checked in
    Start,
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

/// Den argument for the check-in command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DenArg {
    /// Tiger den
    Tiger,
    /// Wolf den
    Wolf,
    /// Bear den
    Bear,
    /// Webelos den
    Webelos,
    /// Arrow of Light den
    ArrowOfLight,
}

impl From<DenArg> for Den {
    fn from(arg: DenArg) -> Self {
        match arg {
            DenArg::Tiger => Self::Tiger,
            DenArg::Wolf => Self::Wolf,
            DenArg::Bear => Self::Bear,
            DenArg::Webelos => Self::Webelos,
            DenArg::ArrowOfLight => Self::ArrowOfLight,
        }
    }
}
