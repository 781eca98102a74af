//! Command-line interface for derbydesk.
//!
//! This module provides the CLI structure and command handlers for the
//! `derbydesk` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    CheckinCommand, ConfigCommand, DenArg, RaceCommand, RosterCommand, StatusCommand,
};

/// derbydesk - Derby-car check-in for race day
///
/// Registers scouts and their cars for the derby, validates car weight
/// against the 5.0 oz limit, and keeps a newest-first roster with an
/// auto-incrementing car number.
#[derive(Debug, Parser)]
#[command(name = "derbydesk")]
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
    /// Check a scout and car in
    Checkin(CheckinCommand),

    /// Show the checked-in roster
    Roster(RosterCommand),

    /// Show the next available car number
    NextNumber,

    /// Show database and race-day status
    Status(StatusCommand),

    /// Race-day controls
    #[command(subcommand)]
    Race(RaceCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
