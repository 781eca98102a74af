//! `derbydesk` - Derby-car check-in for race day
//!
//! This library provides the check-in form controller and the roster storage
//! behind the `derbydesk` binary: validate a scout's car against the weight
//! limit, persist the entry, and keep a newest-first roster with an
//! auto-incrementing car number.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod checkin;
pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod logging;
pub mod store;

pub use checkin::CheckinForm;
pub use config::Config;
pub use entry::{Den, Entry, EntryDraft, RaceConfig, WEIGHT_LIMIT_OZ};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use store::{MemoryRoster, RosterStore, SqliteRoster};
