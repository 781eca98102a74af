//! Roster storage for derbydesk.
//!
//! This module defines the persistence contract behind the check-in form and
//! provides two implementations: a `SQLite`-backed store for real events and
//! an in-memory store for tests.

pub mod memory;
pub mod migrations;
pub mod schema;
pub mod sqlite;

use async_trait::async_trait;

use crate::entry::{Entry, EntryDraft, RaceConfig};
use crate::error::Result;

pub use memory::MemoryRoster;
pub use sqlite::SqliteRoster;

/// The persistence contract behind the check-in form.
///
/// The form controller only ever talks to this trait, so it can be driven
/// against [`MemoryRoster`] in tests and [`SqliteRoster`] in production.
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// Prepare persistence for use.
    ///
    /// Idempotent; called once at startup before any other operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be prepared.
    async fn initialize(&self) -> Result<()>;

    /// All persisted check-ins.
    ///
    /// Ordering is decided by the store; callers do not re-sort.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be read.
    async fn list_checked_in(&self) -> Result<Vec<Entry>>;

    /// Advisory next car number: one more than the highest issued number,
    /// or 1 when the roster is empty. The number is not reserved.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be read.
    async fn next_car_number(&self) -> Result<i32>;

    /// Persist a new check-in and return the full record.
    ///
    /// The store assigns the identifier, creation timestamp, and checked-in
    /// flag; every caller-supplied field is stored unchanged. A draft whose
    /// car number is already on the roster is rejected with
    /// [`crate::Error::CarNumberTaken`].
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails or the car number is taken.
    async fn checkin(&self, draft: EntryDraft) -> Result<Entry>;

    /// Race-day configuration seeded at initialization.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read.
    async fn race_config(&self) -> Result<RaceConfig>;
}
