//! In-memory roster store.
//!
//! Implements the same contract as the `SQLite` store with no persistence,
//! so the check-in form can be exercised in tests and ephemeral events.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::entry::{Entry, EntryDraft, RaceConfig};
use crate::error::{Error, Result};
use crate::store::RosterStore;

/// A [`RosterStore`] that keeps the roster in process memory.
///
/// Identifier assignment, car-number uniqueness, and newest-first listing
/// match [`crate::store::SqliteRoster`] so the two are interchangeable
/// behind the trait.
#[derive(Debug, Default)]
pub struct MemoryRoster {
    inner: Mutex<Inner>,
    race: RaceConfig,
}

#[derive(Debug, Default)]
struct Inner {
    /// Entries, newest first.
    entries: Vec<Entry>,
    /// Last assigned identifier.
    last_id: i64,
}

impl MemoryRoster {
    /// Create an empty in-memory roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the race configuration this store reports.
    #[must_use]
    pub fn with_race_config(mut self, race: RaceConfig) -> Self {
        self.race = race;
        self
    }
}

#[async_trait]
impl RosterStore for MemoryRoster {
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn list_checked_in(&self) -> Result<Vec<Entry>> {
        let inner = self.inner.lock().await;
        Ok(inner.entries.clone())
    }

    async fn next_car_number(&self) -> Result<i32> {
        let inner = self.inner.lock().await;
        Ok(inner
            .entries
            .iter()
            .map(|e| e.car_number)
            .max()
            .map_or(1, |n| n + 1))
    }

    async fn checkin(&self, draft: EntryDraft) -> Result<Entry> {
        let mut inner = self.inner.lock().await;

        if inner.entries.iter().any(|e| e.car_number == draft.car_number) {
            return Err(Error::car_number_taken(draft.car_number));
        }

        inner.last_id += 1;
        let entry = Entry {
            id: inner.last_id,
            name: draft.name,
            den: draft.den,
            car_number: draft.car_number,
            car_weight: draft.car_weight,
            checked_in: true,
            created_at: Utc::now(),
        };

        inner.entries.insert(0, entry.clone());
        Ok(entry)
    }

    async fn race_config(&self) -> Result<RaceConfig> {
        Ok(self.race.clone())
    }
}
