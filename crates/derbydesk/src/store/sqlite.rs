//! `SQLite`-backed roster store.
//!
//! Provides persistent storage for check-in records, newest-first listing,
//! advisory car-number computation, and the race configuration row.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::entry::{Den, Entry, EntryDraft, RaceConfig};
use crate::error::{Error, Result};
use crate::store::{migrations, RosterStore};

/// Persistent roster storage.
///
/// The connection is serialized behind an async mutex; identifier assignment
/// and car-number computation therefore never race within one process.
#[derive(Debug)]
pub struct SqliteRoster {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Mutex<Connection>,
    /// Values seeded into the race configuration row on first initialize.
    race_defaults: RaceConfig,
}

impl SqliteRoster {
    /// Open or create a roster database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist.
    /// The schema is not touched until [`RosterStore::initialize`] runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening roster database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        // Enable WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        Ok(Self {
            path,
            conn: Mutex::new(conn),
            race_defaults: RaceConfig::default(),
        })
    }

    /// Create an in-memory roster for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn: Mutex::new(conn),
            race_defaults: RaceConfig::default(),
        })
    }

    /// Replace the race configuration defaults seeded at initialization.
    #[must_use]
    pub fn with_race_defaults(mut self, defaults: RaceConfig) -> Self {
        self.race_defaults = defaults;
        self
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Count persisted check-ins.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM scouts WHERE checked_in = 1",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Fetch a single entry by its identifier.
    fn get_entry(conn: &Connection, id: i64) -> Result<Entry> {
        let entry = conn.query_row(
            r"
            SELECT id, name, den, car_number, car_weight, checked_in, created_at
            FROM scouts WHERE id = ?1
            ",
            [id],
            Self::row_to_entry,
        )?;
        Ok(entry)
    }

    /// Convert a database row to an [`Entry`].
    fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<Entry> {
        let id: i64 = row.get(0)?;
        let name: String = row.get(1)?;
        let den_str: String = row.get(2)?;
        let car_number: i32 = row.get(3)?;
        let car_weight: f64 = row.get(4)?;
        let checked_in: bool = row.get(5)?;
        let created_str: String = row.get(6)?;

        let created_at = DateTime::parse_from_rfc3339(&created_str)
            .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));

        let den = Den::from_name(&den_str).unwrap_or_else(|| {
            warn!("Unknown den: {}, defaulting to {}", den_str, Den::default());
            Den::default()
        });

        Ok(Entry {
            id,
            name,
            den,
            car_number,
            car_weight,
            checked_in,
            created_at,
        })
    }

    /// Map an insert failure, detecting car-number conflicts.
    fn map_insert_error(err: rusqlite::Error, car_number: i32) -> Error {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Error::car_number_taken(car_number)
            }
            _ => Error::DatabaseQuery(err),
        }
    }
}

#[async_trait]
impl RosterStore for SqliteRoster {
    async fn initialize(&self) -> Result<()> {
        let conn = self.conn.lock().await;

        migrations::initialize_schema(&conn)?;

        // Seed the race configuration singleton; an existing row wins.
        conn.execute(
            r"
            INSERT OR IGNORE INTO race_config
                (id, num_lanes, timer_port, heats_per_scout, scoring_method)
            VALUES (1, ?1, ?2, ?3, ?4)
            ",
            params![
                self.race_defaults.num_lanes,
                self.race_defaults.timer_port,
                self.race_defaults.heats_per_scout,
                self.race_defaults.scoring_method,
            ],
        )?;

        info!("Roster database ready at {}", self.path.display());
        Ok(())
    }

    async fn list_checked_in(&self) -> Result<Vec<Entry>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            r"
            SELECT id, name, den, car_number, car_weight, checked_in, created_at
            FROM scouts WHERE checked_in = 1
            ORDER BY created_at DESC, id DESC
            ",
        )?;

        let entries = stmt
            .query_map([], Self::row_to_entry)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    async fn next_car_number(&self) -> Result<i32> {
        let conn = self.conn.lock().await;
        let max: Option<i32> =
            conn.query_row("SELECT MAX(car_number) FROM scouts", [], |row| row.get(0))?;
        Ok(max.map_or(1, |n| n + 1))
    }

    async fn checkin(&self, draft: EntryDraft) -> Result<Entry> {
        let conn = self.conn.lock().await;
        let created_at = Utc::now().to_rfc3339();

        conn.execute(
            r"
            INSERT INTO scouts (name, den, car_number, car_weight, checked_in, created_at)
            VALUES (?1, ?2, ?3, ?4, 1, ?5)
            ",
            params![
                draft.name,
                draft.den.name(),
                draft.car_number,
                draft.car_weight,
                created_at,
            ],
        )
        .map_err(|err| Self::map_insert_error(err, draft.car_number))?;

        let id = conn.last_insert_rowid();
        debug!("Checked in entry {} (car {})", id, draft.car_number);

        Self::get_entry(&conn, id)
    }

    async fn race_config(&self) -> Result<RaceConfig> {
        let conn = self.conn.lock().await;
        let config = conn
            .query_row(
                r"
                SELECT num_lanes, timer_port, heats_per_scout, scoring_method
                FROM race_config WHERE id = 1
                ",
                [],
                |row| {
                    Ok(RaceConfig {
                        num_lanes: row.get(0)?,
                        timer_port: row.get(1)?,
                        heats_per_scout: row.get(2)?,
                        scoring_method: row.get(3)?,
                    })
                },
            )
            .optional()?;

        // An uninitialized database reads back the configured defaults.
        Ok(config.unwrap_or_else(|| self.race_defaults.clone()))
    }
}
