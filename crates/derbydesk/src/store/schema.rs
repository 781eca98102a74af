//! `SQLite` schema definitions for derbydesk.
//!
//! This module contains the SQL statements for creating and managing
//! the roster database schema.

/// SQL statement to create the scouts table.
///
/// `car_number` carries the UNIQUE constraint that makes the store the
/// authority on car-number conflicts.
pub const CREATE_SCOUTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS scouts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    den TEXT NOT NULL,
    car_number INTEGER UNIQUE NOT NULL,
    car_weight REAL NOT NULL,
    checked_in BOOLEAN NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
)
";

/// SQL statement to create an index on `created_at` for newest-first listing.
pub const CREATE_CREATED_AT_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_scouts_created_at ON scouts(created_at DESC)
";

/// SQL statement to create an index on `checked_in` for roster filtering.
pub const CREATE_CHECKED_IN_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_scouts_checked_in ON scouts(checked_in)
";

/// SQL statement to create the race configuration table (singleton row).
pub const CREATE_RACE_CONFIG_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS race_config (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    num_lanes INTEGER NOT NULL DEFAULT 4,
    timer_port TEXT,
    heats_per_scout INTEGER NOT NULL DEFAULT 3,
    scoring_method TEXT NOT NULL DEFAULT 'points'
)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_SCOUTS_TABLE,
    CREATE_CREATED_AT_INDEX,
    CREATE_CHECKED_IN_INDEX,
    CREATE_RACE_CONFIG_TABLE,
    CREATE_METADATA_TABLE,
];
