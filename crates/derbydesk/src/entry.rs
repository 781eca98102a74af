//! Core check-in types for derbydesk.
//!
//! This module defines the fundamental data structures for representing
//! scouts and their cars on the race-day roster.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum allowed car weight in ounces.
pub const WEIGHT_LIMIT_OZ: f64 = 5.0;

/// The den a scout belongs to.
///
/// The set is closed; declaration order is the display order of the check-in
/// selector, and the first value is the default selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Den {
    /// Tiger den.
    #[default]
    Tiger,
    /// Wolf den.
    Wolf,
    /// Bear den.
    Bear,
    /// Webelos den.
    Webelos,
    /// Arrow of Light den.
    #[serde(rename = "Arrow of Light")]
    ArrowOfLight,
}

impl Den {
    /// All dens in display order.
    pub const ALL: [Self; 5] = [
        Self::Tiger,
        Self::Wolf,
        Self::Bear,
        Self::Webelos,
        Self::ArrowOfLight,
    ];

    /// The display name, which is also the stored form.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tiger => "Tiger",
            Self::Wolf => "Wolf",
            Self::Bear => "Bear",
            Self::Webelos => "Webelos",
            Self::ArrowOfLight => "Arrow of Light",
        }
    }

    /// Look up a den by display name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|den| den.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for Den {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A persisted check-in record.
///
/// An entry does not exist until the roster store accepts an insert; after
/// that it is never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier assigned by the roster store.
    pub id: i64,

    /// Scout name, trimmed of surrounding whitespace.
    pub name: String,

    /// The scout's den.
    pub den: Den,

    /// Car number, unique across the event.
    pub car_number: i32,

    /// Car weight in ounces.
    pub car_weight: f64,

    /// True for every persisted entry.
    pub checked_in: bool,

    /// When the store accepted the check-in.
    pub created_at: DateTime<Utc>,
}

/// Insert payload used to create a new [`Entry`].
///
/// The store assigns the identifier, timestamp, and checked-in flag; every
/// field here is persisted unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    /// Scout name.
    pub name: String,
    /// The scout's den.
    pub den: Den,
    /// Requested car number.
    pub car_number: i32,
    /// Car weight in ounces.
    pub car_weight: f64,
}

/// Race-day configuration stored alongside the roster.
///
/// Seeded at store initialization and read back by the status display. No
/// race logic consumes it yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceConfig {
    /// Number of track lanes.
    pub num_lanes: u32,
    /// Serial port of the lane timer, if one is attached.
    pub timer_port: Option<String>,
    /// How many heats each scout races.
    pub heats_per_scout: u32,
    /// Scoring method name.
    pub scoring_method: String,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            num_lanes: 4,
            timer_port: None,
            heats_per_scout: 3,
            scoring_method: "points".to_string(),
        }
    }
}
