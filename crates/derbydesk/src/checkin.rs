//! Check-in form controller.
//!
//! This module owns the transient form state for race-day check-in and the
//! transition that turns a candidate entry into a persisted roster record.

use tracing::warn;

use crate::entry::{Den, Entry, EntryDraft, WEIGHT_LIMIT_OZ};
use crate::store::RosterStore;

/// Message shown when the name is empty after trimming.
const MSG_NAME_REQUIRED: &str = "Scout name is required";
/// Message shown when the car is over the weight limit.
const MSG_OVER_LIMIT: &str = "Car weight must be 5.0 oz or less";
/// Message shown when the weight is zero or negative.
const MSG_NOT_POSITIVE: &str = "Car weight must be greater than 0";

/// Transient check-in form state.
///
/// All submit-relevant state lives in one record, so the submit transition is
/// a single function from old state and store result to new state.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckinForm {
    /// Candidate scout name.
    pub name: String,
    /// Candidate den selection.
    pub den: Den,
    /// Candidate car number, prefilled from the next-available query.
    pub car_number: i32,
    /// Candidate car weight in ounces.
    pub car_weight: f64,
    /// Message from the last failed validation or store call.
    pub error: Option<String>,
    /// True while a check-in is being persisted.
    pub in_flight: bool,
    /// Checked-in entries, newest first.
    pub roster: Vec<Entry>,
}

impl Default for CheckinForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            den: Den::default(),
            car_number: 1,
            car_weight: WEIGHT_LIMIT_OZ,
            error: None,
            in_flight: false,
            roster: Vec::new(),
        }
    }
}

impl CheckinForm {
    /// Create a form with default candidate values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load initial state from the store.
    ///
    /// A store that fails to initialize has its error surfaced on the form;
    /// failures while fetching the roster or the next car number are logged
    /// and leave the affected field at its default, so the form stays usable
    /// in an empty state.
    pub async fn initialize<S: RosterStore + ?Sized>(&mut self, store: &S) {
        if let Err(err) = store.initialize().await {
            self.error = Some(err.to_string());
        }

        match store.list_checked_in().await {
            Ok(entries) => self.roster = entries,
            Err(err) => warn!("Failed to load roster: {err}"),
        }

        match store.next_car_number().await {
            Ok(number) => self.car_number = number,
            Err(err) => warn!("Failed to get next car number: {err}"),
        }
    }

    /// First failing validation rule, if any.
    ///
    /// Rules are checked in order and only the first failure is reported:
    /// name present, weight at or under the limit, weight positive.
    #[must_use]
    pub fn validate(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some(MSG_NAME_REQUIRED);
        }

        if self.car_weight > WEIGHT_LIMIT_OZ {
            return Some(MSG_OVER_LIMIT);
        }

        if self.car_weight <= 0.0 {
            return Some(MSG_NOT_POSITIVE);
        }

        None
    }

    /// Whether the candidate car is over the weight limit.
    ///
    /// Drives the inline warning next to the weight field.
    #[must_use]
    pub fn over_weight(&self) -> bool {
        self.car_weight > WEIGHT_LIMIT_OZ
    }

    /// Whether the submit affordance is enabled.
    ///
    /// Mirrors the over-limit validation rule and blocks re-entry while a
    /// check-in is in flight. This is the presentation-layer guard; `submit`
    /// still validates.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.in_flight && !self.over_weight()
    }

    /// Submit the candidate entry.
    ///
    /// Validates locally first; a validation failure records the message and
    /// never reaches the store. On a successful insert the returned entry is
    /// prepended to the roster, the candidate fields reset, and the next car
    /// number is fetched fresh. A store failure is surfaced verbatim and
    /// leaves the candidate fields and roster unchanged.
    pub async fn submit<S: RosterStore + ?Sized>(&mut self, store: &S) {
        self.error = None;

        if let Some(message) = self.validate() {
            self.error = Some(message.to_string());
            return;
        }

        self.in_flight = true;

        let draft = EntryDraft {
            name: self.name.trim().to_string(),
            den: self.den,
            car_number: self.car_number,
            car_weight: self.car_weight,
        };

        match store.checkin(draft).await {
            Ok(entry) => {
                self.roster.insert(0, entry);
                self.name.clear();
                self.den = Den::default();
                self.car_weight = WEIGHT_LIMIT_OZ;

                // The candidate number is refreshed rather than bumped
                // locally; the store stays the authority.
                match store.next_car_number().await {
                    Ok(number) => self.car_number = number,
                    Err(err) => warn!("Failed to get next car number: {err}"),
                }
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }

        self.in_flight = false;
    }
}
