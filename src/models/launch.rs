//! Launch record and scheduling draft types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted launch record.
///
/// The flight number is the sole lookup and update key. No surrogate
/// identifier is exposed to callers; records serialize in the wire shape
/// used by the REST API (`flightNumber`, `launchDate`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Launch {
    /// Unique, monotonically assigned identifier
    pub flight_number: u32,
    /// Mission name
    pub mission: String,
    /// Rocket name
    pub rocket: String,
    /// Scheduled or historical launch time
    pub launch_date: DateTime<Utc>,
    /// Payload customers, flattened in provider order
    pub customers: Vec<String>,
    /// True until the launch occurs or is aborted
    pub upcoming: bool,
    /// Launch outcome; set false on abort
    pub success: bool,
}

impl Launch {
    /// Whether this launch has been aborted (no longer upcoming, not successful).
    pub fn is_aborted(&self) -> bool {
        !self.upcoming && !self.success
    }
}

/// Caller-supplied draft for scheduling a new launch.
///
/// The flight number, customers, and upcoming/success flags are assigned by
/// the service layer; callers only name the mission, rocket, date, and the
/// target planet. Mission and rocket default to empty strings when omitted;
/// the core performs no validation on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchDraft {
    #[serde(default)]
    pub mission: String,
    #[serde(default)]
    pub rocket: String,
    pub launch_date: DateTime<Utc>,
    /// Kepler name of the target planet; must exist in the planets store
    pub target: String,
}
