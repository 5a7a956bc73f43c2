//! Data Transfer Objects for the HTTP API.
//!
//! Launch and planet records already serialize in their wire shape, so the
//! DTOs here only cover request bodies and response envelopes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Launch, LaunchDraft, Planet};

/// Request body for scheduling a new launch.
///
/// Every field is optional at the serde level so the handler can report a
/// missing property as a 400 instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleLaunchRequest {
    #[serde(default)]
    pub mission: Option<String>,
    #[serde(default)]
    pub rocket: Option<String>,
    #[serde(default)]
    pub launch_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub target: Option<String>,
}

impl ScheduleLaunchRequest {
    /// Validate presence of the required properties and build the draft.
    ///
    /// Returns the name of the first missing property on failure.
    pub fn into_draft(self) -> Result<LaunchDraft, &'static str> {
        let mission = self.mission.filter(|m| !m.is_empty()).ok_or("mission")?;
        let rocket = self.rocket.filter(|r| !r.is_empty()).ok_or("rocket")?;
        let launch_date = self.launch_date.ok_or("launchDate")?;
        let target = self.target.filter(|t| !t.is_empty()).ok_or("target")?;

        Ok(LaunchDraft {
            mission,
            rocket,
            launch_date,
            target,
        })
    }
}

/// Launch list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchListResponse {
    pub launches: Vec<Launch>,
    /// Number of records in this page
    pub total: usize,
}

/// Abort confirmation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbortLaunchResponse {
    pub flight_number: u32,
    pub aborted: bool,
}

/// Planet list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetListResponse {
    pub planets: Vec<Planet>,
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connection status
    pub database: String,
}
