//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use launchtrack::models::Launch;
use launchtrack::provider::{LaunchProvider, ProviderError, ProviderResult};

/// Build a historical launch record with sensible defaults.
pub fn launch(flight_number: u32, mission: &str, rocket: &str) -> Launch {
    Launch {
        flight_number,
        mission: mission.to_string(),
        rocket: rocket.to_string(),
        launch_date: Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap(),
        customers: vec![],
        upcoming: true,
        success: true,
    }
}

/// The seed-marker launch the service layer checks for.
pub fn falconsat() -> Launch {
    Launch {
        upcoming: false,
        success: false,
        ..launch(1, "FalconSat", "Falcon 1")
    }
}

/// In-memory stand-in for the external launch-data provider.
pub struct StubProvider {
    launches: Vec<Launch>,
    calls: AtomicUsize,
    fail_status: Option<u16>,
}

impl StubProvider {
    pub fn new(launches: Vec<Launch>) -> Self {
        Self {
            launches,
            calls: AtomicUsize::new(0),
            fail_status: None,
        }
    }

    /// A provider that answers every request with the given status code.
    pub fn failing(status: u16) -> Self {
        Self {
            launches: vec![],
            calls: AtomicUsize::new(0),
            fail_status: Some(status),
        }
    }

    /// How many times the provider has been queried.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LaunchProvider for StubProvider {
    async fn fetch_all_launches(&self) -> ProviderResult<Vec<Launch>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.fail_status {
            return Err(ProviderError::Status { status });
        }
        Ok(self.launches.clone())
    }
}
