//! Outbound client for the external launch-data provider.
//!
//! The provider is queried exactly once, during first-run seeding. The
//! [`LaunchProvider`] trait is the seam between the service layer and the
//! wire client so seeding logic can be tested against a stub; [`SpaceXClient`]
//! is the real reqwest-based implementation.

pub mod spacex;

pub use spacex::{ProviderConfig, SpaceXClient};

use async_trait::async_trait;

use crate::models::Launch;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Error type for provider operations.
///
/// Any failure here is fatal for the ingestion run; no retry or backoff is
/// layered on top.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Transport or decoding failure from the HTTP client.
    #[error("Launch data request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Launch data download failed with status {status}")]
    Status { status: u16 },
}

/// Source of historical launch records.
#[async_trait]
pub trait LaunchProvider: Send + Sync {
    /// Fetch the full launch history, unpaginated, with rocket names and
    /// payload customers already resolved into each record.
    async fn fetch_all_launches(&self) -> ProviderResult<Vec<Launch>>;
}
