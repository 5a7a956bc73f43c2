//! Repository trait definitions for launch and planet storage.
//!
//! The traits abstract the underlying document store. Splitting launches and
//! planets keeps implementations focused; code that needs both uses the
//! [`FullRepository`] composite bound.

pub mod error;

pub use error::{RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::models::{Launch, Planet};

/// Repository trait for launch record operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait LaunchRepository: Send + Sync {
    /// Check if the store connection is healthy.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Look up a launch by flight number.
    ///
    /// Returns `Ok(None)` when no record exists; callers use this as an
    /// existence predicate rather than catching an error.
    async fn get_launch(&self, flight_number: u32) -> RepositoryResult<Option<Launch>>;

    /// List launches ordered ascending by flight number, skipping `skip`
    /// records and returning at most `limit`.
    ///
    /// A `limit` of 0 means "no cap": all remaining records are returned.
    async fn list_launches(&self, skip: u64, limit: u64) -> RepositoryResult<Vec<Launch>>;

    /// The maximum flight number currently stored, or `None` for an empty store.
    async fn latest_flight_number(&self) -> RepositoryResult<Option<u32>>;

    /// Create-or-overwrite keyed by flight number (the ingestion write path).
    async fn upsert_launch(&self, launch: &Launch) -> RepositoryResult<()>;

    /// Create-only insert keyed by flight number.
    ///
    /// Fails with [`RepositoryError::Conflict`] when the flight number is
    /// already taken. Scheduling relies on this to detect lost races on
    /// flight number assignment and retry.
    async fn insert_launch(&self, launch: &Launch) -> RepositoryResult<()>;

    /// Mark a launch as aborted: `upcoming = false`, `success = false`.
    ///
    /// Returns `Ok(true)` only when a stored record actually changed;
    /// a missing record or one already in the aborted state yields `Ok(false)`.
    async fn abort_launch(&self, flight_number: u32) -> RepositoryResult<bool>;
}

/// Repository trait for planet lookups (read-only from this core).
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// Look up a planet by its Kepler name.
    async fn find_planet(&self, kepler_name: &str) -> RepositoryResult<Option<Planet>>;

    /// List all known planets, ordered by Kepler name.
    async fn list_planets(&self) -> RepositoryResult<Vec<Planet>>;
}

/// Composite trait bound for a complete repository implementation.
///
/// Automatically implemented for any type implementing both traits; use it
/// as a convenient bound in the service layer.
pub trait FullRepository: LaunchRepository + PlanetRepository {}

impl<T> FullRepository for T where T: LaunchRepository + PlanetRepository {}
