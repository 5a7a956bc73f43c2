//! High-level launch service layer.
//!
//! This module provides repository-agnostic operations that work with any
//! implementation of the repository traits. All business rules live here:
//! idempotent seed ingestion, flight number assignment, scheduling
//! validation, and abort semantics. Storage backends stay dumb.

use tracing::{info, warn};

use super::repository::{FullRepository, LaunchRepository, PlanetRepository, RepositoryError};
use crate::models::{Launch, LaunchDraft};
use crate::provider::{LaunchProvider, ProviderError};

/// Flight number returned for an empty store; the next scheduled launch
/// gets `DEFAULT_FLIGHT_NUMBER + 1`.
pub const DEFAULT_FLIGHT_NUMBER: u32 = 100;

/// Customers assigned to every self-scheduled launch, overriding any
/// caller-supplied list.
pub const SCHEDULED_CUSTOMERS: [&str; 2] = ["NASA", "SpaceX"];

// Identity of the first historical launch, used as the seed marker.
const SEED_FLIGHT_NUMBER: u32 = 1;
const SEED_ROCKET: &str = "Falcon 1";
const SEED_MISSION: &str = "FalconSat";

// Bounded retries when a concurrent scheduler wins the same flight number.
const SCHEDULE_MAX_ATTEMPTS: u32 = 5;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error type for service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Scheduling referenced a planet that does not exist.
    #[error("Planet {target} not found")]
    PlanetNotFound { target: String },

    /// Scheduling kept losing the flight-number race.
    #[error("Could not assign a flight number after {attempts} attempts")]
    FlightNumberContention { attempts: u32 },
}

/// Outcome of an abort request.
///
/// The three states are reported separately so callers can distinguish
/// "never existed" from "already aborted" instead of collapsing both into
/// a single false result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortOutcome {
    /// The launch existed and was marked aborted by this call.
    Aborted,
    /// The launch exists but was already in the aborted state.
    AlreadyAborted,
    /// No launch with that flight number exists.
    NotFound,
}

/// Ensure the historical launch data is loaded, fetching it from the
/// provider on first run.
///
/// Looks up the first historical launch (flight 1, Falcon 1 / FalconSat) as
/// an identity check. If present, this is a no-op. Otherwise the full
/// history is fetched once from the provider and every record is upserted
/// keyed by flight number, in provider order.
///
/// Ingestion is not transactional: a provider or store failure midway
/// leaves already-upserted records in place, and the error propagates
/// unmodified. No retry is attempted here.
///
/// # Returns
/// The number of records ingested (0 when the data was already loaded).
pub async fn load_launch_data<R, P>(repo: &R, provider: &P) -> ServiceResult<usize>
where
    R: FullRepository + ?Sized,
    P: LaunchProvider + ?Sized,
{
    if let Some(first) = repo.get_launch(SEED_FLIGHT_NUMBER).await? {
        if first.rocket == SEED_ROCKET && first.mission == SEED_MISSION {
            info!("Launch data already loaded");
            return Ok(0);
        }
        warn!(
            flight_number = SEED_FLIGHT_NUMBER,
            "First launch does not match the expected seed record; re-ingesting"
        );
    }

    let launches = provider.fetch_all_launches().await?;
    info!(count = launches.len(), "Downloaded launch history");

    for launch in &launches {
        repo.upsert_launch(launch).await?;
    }

    info!(count = launches.len(), "Launch history ingested");
    Ok(launches.len())
}

/// List launches ordered ascending by flight number.
///
/// `limit == 0` means "no cap" and returns everything past `skip`; the
/// repository contract documents the same convention.
pub async fn list_launches<R: FullRepository + ?Sized>(
    repo: &R,
    skip: u64,
    limit: u64,
) -> ServiceResult<Vec<Launch>> {
    info!(skip, limit, "Listing launches");
    Ok(repo.list_launches(skip, limit).await?)
}

/// Look up a launch by flight number, as an existence predicate.
pub async fn launch_exists<R: FullRepository + ?Sized>(
    repo: &R,
    flight_number: u32,
) -> ServiceResult<Option<Launch>> {
    Ok(repo.get_launch(flight_number).await?)
}

/// The highest stored flight number, or [`DEFAULT_FLIGHT_NUMBER`] when the
/// store is empty.
pub async fn latest_flight_number<R: FullRepository + ?Sized>(repo: &R) -> ServiceResult<u32> {
    Ok(repo
        .latest_flight_number()
        .await?
        .unwrap_or(DEFAULT_FLIGHT_NUMBER))
}

/// Schedule a new launch from a caller-supplied draft.
///
/// The target planet must exist by Kepler name; no other draft field is
/// validated. The new record gets the next flight number, `upcoming` and
/// `success` forced true, and the fixed customer list.
///
/// Flight number assignment is read-then-write, so two concurrent calls can
/// pick the same number. The write uses a create-only insert; on a key
/// conflict the latest number is re-read and the insert retried a bounded
/// number of times.
pub async fn schedule_launch<R: FullRepository + ?Sized>(
    repo: &R,
    draft: LaunchDraft,
) -> ServiceResult<Launch> {
    if repo.find_planet(&draft.target).await?.is_none() {
        return Err(ServiceError::PlanetNotFound {
            target: draft.target,
        });
    }

    for attempt in 1..=SCHEDULE_MAX_ATTEMPTS {
        let flight_number = latest_flight_number(repo).await? + 1;
        let launch = Launch {
            flight_number,
            mission: draft.mission.clone(),
            rocket: draft.rocket.clone(),
            launch_date: draft.launch_date,
            customers: SCHEDULED_CUSTOMERS.iter().map(|c| c.to_string()).collect(),
            upcoming: true,
            success: true,
        };

        match repo.insert_launch(&launch).await {
            Ok(()) => {
                info!(flight_number, mission = %launch.mission, "Scheduled new launch");
                return Ok(launch);
            }
            Err(e) if e.is_conflict() => {
                warn!(flight_number, attempt, "Lost flight number race, retrying");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(ServiceError::FlightNumberContention {
        attempts: SCHEDULE_MAX_ATTEMPTS,
    })
}

/// Abort a launch by flight number.
///
/// Sets `upcoming = false` and `success = false` on the matching record.
/// An existence check runs first so a missing launch and an already-aborted
/// one are reported as distinct outcomes.
pub async fn abort_launch<R: FullRepository + ?Sized>(
    repo: &R,
    flight_number: u32,
) -> ServiceResult<AbortOutcome> {
    if repo.get_launch(flight_number).await?.is_none() {
        return Ok(AbortOutcome::NotFound);
    }

    if repo.abort_launch(flight_number).await? {
        info!(flight_number, "Launch aborted");
        Ok(AbortOutcome::Aborted)
    } else {
        Ok(AbortOutcome::AlreadyAborted)
    }
}

/// List all known planets.
pub async fn list_planets<R: FullRepository + ?Sized>(
    repo: &R,
) -> ServiceResult<Vec<crate::models::Planet>> {
    Ok(repo.list_planets().await?)
}
