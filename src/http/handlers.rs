//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    AbortLaunchResponse, HealthResponse, LaunchListResponse, PlanetListResponse,
    ScheduleLaunchRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::repository::LaunchRepository;
use crate::db::services;
use crate::db::AbortOutcome;
use crate::models::Launch;
use crate::pagination::{compute_pagination, PageQuery};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Launches
// =============================================================================

/// GET /v1/launches?page&limit
///
/// List launches ordered by flight number. Page/limit are normalized by the
/// pagination helper; an uncapped listing is the default.
pub async fn list_launches(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> HandlerResult<LaunchListResponse> {
    let pagination = compute_pagination(&query);
    let launches =
        services::list_launches(state.repository.as_ref(), pagination.skip, pagination.limit)
            .await?;
    let total = launches.len();

    Ok(Json(LaunchListResponse { launches, total }))
}

/// POST /v1/launches
///
/// Schedule a new launch toward a known planet. Returns 201 with the stored
/// record, 400 on a missing property or unknown target.
pub async fn schedule_launch(
    State(state): State<AppState>,
    Json(request): Json<ScheduleLaunchRequest>,
) -> Result<(StatusCode, Json<Launch>), AppError> {
    let draft = request.into_draft().map_err(|property| {
        AppError::BadRequest(format!("Missing required launch property: {}", property))
    })?;

    let launch = services::schedule_launch(state.repository.as_ref(), draft).await?;

    Ok((StatusCode::CREATED, Json(launch)))
}

/// DELETE /v1/launches/{flight_number}
///
/// Abort a launch. 404 when the flight number is unknown, 400 when the
/// launch was already aborted.
pub async fn abort_launch(
    State(state): State<AppState>,
    Path(flight_number): Path<u32>,
) -> HandlerResult<AbortLaunchResponse> {
    match services::abort_launch(state.repository.as_ref(), flight_number).await? {
        AbortOutcome::Aborted => Ok(Json(AbortLaunchResponse {
            flight_number,
            aborted: true,
        })),
        AbortOutcome::AlreadyAborted => {
            Err(AppError::BadRequest("Launch not aborted".to_string()))
        }
        AbortOutcome::NotFound => Err(AppError::NotFound("Launch not found".to_string())),
    }
}

// =============================================================================
// Planets
// =============================================================================

/// GET /v1/planets
///
/// List all known habitable planets.
pub async fn list_planets(State(state): State<AppState>) -> HandlerResult<PlanetListResponse> {
    let planets = services::list_planets(state.repository.as_ref()).await?;
    let total = planets.len();

    Ok(Json(PlanetListResponse { planets, total }))
}
