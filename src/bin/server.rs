//! Launchtrack HTTP Server Binary
//!
//! Main entry point for the launchtrack REST API server. It initializes the
//! repository, seeds planet and launch data, sets up the HTTP router, and
//! starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! SPACEX_API_URL=https://api.spacexdata.com/v4/launches/query \
//!   PLANETS_PATH=planets.txt \
//!   cargo run --bin launchtrack-server
//! ```
//!
//! # Environment Variables
//!
//! - `SPACEX_API_URL`: Launch-data provider query endpoint (required)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8000)
//! - `PLANETS_PATH`: File of planet Kepler names to seed (optional)
//! - `RUST_LOG`: Log filter (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use launchtrack::config::{read_planet_names, ServerConfig};
use launchtrack::db::{self, LocalRepository};
use launchtrack::http::{create_router, AppState};
use launchtrack::provider::{ProviderConfig, SpaceXClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting launchtrack HTTP server");

    let config = ServerConfig::from_env().context("Failed to load server configuration")?;

    let repository = LocalRepository::new();

    // Seed planets before any scheduling can reference them.
    if let Some(path) = &config.planets_path {
        let names = read_planet_names(path)?;
        for name in &names {
            repository.add_planet(name);
        }
        info!(count = names.len(), "Seeded habitable planets");
    }

    // First-run launch ingestion; a no-op when history is already present.
    let provider = SpaceXClient::new(ProviderConfig::new(config.provider_url.clone()));
    let ingested = db::load_launch_data(&repository, &provider)
        .await
        .context("Failed to load launch data")?;
    info!(ingested, "Launch data ready");

    let state = AppState::new(Arc::new(repository));
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid bind address")?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
