//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and local development. Launches live in a
//! `BTreeMap` keyed by flight number, which gives the ascending listing
//! order for free.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::db::repository::{
    LaunchRepository, PlanetRepository, RepositoryError, RepositoryResult,
};
use crate::models::{Launch, Planet};

/// In-memory local repository.
///
/// All data is stored behind a single `RwLock`, making writes atomic from
/// the point of view of concurrent callers. Ideal for unit tests that need
/// isolation and speed.
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    launches: BTreeMap<u32, Launch>,
    planets: BTreeMap<String, Planet>,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            launches: BTreeMap::new(),
            planets: BTreeMap::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a planet into the repository.
    ///
    /// Planets are read-only through the trait surface; this inherent helper
    /// exists for the server binary and for test setup.
    pub fn add_planet(&self, kepler_name: impl Into<String>) {
        let planet = Planet::new(kepler_name);
        let mut data = self.data.write().unwrap();
        data.planets.insert(planet.kepler_name.clone(), planet);
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all launch and planet data.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        let is_healthy = data.is_healthy;
        *data = LocalData {
            is_healthy,
            ..Default::default()
        };
    }

    /// Number of launches stored.
    pub fn launch_count(&self) -> usize {
        self.data.read().unwrap().launches.len()
    }

    /// Number of planets stored.
    pub fn planet_count(&self) -> usize {
        self.data.read().unwrap().planets.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::Connection(
                "Store is not healthy".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl LaunchRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn get_launch(&self, flight_number: u32) -> RepositoryResult<Option<Launch>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data.launches.get(&flight_number).cloned())
    }

    async fn list_launches(&self, skip: u64, limit: u64) -> RepositoryResult<Vec<Launch>> {
        self.check_health()?;
        let data = self.data.read().unwrap();

        let remaining = data.launches.values().skip(skip as usize);
        let launches = if limit == 0 {
            remaining.cloned().collect()
        } else {
            remaining.take(limit as usize).cloned().collect()
        };
        Ok(launches)
    }

    async fn latest_flight_number(&self) -> RepositoryResult<Option<u32>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data.launches.keys().next_back().copied())
    }

    async fn upsert_launch(&self, launch: &Launch) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        data.launches.insert(launch.flight_number, launch.clone());
        Ok(())
    }

    async fn insert_launch(&self, launch: &Launch) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        if data.launches.contains_key(&launch.flight_number) {
            return Err(RepositoryError::Conflict(format!(
                "Flight number {} already exists",
                launch.flight_number
            )));
        }
        data.launches.insert(launch.flight_number, launch.clone());
        Ok(())
    }

    async fn abort_launch(&self, flight_number: u32) -> RepositoryResult<bool> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        match data.launches.get_mut(&flight_number) {
            Some(launch) if !launch.is_aborted() => {
                launch.upcoming = false;
                launch.success = false;
                Ok(true)
            }
            // Missing, or already in the aborted state: nothing modified.
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl PlanetRepository for LocalRepository {
    async fn find_planet(&self, kepler_name: &str) -> RepositoryResult<Option<Planet>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data.planets.get(kepler_name).cloned())
    }

    async fn list_planets(&self) -> RepositoryResult<Vec<Planet>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data.planets.values().cloned().collect())
    }
}
