//! Database module for launch record storage.
//!
//! This module provides abstractions for storage operations via the
//! Repository pattern, allowing different document-store backends to be
//! swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, server binary)             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Logic            │
//! │  - Seed-data ingestion orchestration                     │
//! │  - Flight number assignment                              │
//! │  - Scheduling validation and abort semantics             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface    │
//! │  - LaunchRepository (launch reads/writes)                │
//! │  - PlanetRepository (planet lookups)                     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The repository trait is the seam for the real document-store client: any
//! backend exposing find-one, sorted skip/limit listing, upsert, and a
//! create-only insert can implement it. The bundled [`LocalRepository`] keeps
//! everything in memory for unit testing and local development.

pub mod repositories;
pub mod repository;
pub mod services;

pub use repositories::LocalRepository;
pub use repository::{
    FullRepository, LaunchRepository, PlanetRepository, RepositoryError, RepositoryResult,
};
pub use services::{
    abort_launch, latest_flight_number, launch_exists, list_launches, list_planets,
    load_launch_data, schedule_launch, AbortOutcome, ServiceError, ServiceResult,
    DEFAULT_FLIGHT_NUMBER,
};
