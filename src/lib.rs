//! # Launchtrack Backend
//!
//! Space-launch tracking service: ingests launch history from the SpaceX
//! query API, persists launch records, and exposes operations to list,
//! schedule, and abort launches. The backend exposes a REST API via Axum.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain types (launches, planets, scheduling drafts)
//! - [`db`]: Repository pattern, service layer, and persistence abstractions
//! - [`provider`]: Outbound client for the external launch-data provider
//! - [`pagination`]: Page/limit to skip/limit conversion for listings
//! - [`config`]: Server configuration loaded from the environment
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod config;
pub mod db;
pub mod models;
pub mod pagination;
pub mod provider;

#[cfg(feature = "http-server")]
pub mod http;
