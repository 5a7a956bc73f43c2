//! HTTP server module for the launchtrack backend.
//!
//! This module provides an axum-based HTTP server that exposes the launch
//! repository as a REST API. It reuses the service layer and repository
//! pattern from the core library; handlers stay thin.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
