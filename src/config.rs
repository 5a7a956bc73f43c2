//! Server configuration and environment variable handling.
//!
//! Configuration is read once at startup and injected into the components
//! that need it; nothing deeper in the crate reads the environment.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingVar(&'static str),

    #[error("{0} has an invalid value: {1}")]
    InvalidVar(&'static str, String),

    #[error("Failed to read planets file {path}: {source}")]
    PlanetsFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host (default: 0.0.0.0)
    pub host: String,
    /// Bind port (default: 8000)
    pub port: u16,
    /// Launch-data provider query endpoint
    pub provider_url: String,
    /// Optional file of planet Kepler names to seed, one per line
    pub planets_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Create a new server configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `SPACEX_API_URL` (required): provider query endpoint
    /// - `HOST` (optional, default: 0.0.0.0): bind host
    /// - `PORT` (optional, default: 8000): bind port
    /// - `PLANETS_PATH` (optional): planet seed file
    ///
    /// # Errors
    /// Returns an error if required variables are not set or malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let provider_url =
            env::var("SPACEX_API_URL").map_err(|_| ConfigError::MissingVar("SPACEX_API_URL"))?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidVar("PORT", raw))?,
            Err(_) => 8000,
        };
        let planets_path = env::var("PLANETS_PATH").ok().map(PathBuf::from);

        Ok(Self {
            host,
            port,
            provider_url,
            planets_path,
        })
    }
}

/// Read planet Kepler names from a seed file.
///
/// One name per line; blank lines and `#` comments are skipped.
pub fn read_planet_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::PlanetsFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
