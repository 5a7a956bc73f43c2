//! Error types for repository operations.

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum RepositoryError {
    /// Store connection errors. Typically transient.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query execution errors.
    #[error("Query error: {0}")]
    Query(String),

    /// Requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A create-only write hit an existing key.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Configuration or initialization error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal/unexpected errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Whether this error came from a create-only write hitting an existing key.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Whether retrying the operation could reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}
