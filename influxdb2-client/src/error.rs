//! Error types for InfluxDB2 API operations
//!
//! "Entity does not exist" is a dedicated variant so callers can classify
//! absence with [`ApiError::is_not_found`] instead of inspecting messages.

use thiserror::Error;

/// InfluxDB2 API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested entity does not exist.
    #[error("{kind} not found: {key}")]
    NotFound {
        /// Entity kind (e.g. "organization").
        kind: &'static str,
        /// Name or id that was looked up.
        key: String,
    },

    /// An entity with the same unique key already exists.
    #[error("{kind} already exists: {key}")]
    Conflict {
        /// Entity kind.
        kind: &'static str,
        /// Conflicting name or id.
        key: String,
    },

    /// Authentication failed.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// Invalid response from the API.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// The request could not be built from the given input.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

impl ApiError {
    /// Create a not-found error for an organization key.
    pub fn organization_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "organization",
            key: key.into(),
        }
    }

    /// Whether this error means the entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for InfluxDB2 API operations.
pub type ApiResult<T> = Result<T, ApiError>;
