//! Error types for provider operations

use influxdb2_client::{ApiError, ConfigError};
use thiserror::Error;

/// Failure to project a backend response onto a resource record.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// The backend omitted a field the record requires.
    #[error("Organization response is missing `{0}`")]
    MissingField(&'static str),
}

/// Provider error types.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Importing an existing organization failed
    #[error("unable to import Organization ({id}) : {source}")]
    Import {
        /// Organization id being imported
        id: String,
        /// Underlying API error
        source: ApiError,
    },

    /// Response could not be projected onto the record
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// Provider configuration is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// API client error
    #[error(transparent)]
    Client(#[from] ApiError),
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
