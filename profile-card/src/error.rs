//! Error types for profile card rendering

use thiserror::Error;

/// Profile card error types
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Home town code is not `country-province-city`
    #[error("Malformed home town code: {0:?}")]
    MalformedHomeTown(String),

    /// Avatar download failed (transport, timeout, non-2xx status)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Profile record could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for profile card operations
pub type ProfileResult<T> = Result<T, ProfileError>;
