//! Error types for the web manager UI

use thiserror::Error;

/// Failure of a single API call.
///
/// Kept `Clone + PartialEq` so it can be stored in a reactive signal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("HTTP error: {status} {text}")]
    Status { status: u16, text: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Invalid request path: {0:?}")]
    InvalidPath(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Rejected configuration layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Malformed config document: {0}")]
    Json(String),
    #[error("Invalid API base URL: {0:?}")]
    InvalidBaseUrl(String),
    #[error("Invalid log level: {0:?}")]
    InvalidLogLevel(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;
