//! Error types for herodex

use std::fmt;

/// Unified error type for API and cache operations.
///
/// Cloneable: a single settled failure is handed out to every caller
/// attached to the same in-flight request, so the underlying reqwest
/// errors are flattened to their messages at the conversion boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroError {
    /// HTTP request failed (connect error, timeout, etc.)
    Network(String),
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
    /// Failed to decode the response body
    Decode(String),
}

impl fmt::Display for HeroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeroError::Network(msg) => write!(f, "Network error: {}", msg),
            HeroError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            HeroError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for HeroError {}

impl From<reqwest::Error> for HeroError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            HeroError::Decode(err.to_string())
        } else {
            HeroError::Network(err.to_string())
        }
    }
}

/// Result alias for herodex operations
pub type HeroResult<T> = Result<T, HeroError>;
