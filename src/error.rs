//! Error types for the Extra Life client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! A 404 from the API is never an error: it is reported as `None` or as an
//! empty collection by the caller-facing methods.

use thiserror::Error;

/// The main error type for the Extra Life client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    /// Transport-level failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status other than 404
    #[error("HTTP {status}: {reason}")]
    RequestFailure { status: u16, reason: String },

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    /// The body could not be decoded into the expected shape
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Pagination stopped after {max_pages} pages, server still advertises a next link")]
    PageLimitExceeded { max_pages: u32 },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a request failure from a status code and reason phrase
    pub fn request_failure(status: u16, reason: impl Into<String>) -> Self {
        Self::RequestFailure {
            status,
            reason: reason.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RequestFailure { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the error came from the API rejecting the request
    pub fn is_request_failure(&self) -> bool {
        matches!(self, Error::RequestFailure { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::decode(e.to_string())
    }
}

/// Result type alias for the Extra Life client
pub type Result<T> = std::result::Result<T, Error>;
