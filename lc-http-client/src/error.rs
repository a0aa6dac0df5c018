//! Error types for the LeetCode HTTP client

use thiserror::Error;

/// Errors that can occur when using the LeetCode HTTP client
#[derive(Error, Debug)]
pub enum LcError {
    /// HTTP request failed (connection error, timeout, unreadable body)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid HTTP status code received
    #[error("Invalid HTTP status: {status}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Response body is not the expected JSON document
    #[error("Failed to parse response JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The response did not contain a matched user
    #[error("Could not find LeetCode user: {username}")]
    UserNotFound {
        /// The username that was queried
        username: String,
    },

    /// The submission list had neither an "All" entry nor any per-difficulty entry
    #[error("Response contains no accepted submission counts")]
    MissingStats,

    /// The per-difficulty counts do not fit in a u64 when summed
    #[error("Accepted submission counts overflow when summed")]
    CountOverflow,

    /// A credential could not be encoded as an HTTP header value
    #[error("Credential contains characters not allowed in HTTP headers")]
    InvalidHeader,

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
