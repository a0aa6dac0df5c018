//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] lc_http_client::LcError),

    /// README update error
    #[error("README error: {0}")]
    Readme(#[from] ReadmeError),
}

/// README-specific errors
#[derive(Error, Debug)]
pub enum ReadmeError {
    /// IO error while reading or writing the document
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document has no LC_SOLVED_START/LC_SOLVED_END marker pair
    #[error("Missing LC_SOLVED_START/LC_SOLVED_END markers in {}", path.display())]
    MissingMarkers { path: PathBuf },
}
