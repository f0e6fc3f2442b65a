//! Error types for loading country data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the country dataset.
#[derive(Error, Debug)]
pub enum DataError {
    /// The data file could not be read
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not the expected JSON shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The HTTP request failed or returned an error status
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The source parsed but contained no countries
    #[error("No countries found in {source_name}")]
    Empty { source_name: String },
}
