//! Error types for tilstats-core
//!
//! Analytics functions are total and never return errors. Only the
//! boundary helpers (config, logging, snapshot loading) are fallible.

use thiserror::Error;

/// Main error type for the tilstats-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error (entry or backlog snapshots)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Logging setup error
    #[error("logging error: {0}")]
    Logging(String),
}

/// Result type alias for tilstats-core
pub type Result<T> = std::result::Result<T, Error>;
