//! Error types for the contract loader

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum LoaderError {
    /// ABI file could not be opened or read
    #[error("Failed to read ABI file {path:?}: {source}")]
    AbiRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// ABI file is not valid JSON (or not a valid ABI for typed loads)
    #[error("Failed to parse ABI file {path:?}: {source}")]
    AbiParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Missing or malformed credentials
    #[error("Credentials error: {0}")]
    Credentials(String),

    /// Provider error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Contract call error
    #[error("Contract call error: {0}")]
    Contract(String),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(String),
}

impl From<config::ConfigError> for LoaderError {
    fn from(e: config::ConfigError) -> Self {
        LoaderError::Configuration(e.to_string())
    }
}
