//! Error types for dex-core

use thiserror::Error;

/// Core error type for the Pokédex
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Configuration file not found
    #[error("[C001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// C002: Failed to parse configuration file
    #[error("[C002] Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// C003: Invalid configuration value
    #[error("[C003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// C004: Generation number outside the band table
    #[error("[C004] Unknown generation {generation}: known generations are {known}")]
    UnknownGeneration { generation: u8, known: String },

    /// C005: Malformed generation list on the command line
    #[error("[C005] Invalid generation '{input}': expected a number such as 1 or 9")]
    InvalidGeneration { input: String },

    /// C006: IO error with file path context
    #[error("[C006] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
