//! Error types for tm-tracker

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[allow(dead_code)]
    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Dispatch-store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No dispatch schedule found for {0}")]
    NotFound(String),

    #[allow(dead_code)]
    #[error("Store data corrupted: {0}")]
    Corrupted(String),

    #[error("Store IO error: {0}")]
    IoError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("CSV loader error: {0}")]
    CsvLoader(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("Invalid dispatch entry: {0}")]
    InvalidDispatch(String),
}

pub type Result<T> = std::result::Result<T, Error>;
