//! Configuration error types.

use thiserror::Error;

/// Configuration building and export error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
    #[error("failed to serialize config as json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize config as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("validation failed: {0}")]
    Validation(String),
}
