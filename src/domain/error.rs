//! Domain error types

use thiserror::Error;

/// Error when parsing a permission status string
#[derive(Debug, Clone, Error)]
#[error("Invalid permission status: \"{input}\". Valid statuses are: granted, denied, not-determined, provisional")]
pub struct InvalidPermissionStatusError {
    pub input: String,
}

/// Error when an unknown backend kind is requested
#[derive(Debug, Clone, Error)]
#[error("Invalid backend: \"{input}\". Valid backends are: auto, unsupported")]
pub struct InvalidBackendError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
