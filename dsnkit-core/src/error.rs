//! Error types.
//!
//! URL parsing, option merging and alias building never fail. Errors only
//! come from the surrounding plumbing: resolving a driver by name, expanding
//! environment variables and loading option files.
//!
//! ```rust
//! use dsnkit_core::{DsnError, Driver};
//!
//! let err = Driver::from_scheme("gopher").unwrap_err();
//! assert!(matches!(err, DsnError::UnknownDriver(_)));
//! assert_eq!(err.to_string(), "Unknown database driver: gopher");
//! ```

use thiserror::Error;

/// Result type for dsnkit operations.
pub type DsnResult<T> = Result<T, DsnError>;

/// Errors raised by the configuration layer.
#[derive(Error, Debug)]
pub enum DsnError {
    /// Unknown database driver.
    #[error("Unknown database driver: {0}")]
    UnknownDriver(String),

    /// Environment variable not found.
    #[error("Environment variable not found: {0}")]
    EnvNotFound(String),

    /// Invalid environment variable value.
    #[error("Invalid environment variable '{name}': {message}")]
    InvalidEnvValue { name: String, message: String },

    /// Failed to read an options file.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid TOML options.
    #[error("Invalid TOML options: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid JSON options.
    #[error("Invalid JSON options: {0}")]
    Json(#[from] serde_json::Error),

    /// Options file with an extension we cannot read.
    #[error("Unsupported options format: {0}")]
    UnsupportedFormat(String),
}
