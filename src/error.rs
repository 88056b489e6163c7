//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting the directory to a file.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Writing, flushing or renaming the export file failed
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the directory to JSON
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors returned by the contact service for a single command.
///
/// None of these are fatal: the command loop reports them and keeps going.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A name, phone or email failed its format check
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Export to a file failed
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// Convenience type alias for Results with ExportError
pub type ExportResult<T> = Result<T, ExportError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;
