//! Error handling for the Bloom & Grow core

use shared::DimensionError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// A space's declared shape is missing a required dimension field.
    /// Callers render an incomplete-data state for this, never a crash.
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error("validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("duplicate entry: {0}")]
    DuplicateEntry(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("report error: {0}")]
    Report(String),
}

impl AppError {
    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for services
pub type AppResult<T> = Result<T, AppError>;
