//! Error types for template operations.

use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while loading or looking up templates.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not loaded: {0}")]
    Missing(String),

    #[error("Failed to read template {id}: {source}")]
    Read {
        id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Template load task failed: {0}")]
    LoadTask(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
