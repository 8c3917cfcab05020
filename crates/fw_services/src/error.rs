//! Error types for external service calls.

use std::time::Duration;

use thiserror::Error;

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by external collaborators.
///
/// Failures are propagated verbatim to the render caller; no retry and no
/// fallback markup is synthesized on top of them.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{service} call failed: {message}")]
    Upstream { service: &'static str, message: String },

    #[error("{service} call timed out after {after:?}")]
    TimedOut { service: &'static str, after: Duration },
}

impl ServiceError {
    /// An upstream failure reported by the named service.
    pub fn upstream(service: &'static str, message: impl Into<String>) -> Self {
        Self::Upstream {
            service,
            message: message.into(),
        }
    }
}
