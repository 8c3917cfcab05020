//! Timeout boundary around external calls.
//!
//! The upstream system waits on external services without bound; a stalled
//! call stalls the render indefinitely. Here every call site goes through
//! [`bounded`], which enforces a configurable per-call deadline. Use
//! [`CallLimits::unbounded`] to reproduce the original wait-forever
//! behavior.

use std::future::Future;
use std::time::Duration;

use crate::error::{ServiceError, ServiceResult};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-call limits applied to every external service call.
#[derive(Debug, Clone, Copy)]
pub struct CallLimits {
    timeout: Option<Duration>,
}

impl Default for CallLimits {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl CallLimits {
    /// Limits with the given per-call timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    /// No deadline: calls may wait forever.
    pub fn unbounded() -> Self {
        Self { timeout: None }
    }

    /// The configured per-call timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Await a service call under the configured deadline.
///
/// A call that outlives the deadline resolves to
/// [`ServiceError::TimedOut`] naming the service.
pub async fn bounded<T>(
    limits: &CallLimits,
    service: &'static str,
    call: impl Future<Output = ServiceResult<T>>,
) -> ServiceResult<T> {
    match limits.timeout {
        Some(after) => match tokio::time::timeout(after, call).await {
            Ok(result) => result,
            Err(_) => Err(ServiceError::TimedOut { service, after }),
        },
        None => call.await,
    }
}
