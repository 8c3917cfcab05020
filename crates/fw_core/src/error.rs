//! Error types for widget dispatch and rendering.

use thiserror::Error;

use fw_services::ServiceError;
use fw_templates::TemplateError;

/// Result type alias for widget operations.
pub type WidgetResult<T> = Result<T, WidgetError>;

/// Errors that can surface through the render completion channel.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// Dispatch was requested for a type no renderer is registered under.
    #[error("No widget renderer registered for type: {0}")]
    UnknownWidget(String),

    /// A template was never loaded, or could not be loaded at startup.
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// An external service call failed; propagated verbatim.
    #[error("Upstream service failure: {0}")]
    Service(#[from] ServiceError),
}
