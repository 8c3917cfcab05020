//! The uniform render contract.

use async_trait::async_trait;

use crate::error::WidgetResult;
use crate::instance::WidgetInstance;

/// A widget renderer: one implementation per widget type.
///
/// Renderers are heterogeneous behind this one interface — pure string
/// substitution, conditional post-processing, or remote data lookups — but
/// every implementation completes exactly once per call with either markup
/// or an error, and never blocks the caller: renderer logic suspends only
/// at external service boundaries.
///
/// # Thread Safety
///
/// Renderers must be `Send + Sync`; one instance serves all concurrent
/// renders and holds no mutable cross-call state.
#[async_trait]
pub trait Widget: Send + Sync {
    /// The stable type tag this renderer is registered under.
    fn widget_type(&self) -> &str;

    /// Produce the markup fragment for one widget instance.
    async fn render(&self, widget: &WidgetInstance) -> WidgetResult<String>;
}
