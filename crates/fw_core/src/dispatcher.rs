//! Render dispatch over the widget registry.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::WidgetResult;
use crate::instance::WidgetInstance;
use crate::registry::WidgetRegistry;

/// The render entry surface.
///
/// Resolves a type tag to its registered renderer, invokes it, and forwards
/// the completion unchanged — no retries, no dispatcher-level timeout
/// (deadlines are enforced at the external call sites inside renderers).
pub struct Dispatcher {
    registry: Arc<WidgetRegistry>,
}

impl Dispatcher {
    /// Create a dispatcher over an assembled registry.
    pub fn new(registry: Arc<WidgetRegistry>) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    /// Render one widget instance.
    ///
    /// Completes with the renderer's markup, the renderer's error, or
    /// `UnknownWidget` when no renderer is registered for `widget_type`.
    pub async fn render(
        &self,
        widget_type: &str,
        widget: &WidgetInstance,
    ) -> WidgetResult<String> {
        let renderer = self.registry.get_required(widget_type)?;

        debug!("Dispatching widget render: {}", widget_type);
        match renderer.render(widget).await {
            Ok(markup) => {
                debug!("Widget '{}' rendered {} bytes", widget_type, markup.len());
                Ok(markup)
            }
            Err(e) => {
                warn!("Widget '{}' render failed: {}", widget_type, e);
                Err(e)
            }
        }
    }
}
