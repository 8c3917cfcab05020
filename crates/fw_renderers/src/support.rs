//! Shared template access for the builtin renderers.

use std::sync::Arc;

use serde_json::Value;

use fw_core::WidgetResult;
use fw_templates::{TemplateRenderer, TemplateStore};

/// A renderer's read-only view of the template store.
///
/// Renderers hold no template copies; every render reads through the store
/// by identifier and substitutes into the text in place.
pub struct WidgetTemplates {
    store: Arc<TemplateStore>,
    engine: TemplateRenderer,
}

impl WidgetTemplates {
    pub fn new(store: Arc<TemplateStore>) -> Self {
        Self {
            store,
            engine: TemplateRenderer::new(),
        }
    }

    /// Substitute `values` into the template under `id`.
    ///
    /// Fails only when `id` was never loaded; substitution itself has no
    /// failure mode.
    pub fn parse(&self, id: &str, values: &Value) -> WidgetResult<String> {
        let template = self.store.get_required(id)?;
        Ok(self.engine.render(template, values))
    }
}
