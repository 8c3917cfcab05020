//! Widget descriptors for administrative configuration tooling.

use serde::{Deserialize, Serialize};

/// Catalog metadata describing one widget type.
///
/// Descriptors are assembled once and never mutated afterwards. The merged
/// catalog may contain more than one descriptor with the same `widget` tag
/// (externally contributed entries are kept alongside the built-ins);
/// duplicate-tag resolution belongs to the consumer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WidgetDescriptor {
    /// The type tag, equal to the tag the renderer is registered under.
    pub widget: String,
    /// Human-readable name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Raw admin-configuration template text for this widget type.
    pub content: String,
}

impl WidgetDescriptor {
    pub fn new(
        widget: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            widget: widget.into(),
            name: name.into(),
            description: description.into(),
            content: content.into(),
        }
    }
}
