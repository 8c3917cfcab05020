//! Widget registry mapping type tags to renderer implementations.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{WidgetError, WidgetResult};
use crate::widget::Widget;

/// A registry of widget renderers.
///
/// The registry maps type tags to their renderer implementations. It is
/// assembled once at startup and treated as read-only shared state
/// afterwards.
#[derive(Default)]
pub struct WidgetRegistry {
    widgets: HashMap<String, Arc<dyn Widget>>,
}

impl WidgetRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            widgets: HashMap::new(),
        }
    }

    /// Register a renderer under its `widget_type()` tag.
    ///
    /// Registering the same tag twice replaces the earlier renderer.
    pub fn register(&mut self, widget: Arc<dyn Widget>) {
        let tag = widget.widget_type().to_string();
        debug!("Registering widget renderer: {}", tag);
        self.widgets.insert(tag, widget);
    }

    /// Get a renderer by type tag.
    pub fn get(&self, widget_type: &str) -> Option<Arc<dyn Widget>> {
        self.widgets.get(widget_type).cloned()
    }

    /// Get a renderer by type tag, or an `UnknownWidget` error.
    pub fn get_required(&self, widget_type: &str) -> WidgetResult<Arc<dyn Widget>> {
        self.get(widget_type)
            .ok_or_else(|| WidgetError::UnknownWidget(widget_type.to_string()))
    }

    /// Check if a type tag is registered.
    pub fn contains(&self, widget_type: &str) -> bool {
        self.widgets.contains_key(widget_type)
    }

    /// All registered type tags.
    pub fn names(&self) -> Vec<&str> {
        self.widgets.keys().map(|s| s.as_str()).collect()
    }

    /// Number of registered renderers.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl std::fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetRegistry")
            .field("widgets", &self.widgets.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::WidgetInstance;
    use async_trait::async_trait;

    struct TestWidget {
        tag: String,
    }

    #[async_trait]
    impl Widget for TestWidget {
        fn widget_type(&self) -> &str {
            &self.tag
        }

        async fn render(&self, _widget: &WidgetInstance) -> WidgetResult<String> {
            Ok(format!("<p>{}</p>", self.tag))
        }
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = WidgetRegistry::new();
        assert!(registry.is_empty());

        registry.register(Arc::new(TestWidget {
            tag: "html".to_string(),
        }));

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("html"));
        assert_eq!(registry.get("html").unwrap().widget_type(), "html");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_get_required_reports_unknown_type() {
        let registry = WidgetRegistry::new();
        let err = match registry.get_required("ghost") {
            Ok(_) => panic!("expected get_required to fail for unknown widget"),
            Err(e) => e,
        };
        assert!(matches!(err, WidgetError::UnknownWidget(tag) if tag == "ghost"));
    }

    #[test]
    fn test_registry_names() {
        let mut registry = WidgetRegistry::new();
        registry.register(Arc::new(TestWidget {
            tag: "html".to_string(),
        }));
        registry.register(Arc::new(TestWidget {
            tag: "text".to_string(),
        }));

        let mut names = registry.names();
        names.sort();
        assert_eq!(names, vec!["html", "text"]);
    }
}
