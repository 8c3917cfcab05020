//! Recent-replies widget: category-scoped reply listing shell.

use async_trait::async_trait;
use serde_json::json;

use fw_core::{Widget, WidgetInstance, WidgetResult};

use crate::support::WidgetTemplates;

/// Substitutes the configured category id into `recentreplies.tpl`.
///
/// With no truthy `data.cid`, the literal `false` is substituted, which the
/// client-side template consumer reads as "all categories".
pub struct RecentRepliesWidget {
    templates: WidgetTemplates,
}

impl RecentRepliesWidget {
    pub fn new(templates: WidgetTemplates) -> Self {
        Self { templates }
    }
}

#[async_trait]
impl Widget for RecentRepliesWidget {
    fn widget_type(&self) -> &str {
        "recentreplies"
    }

    async fn render(&self, widget: &WidgetInstance) -> WidgetResult<String> {
        self.templates
            .parse("recentreplies.tpl", &json!({"cid": widget.cid_or_false()}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use fw_templates::TemplateStore;
    use serde_json::json as j;

    fn widget_with(template: &str) -> RecentRepliesWidget {
        let store = TemplateStore::from_entries([("recentreplies.tpl", template)]);
        RecentRepliesWidget::new(WidgetTemplates::new(Arc::new(store)))
    }

    #[tokio::test]
    async fn test_cid_is_substituted() {
        let renderer = widget_with(r#"<div data-cid="{{cid}}"></div>"#);
        let instance = WidgetInstance::new("recentreplies").with_data(j!({"cid": 4}));
        assert_eq!(
            renderer.render(&instance).await.unwrap(),
            r#"<div data-cid="4"></div>"#
        );
    }

    #[tokio::test]
    async fn test_absent_cid_substitutes_false() {
        let renderer = widget_with(r#"<div data-cid="{{cid}}"></div>"#);
        let instance = WidgetInstance::new("recentreplies");
        assert_eq!(
            renderer.render(&instance).await.unwrap(),
            r#"<div data-cid="false"></div>"#
        );
    }

    #[tokio::test]
    async fn test_renders_identically_twice() {
        let renderer = widget_with(r#"{{cid}}"#);
        let instance = WidgetInstance::new("recentreplies").with_data(j!({"cid": 2}));
        let first = renderer.render(&instance).await.unwrap();
        let second = renderer.render(&instance).await.unwrap();
        assert_eq!(first, second);
    }
}
