//! Recent-posts widget: display-parameter shell for the post feed.

use async_trait::async_trait;
use serde_json::json;

use fw_core::{Widget, WidgetInstance, WidgetResult};

use crate::support::WidgetTemplates;

/// Substitutes `numPosts` (default 8) and `duration` (default `"day"`) into
/// `recentposts.tpl`. The parameters pass through uninterpreted — no post
/// fetch happens here; the rendered fragment fetches its own feed
/// client-side.
pub struct RecentPostsWidget {
    templates: WidgetTemplates,
}

impl RecentPostsWidget {
    pub fn new(templates: WidgetTemplates) -> Self {
        Self { templates }
    }
}

#[async_trait]
impl Widget for RecentPostsWidget {
    fn widget_type(&self) -> &str {
        "recentposts"
    }

    async fn render(&self, widget: &WidgetInstance) -> WidgetResult<String> {
        self.templates.parse(
            "recentposts.tpl",
            &json!({
                "numPosts": widget.data_u64("numPosts", 8),
                "duration": widget.data_str("duration", "day"),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use fw_templates::TemplateStore;
    use serde_json::json as j;

    fn renderer() -> RecentPostsWidget {
        let store = TemplateStore::from_entries([(
            "recentposts.tpl",
            r#"<div data-posts="{{numPosts}}" data-duration="{{duration}}"></div>"#,
        )]);
        RecentPostsWidget::new(WidgetTemplates::new(Arc::new(store)))
    }

    #[tokio::test]
    async fn test_defaults_applied_for_empty_data() {
        let instance = WidgetInstance::new("recentposts").with_data(j!({}));
        assert_eq!(
            renderer().render(&instance).await.unwrap(),
            r#"<div data-posts="8" data-duration="day"></div>"#
        );
    }

    #[tokio::test]
    async fn test_configured_values_pass_through() {
        let instance = WidgetInstance::new("recentposts")
            .with_data(j!({"numPosts": 4, "duration": "week"}));
        assert_eq!(
            renderer().render(&instance).await.unwrap(),
            r#"<div data-posts="4" data-duration="week"></div>"#
        );
    }
}
