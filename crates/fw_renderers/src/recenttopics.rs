//! Recent-topics widget: display-parameter shell for the topic feed.

use async_trait::async_trait;
use serde_json::json;

use fw_core::{Widget, WidgetInstance, WidgetResult};

use crate::support::WidgetTemplates;

/// Substitutes `numTopics` (default 8) and `duration` (default `"day"`)
/// into `recenttopics.tpl`; the same shell pattern as the recent-posts
/// widget.
pub struct RecentTopicsWidget {
    templates: WidgetTemplates,
}

impl RecentTopicsWidget {
    pub fn new(templates: WidgetTemplates) -> Self {
        Self { templates }
    }
}

#[async_trait]
impl Widget for RecentTopicsWidget {
    fn widget_type(&self) -> &str {
        "recenttopics"
    }

    async fn render(&self, widget: &WidgetInstance) -> WidgetResult<String> {
        self.templates.parse(
            "recenttopics.tpl",
            &json!({
                "numTopics": widget.data_u64("numTopics", 8),
                "duration": widget.data_str("duration", "day"),
            }),
        )
    }
}
