//! Popular-tags widget: top tags by usage.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use fw_core::{Widget, WidgetInstance, WidgetResult};
use fw_services::{bounded, CallLimits, TopicService};

use crate::support::WidgetTemplates;

/// Fetches the top `data.numTags` tags (default 8, rank range
/// `0..=numTags-1`) and substitutes them into `populartags.tpl`.
pub struct PopularTagsWidget {
    templates: WidgetTemplates,
    topics: Arc<dyn TopicService>,
    limits: CallLimits,
}

impl PopularTagsWidget {
    pub fn new(
        templates: WidgetTemplates,
        topics: Arc<dyn TopicService>,
        limits: CallLimits,
    ) -> Self {
        Self {
            templates,
            topics,
            limits,
        }
    }
}

#[async_trait]
impl Widget for PopularTagsWidget {
    fn widget_type(&self) -> &str {
        "populartags"
    }

    async fn render(&self, widget: &WidgetInstance) -> WidgetResult<String> {
        let num_tags = widget.data_u64("numTags", 8);
        let stop = num_tags.saturating_sub(1) as usize;

        let tags = bounded(&self.limits, "topics", self.topics.top_tags(0, stop)).await?;

        self.templates
            .parse("populartags.tpl", &json!({"tags": tags}))
    }
}
