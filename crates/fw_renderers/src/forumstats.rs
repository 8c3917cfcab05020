//! Forum-stats widget: user/topic/post counters shell.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use fw_core::{Widget, WidgetInstance, WidgetResult};
use fw_services::{bounded, CallLimits, Translator};

use crate::support::WidgetTemplates;

/// Substitutes `data.statsClass` into `forumstats.tpl` and localizes the
/// result through the translation service.
pub struct ForumStatsWidget {
    templates: WidgetTemplates,
    translator: Arc<dyn Translator>,
    limits: CallLimits,
}

impl ForumStatsWidget {
    pub fn new(
        templates: WidgetTemplates,
        translator: Arc<dyn Translator>,
        limits: CallLimits,
    ) -> Self {
        Self {
            templates,
            translator,
            limits,
        }
    }
}

#[async_trait]
impl Widget for ForumStatsWidget {
    fn widget_type(&self) -> &str {
        "forumstats"
    }

    async fn render(&self, widget: &WidgetInstance) -> WidgetResult<String> {
        let html = self.templates.parse(
            "forumstats.tpl",
            &json!({"statsClass": widget.data_str("statsClass", "")}),
        )?;

        let translated =
            bounded(&self.limits, "translator", self.translator.translate(&html)).await?;
        Ok(translated)
    }
}
