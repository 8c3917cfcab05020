//! Moderators widget: moderator listing for a category.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use fw_core::{Widget, WidgetInstance, WidgetResult};
use fw_services::{bounded, CallLimits, CategoryService};

use crate::support::WidgetTemplates;

/// Fetches the moderator list for the resolved category and substitutes it
/// into `moderators.tpl`.
pub struct ModeratorsWidget {
    templates: WidgetTemplates,
    categories: Arc<dyn CategoryService>,
    limits: CallLimits,
}

impl ModeratorsWidget {
    pub fn new(
        templates: WidgetTemplates,
        categories: Arc<dyn CategoryService>,
        limits: CallLimits,
    ) -> Self {
        Self {
            templates,
            categories,
            limits,
        }
    }
}

#[async_trait]
impl Widget for ModeratorsWidget {
    fn widget_type(&self) -> &str {
        "moderators"
    }

    async fn render(&self, widget: &WidgetInstance) -> WidgetResult<String> {
        let cid = widget.category_id();
        let moderators =
            bounded(&self.limits, "categories", self.categories.moderators(cid)).await?;

        self.templates
            .parse("moderators.tpl", &json!({"moderators": moderators}))
    }
}
