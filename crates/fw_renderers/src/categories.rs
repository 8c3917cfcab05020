//! Categories widget: viewer-visible category listing.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use fw_core::{Widget, WidgetInstance, WidgetResult};
use fw_services::{bounded, CallLimits, CategoryService};

use crate::support::WidgetTemplates;

/// Fetches the categories visible to the requesting viewer and substitutes
/// them into `categories.tpl`. Visibility filtering is the category
/// service's concern; the widget only passes the viewer through.
pub struct CategoriesWidget {
    templates: WidgetTemplates,
    categories: Arc<dyn CategoryService>,
    limits: CallLimits,
}

impl CategoriesWidget {
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
impl Widget for CategoriesWidget {
    fn widget_type(&self) -> &str {
        "categories"
    }

    async fn render(&self, widget: &WidgetInstance) -> WidgetResult<String> {
        let visible = bounded(
            &self.limits,
            "categories",
            self.categories.visible_categories(widget.uid),
        )
        .await?;

        self.templates
            .parse("categories.tpl", &json!({"categories": visible}))
    }
}
