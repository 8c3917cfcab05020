//! Active-users widget: avatars of users active in a category.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use fw_core::{Widget, WidgetInstance, WidgetResult};
use fw_services::{bounded, CallLimits, CategoryService, UserService};

use crate::support::WidgetTemplates;

/// Looks up the ids of users active in the resolved category, resolves
/// their display fields, and substitutes the list into `activeusers.tpl`.
///
/// The id lookup feeds the field lookup; the two calls are intrinsically
/// sequential.
pub struct ActiveUsersWidget {
    templates: WidgetTemplates,
    categories: Arc<dyn CategoryService>,
    users: Arc<dyn UserService>,
    limits: CallLimits,
}

impl ActiveUsersWidget {
    pub fn new(
        templates: WidgetTemplates,
        categories: Arc<dyn CategoryService>,
        users: Arc<dyn UserService>,
        limits: CallLimits,
    ) -> Self {
        Self {
            templates,
            categories,
            users,
            limits,
        }
    }
}

#[async_trait]
impl Widget for ActiveUsersWidget {
    fn widget_type(&self) -> &str {
        "activeusers"
    }

    async fn render(&self, widget: &WidgetInstance) -> WidgetResult<String> {
        let cid = widget.category_id();

        let uids = bounded(&self.limits, "categories", self.categories.active_uids(cid)).await?;
        let users = bounded(&self.limits, "users", self.users.user_summaries(&uids)).await?;

        self.templates
            .parse("activeusers.tpl", &json!({"active_users": users}))
    }
}
