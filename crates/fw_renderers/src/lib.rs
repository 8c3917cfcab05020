//! # fw_renderers
//!
//! Built-in widget renderers and descriptor catalog for ForumWidgets.
//!
//! One module per widget type, each implementing the [`fw_core::Widget`]
//! contract; this crate also owns the catalog metadata (tags, display
//! names, admin-form mapping), the builtin template manifest, and the
//! startup entry points.
//!
//! # Startup sequencing
//!
//! Templates load first, fail-fast; only a fully loaded store can be used
//! to assemble the registry, so no dispatch can observe missing builtin
//! state:
//!
//! ```rust,ignore
//! let store = Arc::new(fw_renderers::load_builtin_templates("templates").await?);
//!
//! let mut registry = WidgetRegistry::new();
//! fw_renderers::register_builtins(&mut registry, store.clone(), &services);
//!
//! let dispatcher = Dispatcher::new(Arc::new(registry));
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use fw_core::WidgetRegistry;
use fw_services::{
    CallLimits, CategoryService, PageRenderer, PostParser, TopicService, Translator, UserService,
};
use fw_templates::{TemplateResult, TemplateStore};

pub mod catalog;
pub mod support;

mod activeusers;
mod categories;
mod forumstats;
mod html;
mod moderators;
mod populartags;
mod recentposts;
mod recentreplies;
mod recenttopics;
mod recentview;
mod text;

pub use activeusers::ActiveUsersWidget;
pub use catalog::{collect_descriptors, WidgetKind, BUILTIN_TEMPLATES};
pub use categories::CategoriesWidget;
pub use forumstats::ForumStatsWidget;
pub use html::HtmlWidget;
pub use moderators::ModeratorsWidget;
pub use populartags::PopularTagsWidget;
pub use recentposts::RecentPostsWidget;
pub use recentreplies::RecentRepliesWidget;
pub use recenttopics::RecentTopicsWidget;
pub use recentview::RecentViewWidget;
pub use support::WidgetTemplates;
pub use text::TextWidget;

/// The external collaborators the builtin renderers draw on, plus the
/// per-call limits applied at every service call site.
#[derive(Clone)]
pub struct WidgetServices {
    pub categories: Arc<dyn CategoryService>,
    pub users: Arc<dyn UserService>,
    pub topics: Arc<dyn TopicService>,
    pub translator: Arc<dyn Translator>,
    pub pages: Arc<dyn PageRenderer>,
    pub posts: Arc<dyn PostParser>,
    pub limits: CallLimits,
}

/// Load every builtin template from `root`, fail-fast.
///
/// This is the initialization phase: it must complete before the registry
/// is assembled, and a single unreadable template aborts startup.
pub async fn load_builtin_templates(root: impl Into<PathBuf>) -> TemplateResult<TemplateStore> {
    TemplateStore::load(root, &BUILTIN_TEMPLATES).await
}

/// Register one renderer per builtin widget kind.
pub fn register_builtins(
    registry: &mut WidgetRegistry,
    store: Arc<TemplateStore>,
    services: &WidgetServices,
) {
    let templates = || WidgetTemplates::new(store.clone());
    let limits = services.limits;

    registry.register(Arc::new(HtmlWidget));
    registry.register(Arc::new(TextWidget::new(services.posts.clone(), limits)));
    registry.register(Arc::new(RecentRepliesWidget::new(templates())));
    registry.register(Arc::new(ActiveUsersWidget::new(
        templates(),
        services.categories.clone(),
        services.users.clone(),
        limits,
    )));
    registry.register(Arc::new(ModeratorsWidget::new(
        templates(),
        services.categories.clone(),
        limits,
    )));
    registry.register(Arc::new(ForumStatsWidget::new(
        templates(),
        services.translator.clone(),
        limits,
    )));
    registry.register(Arc::new(RecentPostsWidget::new(templates())));
    registry.register(Arc::new(RecentTopicsWidget::new(templates())));
    registry.register(Arc::new(RecentViewWidget::new(
        services.topics.clone(),
        services.pages.clone(),
        services.translator.clone(),
        limits,
    )));
    registry.register(Arc::new(CategoriesWidget::new(
        templates(),
        services.categories.clone(),
        limits,
    )));
    registry.register(Arc::new(PopularTagsWidget::new(
        templates(),
        services.topics.clone(),
        limits,
    )));

    info!("Registered {} builtin widget renderers", registry.len());
}
