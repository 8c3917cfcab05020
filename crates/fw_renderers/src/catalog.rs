//! Widget kind catalog and builtin template manifest.

use fw_core::WidgetDescriptor;
use fw_templates::TemplateStore;

/// Built-in widget kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Html,
    Text,
    RecentReplies,
    ActiveUsers,
    Moderators,
    ForumStats,
    RecentPosts,
    RecentTopics,
    RecentView,
    Categories,
    PopularTags,
}

impl WidgetKind {
    /// The stable type tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Html => "html",
            WidgetKind::Text => "text",
            WidgetKind::RecentReplies => "recentreplies",
            WidgetKind::ActiveUsers => "activeusers",
            WidgetKind::Moderators => "moderators",
            WidgetKind::ForumStats => "forumstats",
            WidgetKind::RecentPosts => "recentposts",
            WidgetKind::RecentTopics => "recenttopics",
            WidgetKind::RecentView => "recentview",
            WidgetKind::Categories => "categories",
            WidgetKind::PopularTags => "populartags",
        }
    }

    /// Display name shown to administrators.
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Html => "HTML",
            WidgetKind::Text => "Text",
            WidgetKind::RecentReplies => "Recent Replies",
            WidgetKind::ActiveUsers => "Active Users",
            WidgetKind::Moderators => "Moderators",
            WidgetKind::ForumStats => "Forum Stats",
            WidgetKind::RecentPosts => "Recent Posts",
            WidgetKind::RecentTopics => "Recent Topics",
            WidgetKind::RecentView => "Recent View",
            WidgetKind::Categories => "Categories",
            WidgetKind::PopularTags => "Popular Tags",
        }
    }

    /// Description shown to administrators.
    pub fn description(&self) -> &'static str {
        match self {
            WidgetKind::Html => "Any text, html, or embedded script.",
            WidgetKind::Text => "Text, optionally parsed as a post.",
            WidgetKind::RecentReplies => "List of recent replies in a category.",
            WidgetKind::ActiveUsers => "List of active users in a category.",
            WidgetKind::Moderators => "List of moderators in a category.",
            WidgetKind::ForumStats => "Lists user, topics, and post count.",
            WidgetKind::RecentPosts => "Lists the latest posts on your forum.",
            WidgetKind::RecentTopics => "Lists the latest topics on your forum.",
            WidgetKind::RecentView => "Renders the /recent page",
            WidgetKind::Categories => "Lists the categories on your forum",
            WidgetKind::PopularTags => "Lists popular tags on your forum",
        }
    }

    /// Identifier of the admin-configuration form template.
    pub fn admin_template(&self) -> &'static str {
        match self {
            WidgetKind::Html => "admin/html.tpl",
            WidgetKind::Text => "admin/text.tpl",
            WidgetKind::RecentReplies => "admin/categorywidget.tpl",
            WidgetKind::ActiveUsers => "admin/categorywidget.tpl",
            WidgetKind::Moderators => "admin/categorywidget.tpl",
            WidgetKind::ForumStats => "admin/forumstats.tpl",
            WidgetKind::RecentPosts => "admin/recentposts.tpl",
            WidgetKind::RecentTopics => "admin/recenttopics.tpl",
            WidgetKind::RecentView => "admin/defaultwidget.tpl",
            WidgetKind::Categories => "admin/categories.tpl",
            WidgetKind::PopularTags => "admin/populartags.tpl",
        }
    }

    /// All builtin kinds in the fixed catalog order.
    pub fn all() -> Vec<WidgetKind> {
        vec![
            WidgetKind::Html,
            WidgetKind::Text,
            WidgetKind::RecentReplies,
            WidgetKind::ActiveUsers,
            WidgetKind::Moderators,
            WidgetKind::ForumStats,
            WidgetKind::RecentPosts,
            WidgetKind::RecentTopics,
            WidgetKind::RecentView,
            WidgetKind::Categories,
            WidgetKind::PopularTags,
        ]
    }
}

impl std::fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every template the Initializer must load before rendering can begin:
/// the display templates plus the admin configuration forms.
pub const BUILTIN_TEMPLATES: [&str; 17] = [
    "recentreplies.tpl",
    "activeusers.tpl",
    "moderators.tpl",
    "forumstats.tpl",
    "recentposts.tpl",
    "recenttopics.tpl",
    "categories.tpl",
    "populartags.tpl",
    "admin/categorywidget.tpl",
    "admin/forumstats.tpl",
    "admin/html.tpl",
    "admin/text.tpl",
    "admin/recentposts.tpl",
    "admin/recenttopics.tpl",
    "admin/defaultwidget.tpl",
    "admin/categories.tpl",
    "admin/populartags.tpl",
];

/// Append the builtin descriptors to an externally supplied list.
///
/// Pure data assembly with no failure mode: both halves keep their order,
/// and nothing is removed or deduplicated. A caller that already registered
/// a descriptor under a builtin tag ends up with both entries — dedup
/// policy belongs to whatever consumes the merged catalog.
pub fn collect_descriptors(
    existing: Vec<WidgetDescriptor>,
    store: &TemplateStore,
) -> Vec<WidgetDescriptor> {
    let mut descriptors = existing;
    descriptors.extend(WidgetKind::all().into_iter().map(|kind| {
        WidgetDescriptor::new(
            kind.as_str(),
            kind.name(),
            kind.description(),
            store.get(kind.admin_template()).unwrap_or_default(),
        )
    }));
    descriptors
}
