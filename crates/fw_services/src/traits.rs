//! External collaborator interfaces.
//!
//! These traits are the complete surface the widget renderers may touch.
//! Implementations are owned elsewhere (the forum's category/user/topic
//! stores, its page renderer, its translator, and the post-parse plugin
//! hook); renderers only see the contracts. All methods are async: a
//! renderer suspends at these call sites and nowhere else.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ServiceResult;
use crate::types::{CategorySummary, TagSummary, TopicTerm, UserSummary};

/// Category-scoped lookups.
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// Ids of users currently active in a category.
    async fn active_uids(&self, cid: u64) -> ServiceResult<Vec<u64>>;

    /// Moderators of a category, with display fields resolved.
    async fn moderators(&self, cid: u64) -> ServiceResult<Vec<UserSummary>>;

    /// Categories visible to the given viewer.
    async fn visible_categories(&self, uid: u64) -> ServiceResult<Vec<CategorySummary>>;
}

/// Bulk user-field resolution.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Resolve display fields for each id, preserving order.
    async fn user_summaries(&self, uids: &[u64]) -> ServiceResult<Vec<UserSummary>>;
}

/// Topic and tag listings.
#[async_trait]
pub trait TopicService: Send + Sync {
    /// Latest topics for a viewer over the inclusive rank range
    /// `start..=stop`, as a page-render data context.
    async fn latest_topics(
        &self,
        uid: u64,
        start: usize,
        stop: usize,
        term: TopicTerm,
    ) -> ServiceResult<Value>;

    /// Top tags over the inclusive rank range `start..=stop`.
    async fn top_tags(&self, start: usize, stop: usize) -> ServiceResult<Vec<TagSummary>>;
}

/// Localization of rendered text.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> ServiceResult<String>;
}

/// Full page-template rendering engine.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// Render the named page with the given data context to full HTML.
    async fn render_page(&self, name: &str, data: &Value) -> ServiceResult<String>;
}

/// Post-parse extension point.
#[async_trait]
pub trait PostParser: Send + Sync {
    /// Run raw text through the post-parsing pipeline.
    async fn parse_post(&self, raw: &str) -> ServiceResult<String>;
}
