//! Deterministic offline service implementations for previews.
//!
//! These stand-ins return small fixed datasets so a render can be previewed
//! and diffed without a forum backend. They are not part of the library
//! contract.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use fw_renderers::WidgetServices;
use fw_services::{
    CallLimits, CategoryService, CategorySummary, PageRenderer, PostParser, ServiceResult,
    TagSummary, TopicService, TopicTerm, Translator, UserService, UserSummary,
};

const SAMPLE_TAGS: [&str; 8] = [
    "announcements",
    "rust",
    "help",
    "meta",
    "showcase",
    "offtopic",
    "guides",
    "releases",
];

struct OfflineCategories;

#[async_trait]
impl CategoryService for OfflineCategories {
    async fn active_uids(&self, _cid: u64) -> ServiceResult<Vec<u64>> {
        Ok(vec![1, 2, 3])
    }

    async fn moderators(&self, _cid: u64) -> ServiceResult<Vec<UserSummary>> {
        Ok(vec![sample_user(1, "ada"), sample_user(2, "grace")])
    }

    async fn visible_categories(&self, _uid: u64) -> ServiceResult<Vec<CategorySummary>> {
        Ok(vec![
            CategorySummary {
                cid: 1,
                name: "Announcements".into(),
                slug: "announcements".into(),
                description: "Forum news and updates".into(),
            },
            CategorySummary {
                cid: 2,
                name: "General Discussion".into(),
                slug: "general-discussion".into(),
                description: "Anything goes".into(),
            },
        ])
    }
}

struct OfflineUsers;

#[async_trait]
impl UserService for OfflineUsers {
    async fn user_summaries(&self, uids: &[u64]) -> ServiceResult<Vec<UserSummary>> {
        Ok(uids
            .iter()
            .map(|uid| sample_user(*uid, &format!("user{uid}")))
            .collect())
    }
}

struct OfflineTopics;

#[async_trait]
impl TopicService for OfflineTopics {
    async fn latest_topics(
        &self,
        _uid: u64,
        start: usize,
        stop: usize,
        term: TopicTerm,
    ) -> ServiceResult<Value> {
        let topics: Vec<Value> = (start..=stop.min(start + 2))
            .map(|rank| json!({"title": format!("Sample topic {rank}"), "slug": format!("sample-topic-{rank}")}))
            .collect();
        Ok(json!({"topics": topics, "term": term.as_str()}))
    }

    async fn top_tags(&self, start: usize, stop: usize) -> ServiceResult<Vec<TagSummary>> {
        Ok(SAMPLE_TAGS
            .iter()
            .enumerate()
            .skip(start)
            .take(stop.saturating_sub(start) + 1)
            .map(|(rank, value)| TagSummary {
                value: (*value).to_string(),
                score: (SAMPLE_TAGS.len() - rank) as u64,
            })
            .collect())
    }
}

struct OfflineTranslator;

#[async_trait]
impl Translator for OfflineTranslator {
    async fn translate(&self, text: &str) -> ServiceResult<String> {
        Ok(text
            .replace("[[global:header.users]]", "Users")
            .replace("[[global:header.topics]]", "Topics")
            .replace("[[global:header.posts]]", "Posts"))
    }
}

struct OfflinePages;

#[async_trait]
impl PageRenderer for OfflinePages {
    async fn render_page(&self, name: &str, data: &Value) -> ServiceResult<String> {
        let items: String = data["topics"]
            .as_array()
            .map(|topics| {
                topics
                    .iter()
                    .map(|t| format!("<li>{}</li>", t["title"].as_str().unwrap_or("")))
                    .collect()
            })
            .unwrap_or_default();

        // Same leading chrome the real page engine emits.
        Ok(format!(
            "<ol class=\"breadcrumb\"><li>{name}</li></ol><br /><ul class=\"topics\">{items}</ul>"
        ))
    }
}

struct OfflinePostParser;

#[async_trait]
impl PostParser for OfflinePostParser {
    async fn parse_post(&self, raw: &str) -> ServiceResult<String> {
        Ok(format!("<div class=\"parsed-post\">{raw}</div>"))
    }
}

fn sample_user(uid: u64, name: &str) -> UserSummary {
    UserSummary {
        uid,
        username: name.to_string(),
        userslug: name.to_lowercase(),
        picture: format!("/assets/avatars/{uid}.png"),
    }
}

/// The full offline service bundle.
pub fn services(limits: CallLimits) -> WidgetServices {
    WidgetServices {
        categories: Arc::new(OfflineCategories),
        users: Arc::new(OfflineUsers),
        topics: Arc::new(OfflineTopics),
        translator: Arc::new(OfflineTranslator),
        pages: Arc::new(OfflinePages),
        posts: Arc::new(OfflinePostParser),
        limits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_tags_honor_rank_range() {
        let tags = OfflineTopics.top_tags(0, 2).await.unwrap();
        assert_eq!(tags.len(), 3);
        assert_eq!(tags[0].value, "announcements");
    }

    #[tokio::test]
    async fn test_offline_page_has_strippable_chrome() {
        let data = serde_json::json!({"topics": [{"title": "t"}]});
        let page = OfflinePages.render_page("recent", &data).await.unwrap();
        assert!(page.starts_with("<ol"));
        assert!(page.contains("<br />"));
    }
}
