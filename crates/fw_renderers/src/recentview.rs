//! Recent-view widget: the /recent page rendered as a fragment.

use std::sync::Arc;

use async_trait::async_trait;
use regex::Regex;

use fw_core::{Widget, WidgetInstance, WidgetResult};
use fw_services::{bounded, CallLimits, PageRenderer, TopicService, TopicTerm, Translator};

/// Window of latest topics fetched for the fragment.
const TOPIC_COUNT: usize = 20;

/// Renders the latest topics through the full page-template engine (not the
/// substitution engine), trims the page chrome off the front, and localizes
/// the remainder.
pub struct RecentViewWidget {
    topics: Arc<dyn TopicService>,
    pages: Arc<dyn PageRenderer>,
    translator: Arc<dyn Translator>,
    limits: CallLimits,
    leading_list: Regex,
}

impl RecentViewWidget {
    pub fn new(
        topics: Arc<dyn TopicService>,
        pages: Arc<dyn PageRenderer>,
        translator: Arc<dyn Translator>,
        limits: CallLimits,
    ) -> Self {
        Self {
            topics,
            pages,
            translator,
            limits,
            // First ordered-list wrapper up to its trailing break tag.
            leading_list: Regex::new(r"(?s)<ol.*?<br />").unwrap(),
        }
    }

    /// Strip the leading ordered-list wrapper and the one orphan break tag
    /// the page renderer leaves behind it.
    fn strip_page_chrome(&self, html: &str) -> String {
        self.leading_list.replace(html, "").replacen("<br>", "", 1)
    }
}

#[async_trait]
impl Widget for RecentViewWidget {
    fn widget_type(&self) -> &str {
        "recentview"
    }

    async fn render(&self, widget: &WidgetInstance) -> WidgetResult<String> {
        let data = bounded(
            &self.limits,
            "topics",
            self.topics
                .latest_topics(widget.uid, 0, TOPIC_COUNT - 1, TopicTerm::Month),
        )
        .await?;

        let page = bounded(&self.limits, "pages", self.pages.render_page("recent", &data)).await?;
        let fragment = self.strip_page_chrome(&page);

        let translated = bounded(
            &self.limits,
            "translator",
            self.translator.translate(&fragment),
        )
        .await?;
        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fw_services::{ServiceError, ServiceResult};
    use serde_json::Value;

    struct NoTopics;

    #[async_trait]
    impl TopicService for NoTopics {
        async fn latest_topics(
            &self,
            _uid: u64,
            _start: usize,
            _stop: usize,
            _term: TopicTerm,
        ) -> ServiceResult<Value> {
            Ok(Value::Null)
        }

        async fn top_tags(&self, _start: usize, _stop: usize) -> ServiceResult<Vec<fw_services::TagSummary>> {
            Ok(Vec::new())
        }
    }

    struct FixedPage(&'static str);

    #[async_trait]
    impl PageRenderer for FixedPage {
        async fn render_page(&self, _name: &str, _data: &Value) -> ServiceResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct PassThrough;

    #[async_trait]
    impl Translator for PassThrough {
        async fn translate(&self, text: &str) -> ServiceResult<String> {
            Ok(text.to_string())
        }
    }

    struct FailingPage;

    #[async_trait]
    impl PageRenderer for FailingPage {
        async fn render_page(&self, _name: &str, _data: &Value) -> ServiceResult<String> {
            Err(ServiceError::upstream("pages", "template compile failed"))
        }
    }

    fn widget(pages: Arc<dyn PageRenderer>) -> RecentViewWidget {
        RecentViewWidget::new(
            Arc::new(NoTopics),
            pages,
            Arc::new(PassThrough),
            CallLimits::default(),
        )
    }

    #[test]
    fn test_leading_list_and_orphan_break_are_stripped() {
        let page = "<ol class=\"breadcrumb\">\n<li>Recent</li>\n</ol><br /><br><ul><li>topic</li></ul>";
        let w = widget(Arc::new(FixedPage("")));
        assert_eq!(w.strip_page_chrome(page), "<ul><li>topic</li></ul>");
    }

    #[test]
    fn test_only_first_orphan_break_is_removed() {
        let w = widget(Arc::new(FixedPage("")));
        assert_eq!(w.strip_page_chrome("<br><br><p>x</p>"), "<br><p>x</p>");
    }

    #[tokio::test]
    async fn test_page_render_failure_propagates() {
        let instance = WidgetInstance::new("recentview").with_uid(1);
        let err = widget(Arc::new(FailingPage))
            .render(&instance)
            .await
            .unwrap_err();
        assert!(matches!(err, fw_core::WidgetError::Service(_)));
    }

    #[tokio::test]
    async fn test_full_render_translates_fragment() {
        let instance = WidgetInstance::new("recentview").with_uid(1);
        let markup = widget(Arc::new(FixedPage("<ol>x</ol><br /><div>feed</div>")))
            .render(&instance)
            .await
            .unwrap();
        assert_eq!(markup, "<div>feed</div>");
    }
}
