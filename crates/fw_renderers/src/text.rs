//! Text widget: plain text, optionally run through the post parser.

use std::sync::Arc;

use async_trait::async_trait;

use fw_core::{Widget, WidgetInstance, WidgetResult};
use fw_services::{bounded, CallLimits, PostParser};

/// Renders `data.text`, either parsed as a post via the extension point
/// (`data.parseAsPost` truthy) or with CRLF pairs turned into line breaks.
pub struct TextWidget {
    posts: Arc<dyn PostParser>,
    limits: CallLimits,
}

impl TextWidget {
    pub fn new(posts: Arc<dyn PostParser>, limits: CallLimits) -> Self {
        Self { posts, limits }
    }
}

#[async_trait]
impl Widget for TextWidget {
    fn widget_type(&self) -> &str {
        "text"
    }

    async fn render(&self, widget: &WidgetInstance) -> WidgetResult<String> {
        let text = widget.data_str("text", "");

        if widget.data_flag("parseAsPost") {
            let parsed = bounded(&self.limits, "posts", self.posts.parse_post(&text)).await?;
            Ok(parsed)
        } else {
            Ok(text.replace("\r\n", "<br />"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fw_core::WidgetError;
    use fw_services::{ServiceError, ServiceResult};
    use serde_json::json;

    struct UpcasingParser;

    #[async_trait]
    impl PostParser for UpcasingParser {
        async fn parse_post(&self, raw: &str) -> ServiceResult<String> {
            Ok(raw.to_uppercase())
        }
    }

    struct BrokenParser;

    #[async_trait]
    impl PostParser for BrokenParser {
        async fn parse_post(&self, _raw: &str) -> ServiceResult<String> {
            Err(ServiceError::upstream("posts", "hook rejected input"))
        }
    }

    fn text_widget(parser: Arc<dyn PostParser>) -> TextWidget {
        TextWidget::new(parser, CallLimits::default())
    }

    #[tokio::test]
    async fn test_crlf_becomes_line_break() {
        let widget = WidgetInstance::new("text").with_data(json!({"text": "a\r\nb"}));
        let markup = text_widget(Arc::new(UpcasingParser))
            .render(&widget)
            .await
            .unwrap();
        assert_eq!(markup, "a<br />b");
    }

    #[tokio::test]
    async fn test_parse_as_post_delegates_to_extension() {
        let widget = WidgetInstance::new("text")
            .with_data(json!({"text": "hello", "parseAsPost": true}));
        let markup = text_widget(Arc::new(UpcasingParser))
            .render(&widget)
            .await
            .unwrap();
        assert_eq!(markup, "HELLO");
    }

    #[tokio::test]
    async fn test_extension_failure_propagates() {
        let widget = WidgetInstance::new("text")
            .with_data(json!({"text": "hello", "parseAsPost": true}));
        let err = text_widget(Arc::new(BrokenParser))
            .render(&widget)
            .await
            .unwrap_err();
        assert!(matches!(err, WidgetError::Service(_)));
    }
}
