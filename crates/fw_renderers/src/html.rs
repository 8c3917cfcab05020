//! HTML widget: configured markup, returned verbatim.

use async_trait::async_trait;

use fw_core::{Widget, WidgetInstance, WidgetResult};

/// Returns `data.html` exactly as configured, with no substitution.
pub struct HtmlWidget;

#[async_trait]
impl Widget for HtmlWidget {
    fn widget_type(&self) -> &str {
        "html"
    }

    async fn render(&self, widget: &WidgetInstance) -> WidgetResult<String> {
        Ok(widget.data_str("html", ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_html_is_returned_verbatim() {
        let widget = WidgetInstance::new("html").with_data(json!({"html": "<b>x</b>"}));
        let markup = HtmlWidget.render(&widget).await.unwrap();
        assert_eq!(markup, "<b>x</b>");
    }

    #[tokio::test]
    async fn test_missing_html_renders_empty() {
        let widget = WidgetInstance::new("html");
        assert_eq!(HtmlWidget.render(&widget).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_no_substitution_occurs() {
        let widget =
            WidgetInstance::new("html").with_data(json!({"html": "{{cid}}", "cid": 3}));
        assert_eq!(HtmlWidget.render(&widget).await.unwrap(), "{{cid}}");
    }
}
