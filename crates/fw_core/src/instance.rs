//! Widget instance and placement context.
//!
//! A `WidgetInstance` is one configured placement of a widget type on a
//! page: the type tag, an open mapping of renderer-specific data, the
//! placement area, and the requesting viewer. `data` has no fixed schema —
//! each renderer reads only the keys it recognizes and applies documented
//! defaults for the rest.
//!
//! Option values follow the source system's truthiness rules: a missing
//! key, `null`, `false`, `0`, or `""` all select the renderer's default.
//! Numeric options additionally accept numeric strings, since widget data
//! originates from admin forms.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placement context for a widget instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetArea {
    /// URL of the page the widget is placed on. Renderers may derive an
    /// implicit category id from it (see [`WidgetInstance::category_id`]).
    #[serde(default)]
    pub url: String,

    /// Page template the area belongs to, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Named location within the template, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A configured placement of a widget type on a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetInstance {
    /// Stable tag identifying which renderer handles this instance.
    #[serde(rename = "type")]
    pub widget_type: String,

    /// Renderer-specific configuration values, no fixed schema.
    #[serde(default)]
    pub data: Value,

    /// Placement context.
    #[serde(default)]
    pub area: WidgetArea,

    /// Requesting viewer, passed through to viewer-scoped services.
    #[serde(default)]
    pub uid: u64,
}

impl WidgetInstance {
    /// Create an instance with empty data and area.
    pub fn new(widget_type: impl Into<String>) -> Self {
        Self {
            widget_type: widget_type.into(),
            data: Value::Null,
            area: WidgetArea::default(),
            uid: 0,
        }
    }

    /// Set the data mapping.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Set the area URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.area.url = url.into();
        self
    }

    /// Set the requesting viewer.
    pub fn with_uid(mut self, uid: u64) -> Self {
        self.uid = uid;
        self
    }

    /// The data value under `key`, if present and truthy.
    pub fn data_value(&self, key: &str) -> Option<&Value> {
        self.data.get(key).filter(|v| truthy(v))
    }

    /// String option with a default. Numbers are accepted and formatted.
    pub fn data_str(&self, key: &str, default: &str) -> String {
        match self.data_value(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => default.to_string(),
        }
    }

    /// Integer option with a default. Numeric strings are accepted.
    pub fn data_u64(&self, key: &str, default: u64) -> u64 {
        match self.data_value(key) {
            Some(Value::Number(n)) => n.as_u64().unwrap_or(default),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
            _ => default,
        }
    }

    /// Boolean option, false unless present and truthy.
    pub fn data_flag(&self, key: &str) -> bool {
        self.data_value(key).is_some()
    }

    /// Resolve the category id for this placement.
    ///
    /// Order: a truthy `data.cid`, else the first maximal run of decimal
    /// digits anywhere in the area URL, else category `1`. The URL rule is
    /// a heuristic, not a route parse — non-numeric or ambiguous URLs get
    /// the default.
    pub fn category_id(&self) -> u64 {
        if let Some(cid) = self.data_cid() {
            return cid;
        }
        first_digit_run(&self.area.url).unwrap_or(1)
    }

    /// A truthy, parseable `data.cid`, if any.
    fn data_cid(&self) -> Option<u64> {
        match self.data_value("cid") {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// The raw `data.cid` for substitution: the configured value if truthy,
    /// else the literal `false`.
    pub fn cid_or_false(&self) -> Value {
        self.data_value("cid")
            .cloned()
            .unwrap_or(Value::Bool(false))
    }
}

/// Source-system truthiness: `null`, `false`, `0`, and `""` are falsy.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// First maximal run of decimal digits in `text`, parsed.
fn first_digit_run(text: &str) -> Option<u64> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(|b| b.is_ascii_digit())?;
    let len = bytes[start..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    text[start..start + len].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_id_from_data() {
        let widget = WidgetInstance::new("moderators").with_data(json!({"cid": 7}));
        assert_eq!(widget.category_id(), 7);

        let widget = WidgetInstance::new("moderators").with_data(json!({"cid": "12"}));
        assert_eq!(widget.category_id(), 12);
    }

    #[test]
    fn test_category_id_from_url_digit_run() {
        let widget = WidgetInstance::new("activeusers").with_url("/category/42/general");
        assert_eq!(widget.category_id(), 42);
    }

    #[test]
    fn test_category_id_defaults_to_one() {
        let widget = WidgetInstance::new("activeusers").with_url("/category/general");
        assert_eq!(widget.category_id(), 1);

        let widget = WidgetInstance::new("activeusers");
        assert_eq!(widget.category_id(), 1);
    }

    #[test]
    fn test_falsy_cid_falls_back_to_url() {
        let widget = WidgetInstance::new("moderators")
            .with_data(json!({"cid": 0}))
            .with_url("/category/9/chat");
        assert_eq!(widget.category_id(), 9);
    }

    #[test]
    fn test_cid_or_false() {
        let widget = WidgetInstance::new("recentreplies").with_data(json!({"cid": 4}));
        assert_eq!(widget.cid_or_false(), json!(4));

        let widget = WidgetInstance::new("recentreplies");
        assert_eq!(widget.cid_or_false(), json!(false));
    }

    #[test]
    fn test_data_defaults_follow_truthiness() {
        let widget = WidgetInstance::new("recentposts")
            .with_data(json!({"numPosts": 0, "duration": ""}));

        assert_eq!(widget.data_u64("numPosts", 8), 8);
        assert_eq!(widget.data_str("duration", "day"), "day");

        let widget = WidgetInstance::new("recentposts")
            .with_data(json!({"numPosts": "4", "duration": "week"}));

        assert_eq!(widget.data_u64("numPosts", 8), 4);
        assert_eq!(widget.data_str("duration", "day"), "week");
    }

    #[test]
    fn test_data_flag() {
        let widget = WidgetInstance::new("text").with_data(json!({"parseAsPost": true}));
        assert!(widget.data_flag("parseAsPost"));

        let widget = WidgetInstance::new("text").with_data(json!({"parseAsPost": false}));
        assert!(!widget.data_flag("parseAsPost"));

        let widget = WidgetInstance::new("text");
        assert!(!widget.data_flag("parseAsPost"));
    }

    #[test]
    fn test_instance_deserializes_with_type_tag() {
        let widget: WidgetInstance = serde_json::from_value(json!({
            "type": "html",
            "data": {"html": "<b>x</b>"},
            "area": {"url": "/"},
            "uid": 3
        }))
        .unwrap();

        assert_eq!(widget.widget_type, "html");
        assert_eq!(widget.uid, 3);
    }
}
