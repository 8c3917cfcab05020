//! Placeholder substitution over raw template text.
//!
//! Two forms are recognized:
//!
//! - `{{name}}` — replaced by the scalar value bound to `name`. Strings are
//!   inserted verbatim, numbers and booleans via their display form, `null`
//!   as the empty string. An unbound or non-scalar name leaves the
//!   placeholder untouched.
//! - `<!-- BEGIN name --> … <!-- END name -->` — the enclosed body is
//!   repeated once per element of the array bound to `name`. Inside the
//!   body, placeholders resolve against the element's fields first, then
//!   the outer mapping. A non-array or unbound name repeats zero times.
//!
//! Substitution never fails; blocks do not nest.

use regex::Regex;
use serde_json::Value;

/// Renders template text against a mapping of placeholder names to values.
pub struct TemplateRenderer {
    variable_pattern: Regex,
    begin_pattern: Regex,
    end_pattern: Regex,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self {
            // Match {{variable_name}} pattern
            variable_pattern: Regex::new(r"\{\{([a-zA-Z_][a-zA-Z0-9_]*)\}\}").unwrap(),
            begin_pattern: Regex::new(r"<!--\s*BEGIN\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*-->").unwrap(),
            end_pattern: Regex::new(r"<!--\s*END\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*-->").unwrap(),
        }
    }

    /// Render `template` against `values`.
    ///
    /// `values` is expected to be a JSON object; any other value renders as
    /// if the mapping were empty.
    pub fn render(&self, template: &str, values: &Value) -> String {
        let empty = serde_json::Map::new();
        let map = values.as_object().unwrap_or(&empty);

        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(caps) = self.begin_pattern.captures(rest) {
            let opening = caps.get(0).unwrap();
            let name = caps.get(1).unwrap().as_str();
            let after = &rest[opening.end()..];

            match self.find_end(after, name) {
                Some((body_end, end_end)) => {
                    out.push_str(&self.substitute(&rest[..opening.start()], None, map));
                    let body = &after[..body_end];
                    if let Some(Value::Array(items)) = map.get(name) {
                        for item in items {
                            out.push_str(&self.substitute(body, Some(item), map));
                        }
                    }
                    rest = &after[end_end..];
                }
                None => {
                    // Unterminated block: emit the opening marker literally.
                    out.push_str(&self.substitute(&rest[..opening.end()], None, map));
                    rest = after;
                }
            }
        }

        out.push_str(&self.substitute(rest, None, map));
        out
    }

    /// Find the END marker matching `name`, returning the body length and
    /// the offset just past the marker.
    fn find_end(&self, text: &str, name: &str) -> Option<(usize, usize)> {
        self.end_pattern
            .captures_iter(text)
            .find(|caps| &caps[1] == name)
            .map(|caps| {
                let m = caps.get(0).unwrap();
                (m.start(), m.end())
            })
    }

    /// Replace scalar placeholders, resolving against `element` fields
    /// first, then the outer mapping.
    fn substitute(
        &self,
        content: &str,
        element: Option<&Value>,
        outer: &serde_json::Map<String, Value>,
    ) -> String {
        self.variable_pattern
            .replace_all(content, |caps: &regex::Captures| {
                let name = &caps[1];
                element
                    .and_then(|el| el.get(name))
                    .and_then(scalar_text)
                    .or_else(|| outer.get(name).and_then(scalar_text))
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

/// Display form of a scalar value; `None` for arrays and objects.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_scalars() {
        let renderer = TemplateRenderer::new();
        let values = json!({"name": "my-forum", "count": 8});

        let rendered = renderer.render("Forum: {{name}}, posts: {{count}}", &values);
        assert_eq!(rendered, "Forum: my-forum, posts: 8");
    }

    #[test]
    fn test_unknown_placeholder_left_untouched() {
        let renderer = TemplateRenderer::new();
        let rendered = renderer.render("cid={{cid}}", &json!({}));
        assert_eq!(rendered, "cid={{cid}}");
    }

    #[test]
    fn test_bool_and_null_values() {
        let renderer = TemplateRenderer::new();
        let values = json!({"cid": false, "statsClass": null});

        assert_eq!(renderer.render("{{cid}}", &values), "false");
        assert_eq!(renderer.render("[{{statsClass}}]", &values), "[]");
    }

    #[test]
    fn test_block_repeats_per_element() {
        let renderer = TemplateRenderer::new();
        let values = json!({
            "active_users": [
                {"username": "ada", "userslug": "ada"},
                {"username": "grace", "userslug": "grace"}
            ]
        });

        let template = "<ul><!-- BEGIN active_users --><li>{{username}}</li><!-- END active_users --></ul>";
        let rendered = renderer.render(template, &values);
        assert_eq!(rendered, "<ul><li>ada</li><li>grace</li></ul>");
    }

    #[test]
    fn test_block_with_non_array_renders_nothing() {
        let renderer = TemplateRenderer::new();
        let template = "<!-- BEGIN tags -->{{value}}<!-- END tags -->done";

        assert_eq!(renderer.render(template, &json!({})), "done");
        assert_eq!(renderer.render(template, &json!({"tags": "x"})), "done");
    }

    #[test]
    fn test_element_fields_shadow_outer_values() {
        let renderer = TemplateRenderer::new();
        let values = json!({
            "cid": 4,
            "moderators": [{"username": "mod"}]
        });

        let template = "<!-- BEGIN moderators -->{{username}}@{{cid}} <!-- END moderators -->";
        assert_eq!(renderer.render(template, &values), "mod@4 ");
    }

    #[test]
    fn test_unterminated_block_is_literal() {
        let renderer = TemplateRenderer::new();
        let template = "<!-- BEGIN tags -->{{x}}";
        assert_eq!(renderer.render(template, &json!({})), template);
    }
}
