//! # fw_templates
//!
//! Template store and placeholder substitution for ForumWidgets.
//!
//! This crate owns the one-time template loading phase and the substitution
//! engine the widget renderers apply to loaded templates:
//!
//! - **TemplateStore**: raw template text keyed by identifier, loaded once
//!   at startup and immutable afterwards
//! - **TemplateRenderer**: fills `{{name}}` placeholders and
//!   `<!-- BEGIN name -->` list blocks from a JSON mapping
//!
//! # Example
//!
//! ```rust,no_run
//! use fw_templates::{TemplateRenderer, TemplateStore};
//! use serde_json::json;
//!
//! # async fn demo() -> Result<(), fw_templates::TemplateError> {
//! let store = TemplateStore::load("templates", &["recentposts.tpl"]).await?;
//! let renderer = TemplateRenderer::new();
//!
//! let markup = renderer.render(
//!     store.get_required("recentposts.tpl")?,
//!     &json!({"numPosts": 8, "duration": "day"}),
//! );
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod renderer;
pub mod store;

pub use error::{TemplateError, TemplateResult};
pub use renderer::TemplateRenderer;
pub use store::TemplateStore;
