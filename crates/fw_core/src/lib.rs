//! # fw_core
//!
//! Widget data model, registry, and render dispatch for ForumWidgets.
//!
//! # Architecture
//!
//! - **WidgetInstance**: one configured placement — type tag, open data
//!   mapping, area context, viewer id
//! - **Widget**: the uniform async render contract every renderer implements
//! - **WidgetRegistry**: maps type tags to renderer implementations
//! - **Dispatcher**: resolves a tag, invokes the renderer, forwards the
//!   completion unchanged
//! - **WidgetDescriptor**: catalog metadata for admin configuration tooling
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fw_core::{Dispatcher, WidgetInstance, WidgetRegistry};
//!
//! let mut registry = WidgetRegistry::new();
//! registry.register(Arc::new(MyWidget));
//!
//! let dispatcher = Dispatcher::new(Arc::new(registry));
//! let widget = WidgetInstance::new("my-widget");
//! let markup = dispatcher.render("my-widget", &widget).await?;
//! ```

pub mod descriptor;
pub mod dispatcher;
pub mod error;
pub mod instance;
pub mod registry;
pub mod widget;

// Re-export main types for convenience
pub use descriptor::WidgetDescriptor;
pub use dispatcher::Dispatcher;
pub use error::{WidgetError, WidgetResult};
pub use instance::{truthy, WidgetArea, WidgetInstance};
pub use registry::WidgetRegistry;
pub use widget::Widget;
