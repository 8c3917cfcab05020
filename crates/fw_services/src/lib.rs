//! # fw_services
//!
//! External data-service interfaces for ForumWidgets.
//!
//! Widget renderers perform their remote lookups exclusively through the
//! traits defined here. The crate also owns the error taxonomy for upstream
//! failures and the per-call timeout boundary:
//!
//! - **Traits**: category, user, topic/tag, translation, page rendering,
//!   post parsing
//! - **Types**: the summary structs crossing the boundary
//! - **Limits**: [`bounded`] wraps each call in a configurable deadline

pub mod error;
pub mod limits;
pub mod traits;
pub mod types;

pub use error::{ServiceError, ServiceResult};
pub use limits::{bounded, CallLimits};
pub use traits::{
    CategoryService, PageRenderer, PostParser, TopicService, Translator, UserService,
};
pub use types::{CategorySummary, TagSummary, TopicTerm, UserSummary};
