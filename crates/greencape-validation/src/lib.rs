//! Green Cape Town validation core
//!
//! Pure predicates behind every form on the site. Nothing in here touches the
//! DOM; the forms crate decides which predicate guards which field and what
//! message to show when it fails.

pub mod email;
pub mod phone;
pub mod text;

// Re-export all validators
pub use email::*;
pub use phone::*;
pub use text::*;
