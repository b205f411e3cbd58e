//! Ports between the form logic and whatever renders the page
//!
//! The browser implementation lives in the web crate; [`crate::memory`] has an
//! in-memory one for tests. All methods take `&self`: the page is shared,
//! single-threaded state, so implementations use interior mutability.

use crate::error::UiError;
use std::fmt;
use std::time::Duration;

/// Element a UI operation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target<'a> {
    /// Element with this `id`
    Id(&'a str),
    /// The `button[type="submit"]` inside the form with this `id`
    SubmitOf(&'a str),
}

impl fmt::Display for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Id(id) => write!(f, "#{id}"),
            Target::SubmitOf(form) => write!(f, "#{form} button[type=\"submit\"]"),
        }
    }
}

/// Read and mutate visible element state
pub trait UiPort {
    fn exists(&self, target: Target<'_>) -> bool;

    /// Current `value` of an input, textarea or select
    fn value(&self, target: Target<'_>) -> Result<String, UiError>;

    /// Whether a checkbox is ticked
    fn is_checked(&self, target: Target<'_>) -> Result<bool, UiError>;

    fn text(&self, target: Target<'_>) -> Result<String, UiError>;

    fn set_text(&self, target: Target<'_>, text: &str) -> Result<(), UiError>;

    fn is_visible(&self, target: Target<'_>) -> Result<bool, UiError>;

    fn set_visible(&self, target: Target<'_>, visible: bool) -> Result<(), UiError>;

    fn attribute(&self, target: Target<'_>, name: &str) -> Result<Option<String>, UiError>;

    fn set_attribute(&self, target: Target<'_>, name: &str, value: &str)
        -> Result<(), UiError>;

    fn remove_attribute(&self, target: Target<'_>, name: &str) -> Result<(), UiError>;

    fn has_class(&self, target: Target<'_>, class: &str) -> Result<bool, UiError>;

    fn add_class(&self, target: Target<'_>, class: &str) -> Result<(), UiError>;

    fn remove_class(&self, target: Target<'_>, class: &str) -> Result<(), UiError>;

    /// Replace the whole class list
    fn set_class_name(&self, target: Target<'_>, class_name: &str) -> Result<(), UiError>;

    fn is_disabled(&self, target: Target<'_>) -> Result<bool, UiError>;

    fn set_disabled(&self, target: Target<'_>, disabled: bool) -> Result<(), UiError>;

    /// Restore every control of a form to its default value
    fn reset_form(&self, form_id: &str) -> Result<(), UiError>;

    fn scroll_into_view(&self, target: Target<'_>) -> Result<(), UiError>;
}

/// Run a callback later without blocking the caller
///
/// Scheduled tasks are never cancelled.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}
