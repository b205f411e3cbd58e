// File: src/presenter.rs
// Purpose: Paint and clear field errors and status banners

use crate::error::UiError;
use crate::ui::{Scheduler, Target, UiPort};
use std::rc::Rc;
use std::time::Duration;

/// Class that gives an invalid field its red border
pub const INVALID_CLASS: &str = "field-invalid";

pub const ARIA_INVALID: &str = "aria-invalid";

/// Id of the region that shows a field's error
pub fn error_region_id(field_id: &str) -> String {
    format!("{field_id}-error")
}

/// Mark a field invalid and show `message` under it
///
/// A page without the `<id>-error` region still gets the field marked.
pub fn show_error<U: UiPort + ?Sized>(
    ui: &U,
    field_id: &str,
    message: &str,
) -> Result<(), UiError> {
    let region = error_region_id(field_id);
    let region = Target::Id(&region);
    if ui.exists(region) {
        ui.set_text(region, message)?;
        ui.set_visible(region, true)?;
    } else {
        tracing::debug!("No error region for {}", field_id);
    }

    let field = Target::Id(field_id);
    ui.set_attribute(field, ARIA_INVALID, "true")?;
    ui.add_class(field, INVALID_CLASS)
}

/// Undo [`show_error`]
pub fn clear_error<U: UiPort + ?Sized>(ui: &U, field_id: &str) -> Result<(), UiError> {
    let region = error_region_id(field_id);
    let region = Target::Id(&region);
    if ui.exists(region) {
        ui.set_text(region, "")?;
        ui.set_visible(region, false)?;
    }

    let field = Target::Id(field_id);
    ui.remove_attribute(field, ARIA_INVALID)?;
    ui.remove_class(field, INVALID_CLASS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Failure,
}

impl StatusKind {
    pub fn class_name(&self) -> &'static str {
        match self {
            StatusKind::Success => "form-success",
            StatusKind::Failure => "form-error",
        }
    }
}

/// Transient banner reporting how a submit attempt went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Failure,
        }
    }
}

/// Show a status banner and schedule it to disappear after `dismiss_after`
///
/// Returns `Ok(false)` when the page has no such region.
pub fn show_status(
    ui: &Rc<dyn UiPort>,
    scheduler: &dyn Scheduler,
    region_id: &str,
    status: &StatusMessage,
    dismiss_after: Duration,
) -> Result<bool, UiError> {
    let region = Target::Id(region_id);
    if !ui.exists(region) {
        tracing::warn!("Status region #{} not found; dropping \"{}\"", region_id, status.text);
        return Ok(false);
    }

    ui.set_text(region, &status.text)?;
    ui.set_class_name(region, status.kind.class_name())?;
    ui.set_visible(region, true)?;
    ui.scroll_into_view(region)?;

    let ui = Rc::clone(ui);
    let region_id = region_id.to_string();
    scheduler.schedule(
        dismiss_after,
        Box::new(move || {
            if let Err(e) = ui.set_visible(Target::Id(&region_id), false) {
                tracing::error!("Failed to hide status #{}: {}", region_id, e);
            }
        }),
    );

    Ok(true)
}
