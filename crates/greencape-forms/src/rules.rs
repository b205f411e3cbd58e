// File: src/rules.rs
// Purpose: Per-field acceptance rules and their verdicts

use greencape_validation as core;
use serde::{Deserialize, Serialize};

/// Kind of control a rule reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `<input>` or `<textarea>`
    Text,
    /// `<select>`; only emptiness matters
    Select,
    /// `<input type="checkbox">`; required means checked
    Checkbox,
}

/// Format check applied to a non-empty value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    None,
    Name,
    Email,
    Phone,
    MinLength(usize),
}

impl Check {
    pub fn passes(&self, value: &str) -> bool {
        match self {
            Check::None => true,
            Check::Name => core::validate_name(value),
            Check::Email => core::validate_email(value),
            Check::Phone => core::validate_phone(value),
            Check::MinLength(min) => core::validate_message(value, *min),
        }
    }
}

/// Current content of a field as read from the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Checked(_) => None,
        }
    }
}

/// Result of applying one rule to one value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    /// Required but empty (or unchecked)
    Missing(&'static str),
    /// Present but malformed
    Invalid(&'static str),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// Message to paint next to the field, if any
    pub fn message(&self) -> Option<&'static str> {
        match *self {
            Verdict::Valid => None,
            Verdict::Missing(msg) | Verdict::Invalid(msg) => Some(msg),
        }
    }
}

/// What leaving a field should do to its error state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurAction {
    /// Field is empty or not live-validated; leave it alone
    Ignore,
    Show(&'static str),
    Clear,
}

const FALLBACK_FORMAT_MESSAGE: &str = "Please check this field";

/// Acceptance rule for a single form field
///
/// Built with [`FieldRule::text`], [`FieldRule::select`] or
/// [`FieldRule::checkbox`] and refined with [`FieldRule::required`] and
/// [`FieldRule::invalid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub id: &'static str,
    pub kind: FieldKind,
    pub check: Check,
    pub required_message: Option<&'static str>,
    pub format_message: Option<&'static str>,
}

impl FieldRule {
    pub fn text(id: &'static str, check: Check) -> Self {
        Self::new(id, FieldKind::Text, check)
    }

    pub fn select(id: &'static str) -> Self {
        Self::new(id, FieldKind::Select, Check::None)
    }

    pub fn checkbox(id: &'static str) -> Self {
        Self::new(id, FieldKind::Checkbox, Check::None)
    }

    fn new(id: &'static str, kind: FieldKind, check: Check) -> Self {
        Self {
            id,
            kind,
            check,
            required_message: None,
            format_message: None,
        }
    }

    /// Mark the field required, with the message shown when it is empty
    pub fn required(mut self, message: &'static str) -> Self {
        self.required_message = Some(message);
        self
    }

    /// Message shown when the format check fails
    pub fn invalid(mut self, message: &'static str) -> Self {
        self.format_message = Some(message);
        self
    }

    pub fn is_required(&self) -> bool {
        self.required_message.is_some()
    }

    /// Only text fields with a format check give feedback on blur
    pub fn validates_on_blur(&self) -> bool {
        self.kind == FieldKind::Text && self.check != Check::None
    }

    fn format_failure(&self) -> Verdict {
        Verdict::Invalid(self.format_message.unwrap_or(FALLBACK_FORMAT_MESSAGE))
    }

    /// Submit-time verdict: emptiness first, then format
    pub fn evaluate(&self, value: &FieldValue) -> Verdict {
        match (self.kind, value) {
            (FieldKind::Checkbox, FieldValue::Checked(checked)) => {
                match self.required_message {
                    Some(msg) if !checked => Verdict::Missing(msg),
                    _ => Verdict::Valid,
                }
            }
            (FieldKind::Select, FieldValue::Text(text)) => {
                match self.required_message {
                    Some(msg) if text.is_empty() => Verdict::Missing(msg),
                    _ => Verdict::Valid,
                }
            }
            (FieldKind::Text, FieldValue::Text(text)) => {
                if core::is_blank(text) {
                    match self.required_message {
                        Some(msg) => Verdict::Missing(msg),
                        None => Verdict::Valid,
                    }
                } else if !self.check.passes(text) {
                    self.format_failure()
                } else {
                    Verdict::Valid
                }
            }
            // Reading a checkbox as text (or the reverse) means the page
            // does not match the rule table.
            _ => self.format_failure(),
        }
    }

    /// Blur-time action: empty fields get no feedback
    pub fn blur_action(&self, value: &str) -> BlurAction {
        if !self.validates_on_blur() || core::is_blank(value) {
            return BlurAction::Ignore;
        }

        if self.check.passes(value) {
            BlurAction::Clear
        } else {
            match self.format_failure() {
                Verdict::Invalid(msg) => BlurAction::Show(msg),
                _ => BlurAction::Ignore,
            }
        }
    }
}
