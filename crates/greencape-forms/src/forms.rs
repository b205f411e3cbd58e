// File: src/forms.rs
// Purpose: Rule tables for the three site forms

use crate::config::FormsConfig;
use crate::rules::{Check, FieldRule};
use greencape_validation::{MESSAGE_MIN_LENGTH, SUBJECT_MIN_LENGTH};
use std::time::Duration;

const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
const EMAIL_MISSING: &str = "Please enter your email address";
const EMAIL_INVALID: &str = "Please enter a valid email address";
const MESSAGE_MISSING: &str = "Please enter a message";
const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

/// Declarative description of one form: which fields, in which order, and
/// what happens once they all pass
#[derive(Debug, Clone, PartialEq)]
pub struct FormSpec {
    /// Id of the `<form>` element
    pub id: &'static str,
    /// Id of the region that receives the status banner
    pub status_region: &'static str,
    /// Fields in the order they are checked and reported
    pub fields: Vec<FieldRule>,
    /// Submit button label while the submission is in flight. `None` leaves
    /// the button alone.
    pub pending_label: Option<&'static str>,
    /// Whether the simulated round trip waits `submit_delay_ms`
    pub delayed: bool,
    pub success_message: &'static str,
    /// Whole-form banner when any field fails
    pub failure_banner: Option<&'static str>,
}

impl FormSpec {
    pub fn field(&self, id: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|rule| rule.id == id)
    }

    /// Fields that get live feedback when focus leaves them
    pub fn blur_fields(&self) -> impl Iterator<Item = &FieldRule> {
        self.fields.iter().filter(|rule| rule.validates_on_blur())
    }

    pub fn submit_delay(&self, config: &FormsConfig) -> Duration {
        if self.delayed {
            config.submit_delay()
        } else {
            Duration::ZERO
        }
    }
}

/// Homepage sign-up: name and email only, confirmed straight away
pub fn quick_volunteer() -> FormSpec {
    FormSpec {
        id: "quick-volunteer-form",
        status_region: "form-status",
        fields: vec![
            FieldRule::text("name", Check::Name)
                .required("Please enter your full name")
                .invalid(NAME_TOO_SHORT),
            FieldRule::text("email", Check::Email)
                .required(EMAIL_MISSING)
                .invalid(EMAIL_INVALID),
        ],
        pending_label: None,
        delayed: false,
        success_message: "Thank you for signing up! We'll be in touch soon.",
        failure_banner: None,
    }
}

pub fn enquiry() -> FormSpec {
    FormSpec {
        id: "enquiry-form",
        status_region: "form-status",
        fields: vec![
            FieldRule::text("full-name", Check::Name)
                .required("Please enter your full name")
                .invalid(NAME_TOO_SHORT),
            FieldRule::text("email", Check::Email)
                .required(EMAIL_MISSING)
                .invalid(EMAIL_INVALID),
            FieldRule::text("phone", Check::Phone)
                .required("Please enter your phone number")
                .invalid("Please enter a valid phone number (at least 10 digits)"),
            FieldRule::select("age").required("Please select your age group"),
            FieldRule::select("interest")
                .required("Please select how you'd like to get involved"),
            FieldRule::text("message", Check::MinLength(MESSAGE_MIN_LENGTH))
                .required(MESSAGE_MISSING)
                .invalid(MESSAGE_TOO_SHORT),
            FieldRule::checkbox("terms")
                .required("You must agree to the Privacy Policy and Terms of Use"),
        ],
        pending_label: Some("Submitting..."),
        delayed: true,
        success_message: "Thank you for your enquiry! We'll respond within 48 hours.",
        failure_banner: Some("Please correct the errors above and try again."),
    }
}

pub fn contact() -> FormSpec {
    FormSpec {
        id: "contact-form",
        status_region: "contact-form-status",
        fields: vec![
            FieldRule::text("contact-name", Check::Name)
                .required("Please enter your name")
                .invalid(NAME_TOO_SHORT),
            FieldRule::text("contact-email", Check::Email)
                .required(EMAIL_MISSING)
                .invalid(EMAIL_INVALID),
            FieldRule::text("contact-subject", Check::MinLength(SUBJECT_MIN_LENGTH))
                .required("Please enter a subject")
                .invalid("Subject must be at least 3 characters"),
            FieldRule::text("contact-message", Check::MinLength(MESSAGE_MIN_LENGTH))
                .required(MESSAGE_MISSING)
                .invalid(MESSAGE_TOO_SHORT),
        ],
        pending_label: Some("Sending..."),
        delayed: true,
        success_message: "Message sent successfully! We'll get back to you within 24 hours.",
        failure_banner: None,
    }
}

/// Every form the site knows about. Pages only carry some of them.
pub fn all() -> Vec<FormSpec> {
    vec![quick_volunteer(), enquiry(), contact()]
}
