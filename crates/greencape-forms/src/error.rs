// File: src/error.rs
// Purpose: Error types for UI access and submission

use thiserror::Error;

/// Failure talking to the page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Failure reported by a submission port
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),

    #[error("submission could not be delivered: {0}")]
    Transport(String),
}

/// Anything that can go wrong while handling a form event
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Ui(#[from] UiError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error("form {form} has no field named {field}")]
    UnknownField { form: String, field: String },
}
