//! # greencape-forms
//!
//! Form handling for the Green Cape Town site, independent of the browser.
//!
//! Each form is a declarative [`FormSpec`]: an ordered table of
//! [`FieldRule`]s plus what to do once every rule passes. A
//! [`FormController`] applies one spec to a page through the [`UiPort`]
//! trait, hands valid forms to a [`SubmissionPort`], and schedules status
//! dismissal through a [`Scheduler`].
//!
//! ```rust
//! use greencape_forms::{evaluate, forms, FieldValue, FormValues};
//!
//! let values = FormValues::new()
//!     .with("name", FieldValue::Text("Jo".into()))
//!     .with("email", FieldValue::Text("jo@x.com".into()));
//!
//! assert!(evaluate(&forms::quick_volunteer(), &values).is_valid());
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod forms;
pub mod memory;
pub mod presenter;
pub mod report;
pub mod rules;
pub mod submission;
pub mod ui;

pub use config::{FormsConfig, MotionConfig, SiteConfig};
pub use controller::{FormController, SubmitOutcome, SUBMIT_FAILED_MESSAGE};
pub use error::{FormError, SubmitError, UiError};
pub use forms::FormSpec;
pub use presenter::{clear_error, show_error, show_status, StatusKind, StatusMessage};
pub use report::{evaluate, FieldOutcome, FormValues, ValidationReport};
pub use rules::{BlurAction, Check, FieldKind, FieldRule, FieldValue, Verdict};
pub use submission::{SimulatedSubmission, Submission, SubmissionPort, SubmittedField, Timer};
pub use ui::{Scheduler, Target, UiPort};

// Re-export the predicates so callers need only one dependency
pub use greencape_validation as validation;
