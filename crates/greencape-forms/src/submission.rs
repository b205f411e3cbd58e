//! Submission port
//!
//! The site has no backend yet. [`SimulatedSubmission`] stands in for one by
//! waiting a fixed delay and succeeding; a real implementation would POST the
//! serialized [`Submission`] instead.

use crate::error::SubmitError;
use crate::report::FormValues;
use crate::rules::FieldValue;
use async_trait::async_trait;
use serde::Serialize;
use std::rc::Rc;
use std::time::Duration;

/// One field of a submitted form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedField {
    pub name: String,
    pub value: FieldValue,
}

/// Payload handed to a [`SubmissionPort`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub form: String,
    pub fields: Vec<SubmittedField>,
}

impl Submission {
    pub fn new(form: &str, values: &FormValues) -> Self {
        Self {
            form: form.to_string(),
            fields: values
                .iter()
                .map(|(name, value)| SubmittedField {
                    name: name.to_string(),
                    value: value.clone(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Where validated forms go
#[async_trait(?Send)]
pub trait SubmissionPort {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError>;
}

/// Non-blocking delay
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, delay: Duration);
}

#[async_trait(?Send)]
impl<T: Timer + ?Sized> Timer for Rc<T> {
    async fn sleep(&self, delay: Duration) {
        (**self).sleep(delay).await
    }
}

/// Pretend round trip: wait, then accept
pub struct SimulatedSubmission<T> {
    timer: T,
    delay: Duration,
}

impl<T: Timer> SimulatedSubmission<T> {
    pub fn new(timer: T, delay: Duration) -> Self {
        Self { timer, delay }
    }
}

#[async_trait(?Send)]
impl<T: Timer> SubmissionPort for SimulatedSubmission<T> {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        tracing::debug!(
            "Simulating submission of {} ({} fields) after {:?}",
            submission.form,
            submission.fields.len(),
            self.delay
        );
        if !self.delay.is_zero() {
            self.timer.sleep(self.delay).await;
        }
        Ok(())
    }
}
