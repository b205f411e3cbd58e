// File: src/controller.rs
// Purpose: Submit gate and blur handling for one form

use crate::error::{FormError, UiError};
use crate::forms::FormSpec;
use crate::presenter::{self, StatusMessage};
use crate::report::{self, FormValues, ValidationReport};
use crate::rules::{BlurAction, FieldKind, FieldValue};
use crate::submission::{Submission, SubmissionPort};
use crate::ui::{Scheduler, Target, UiPort};
use std::rc::Rc;
use std::time::Duration;

/// Banner shown when the submission port fails
pub const SUBMIT_FAILED_MESSAGE: &str = "Sorry, something went wrong. Please try again later.";

/// How a submit attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; nothing was sent
    Rejected(ValidationReport),
    /// Every field passed and the port accepted the payload
    Accepted(Submission),
}

/// Binds one [`FormSpec`] to a page, a scheduler and a submission port
pub struct FormController {
    spec: FormSpec,
    ui: Rc<dyn UiPort>,
    scheduler: Rc<dyn Scheduler>,
    submitter: Rc<dyn SubmissionPort>,
    status_dismiss: Duration,
}

impl FormController {
    pub fn new(
        spec: FormSpec,
        ui: Rc<dyn UiPort>,
        scheduler: Rc<dyn Scheduler>,
        submitter: Rc<dyn SubmissionPort>,
        status_dismiss: Duration,
    ) -> Self {
        Self {
            spec,
            ui,
            scheduler,
            submitter,
            status_dismiss,
        }
    }

    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    /// Read every field the rule table names
    pub fn read_values(&self) -> Result<FormValues, UiError> {
        let mut values = FormValues::new();
        for rule in &self.spec.fields {
            let target = Target::Id(rule.id);
            let value = match rule.kind {
                FieldKind::Checkbox => FieldValue::Checked(self.ui.is_checked(target)?),
                FieldKind::Text | FieldKind::Select => FieldValue::Text(self.ui.value(target)?),
            };
            values.insert(rule.id, value);
        }
        Ok(values)
    }

    /// Clear every field's error, re-evaluate, and paint the failures
    pub fn validate(&self) -> Result<(ValidationReport, FormValues), FormError> {
        for rule in &self.spec.fields {
            presenter::clear_error(&*self.ui, rule.id)?;
        }

        let values = self.read_values()?;
        let report = report::evaluate(&self.spec, &values);
        for failure in report.failures() {
            if let Some(message) = failure.verdict.message() {
                presenter::show_error(&*self.ui, failure.field, message)?;
            }
        }

        Ok((report, values))
    }

    fn show_status(&self, status: StatusMessage) -> Result<(), UiError> {
        presenter::show_status(
            &self.ui,
            &*self.scheduler,
            self.spec.status_region,
            &status,
            self.status_dismiss,
        )
        .map(|_| ())
    }

    /// Handle a submit event
    ///
    /// Nothing reaches the submission port unless every field passes. While
    /// the port is working the submit button (if the form has a pending
    /// label) is disabled, so a second submit cannot overlap the first.
    pub async fn submit(&self) -> Result<SubmitOutcome, FormError> {
        let (report, values) = self.validate()?;

        if !report.is_valid() {
            tracing::debug!(
                "{}: {} field(s) failed validation",
                self.spec.id,
                report.failures().count()
            );
            if let Some(banner) = self.spec.failure_banner {
                self.show_status(StatusMessage::failure(banner))?;
            }
            return Ok(SubmitOutcome::Rejected(report));
        }

        let submission = Submission::new(self.spec.id, &values);
        let button = Target::SubmitOf(self.spec.id);
        let original_label = match self.spec.pending_label {
            Some(pending) => {
                let original = self.ui.text(button)?;
                self.ui.set_text(button, pending)?;
                self.ui.set_disabled(button, true)?;
                Some(original)
            }
            None => None,
        };

        let sent = self.submitter.submit(&submission).await;

        let painted = match &sent {
            Ok(()) => self
                .show_status(StatusMessage::success(self.spec.success_message))
                .and_then(|_| self.ui.reset_form(self.spec.id)),
            Err(e) => {
                tracing::error!("{}: submission failed: {}", self.spec.id, e);
                self.show_status(StatusMessage::failure(SUBMIT_FAILED_MESSAGE))
            }
        };

        if let Some(original) = original_label {
            self.ui.set_text(button, &original)?;
            self.ui.set_disabled(button, false)?;
        }
        painted?;

        sent?;
        tracing::info!("{} submitted", self.spec.id);
        Ok(SubmitOutcome::Accepted(submission))
    }

    /// Handle focus leaving `field_id`
    pub fn blur(&self, field_id: &str) -> Result<BlurAction, FormError> {
        let rule = self
            .spec
            .field(field_id)
            .ok_or_else(|| FormError::UnknownField {
                form: self.spec.id.to_string(),
                field: field_id.to_string(),
            })?;

        if !rule.validates_on_blur() {
            return Ok(BlurAction::Ignore);
        }

        let value = self.ui.value(Target::Id(rule.id))?;
        let action = rule.blur_action(&value);
        match action {
            BlurAction::Show(message) => presenter::show_error(&*self.ui, rule.id, message)?,
            BlurAction::Clear => presenter::clear_error(&*self.ui, rule.id)?,
            BlurAction::Ignore => {}
        }
        Ok(action)
    }
}
