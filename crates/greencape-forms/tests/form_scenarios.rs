//! End-to-end form behaviour against the in-memory page
//!
//! Each test drives a `FormController` the way the browser wiring does:
//! fill fields, submit or blur, then inspect what the page shows.

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::{block_on, LocalPool};
use futures::task::LocalSpawnExt;
use greencape_forms::memory::{ManualScheduler, MemoryUi, RecordingTimer, DEFAULT_SUBMIT_LABEL};
use greencape_forms::presenter::{ARIA_INVALID, INVALID_CLASS};
use greencape_forms::*;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

struct Harness {
    ui: Rc<MemoryUi>,
    scheduler: Rc<ManualScheduler>,
    controller: Rc<FormController>,
}

fn harness(spec: FormSpec, submitter: Rc<dyn SubmissionPort>) -> Harness {
    let ui = Rc::new(MemoryUi::for_form(&spec));
    let scheduler = Rc::new(ManualScheduler::new());
    let controller = FormController::new(
        spec,
        ui.clone(),
        scheduler.clone(),
        submitter,
        FormsConfig::default().status_dismiss(),
    );
    Harness {
        ui,
        scheduler,
        controller: Rc::new(controller),
    }
}

fn simulated(spec: &FormSpec) -> (Rc<SimulatedSubmission<Rc<RecordingTimer>>>, Rc<RecordingTimer>) {
    let timer = Rc::new(RecordingTimer::new());
    let port = SimulatedSubmission::new(timer.clone(), spec.submit_delay(&FormsConfig::default()));
    (Rc::new(port), timer)
}

/// Port that records what it was given and blocks until released
struct GatedSubmission {
    release: RefCell<Option<oneshot::Receiver<Result<(), SubmitError>>>>,
    seen: RefCell<Vec<Submission>>,
}

impl GatedSubmission {
    fn new() -> (Rc<Self>, oneshot::Sender<Result<(), SubmitError>>) {
        let (tx, rx) = oneshot::channel();
        let port = Self {
            release: RefCell::new(Some(rx)),
            seen: RefCell::new(Vec::new()),
        };
        (Rc::new(port), tx)
    }
}

#[async_trait(?Send)]
impl SubmissionPort for GatedSubmission {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        self.seen.borrow_mut().push(submission.clone());
        let release = self.release.borrow_mut().take();
        match release {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(SubmitError::Transport("released without answer".into()))),
            None => Err(SubmitError::Rejected("already submitted".into())),
        }
    }
}

fn error_text(ui: &MemoryUi, field: &str) -> Option<String> {
    let region = ui.element(Target::Id(&format!("{field}-error")))?;
    region.visible.then_some(region.text)
}

fn status(ui: &MemoryUi, region: &str) -> Option<(String, bool)> {
    let el = ui.element(Target::Id(region))?;
    el.visible
        .then(|| (el.text.clone(), el.classes.contains(StatusKind::Success.class_name())))
}

// ============================================================================
// Quick volunteer form
// ============================================================================

#[test]
fn test_empty_quick_volunteer_shows_required_errors() {
    let spec = forms::quick_volunteer();
    let (port, _) = simulated(&spec);
    let h = harness(spec, port);

    let outcome = block_on(h.controller.submit()).unwrap();

    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    assert_eq!(error_text(&h.ui, "name").as_deref(), Some("Please enter your full name"));
    assert_eq!(
        error_text(&h.ui, "email").as_deref(),
        Some("Please enter your email address")
    );
    assert_eq!(
        h.ui.attribute(Target::Id("name"), ARIA_INVALID).unwrap().as_deref(),
        Some("true")
    );
    // No banner on this form, and nothing scheduled to dismiss one
    assert_eq!(status(&h.ui, "form-status"), None);
    assert!(h.scheduler.pending().is_empty());
}

#[test]
fn test_valid_quick_volunteer_confirms_and_resets() {
    let spec = forms::quick_volunteer();
    let (port, timer) = simulated(&spec);
    let h = harness(spec.clone(), port);
    h.ui.fill(&spec, &[("name", "Jo"), ("email", "jo@x.com")]).unwrap();

    let outcome = block_on(h.controller.submit()).unwrap();

    let SubmitOutcome::Accepted(submission) = outcome else {
        panic!("expected the form to be accepted");
    };
    assert_eq!(submission.form, "quick-volunteer-form");
    assert_eq!(
        status(&h.ui, "form-status"),
        Some(("Thank you for signing up! We'll be in touch soon.".to_string(), true))
    );
    assert_eq!(h.ui.value(Target::Id("name")).unwrap(), "");
    assert_eq!(h.ui.value(Target::Id("email")).unwrap(), "");
    // Immediate: no pending label, no wait
    assert!(timer.sleeps().is_empty());
    assert_eq!(h.ui.text(Target::SubmitOf("quick-volunteer-form")).unwrap(), DEFAULT_SUBMIT_LABEL);
}

#[test]
fn test_correcting_a_field_clears_its_stale_error() {
    let spec = forms::quick_volunteer();
    let (port, _) = simulated(&spec);
    let h = harness(spec.clone(), port);
    h.ui.fill(&spec, &[("name", "J"), ("email", "jo@x.com")]).unwrap();

    block_on(h.controller.submit()).unwrap();
    assert_eq!(
        error_text(&h.ui, "name").as_deref(),
        Some("Name must be at least 2 characters")
    );

    h.ui.set_value("name", "Jo").unwrap();
    block_on(h.controller.submit()).unwrap();
    assert_eq!(error_text(&h.ui, "name"), None);
    assert!(!h.ui.has_class(Target::Id("name"), INVALID_CLASS).unwrap());
}

// ============================================================================
// Enquiry form
// ============================================================================

fn valid_enquiry() -> Vec<(&'static str, &'static str)> {
    vec![
        ("full-name", "Thandi Nkosi"),
        ("email", "thandi@example.org"),
        ("phone", "021 555 0101"),
        ("age", "26-35"),
        ("interest", "tree-planting"),
        ("message", "Keen to help on weekends."),
        ("terms", "on"),
    ]
}

#[test]
fn test_short_enquiry_message_shows_banner() {
    let spec = forms::enquiry();
    let (port, timer) = simulated(&spec);
    let h = harness(spec.clone(), port);
    let mut values = valid_enquiry();
    values.retain(|(id, _)| *id != "message");
    values.push(("message", "short"));
    h.ui.fill(&spec, &values).unwrap();

    let outcome = block_on(h.controller.submit()).unwrap();

    let SubmitOutcome::Rejected(report) = outcome else {
        panic!("expected the form to be rejected");
    };
    assert_eq!(report.failures().count(), 1);
    assert_eq!(
        error_text(&h.ui, "message").as_deref(),
        Some("Message must be at least 10 characters")
    );
    assert_eq!(
        status(&h.ui, "form-status"),
        Some(("Please correct the errors above and try again.".to_string(), false))
    );

    let button = Target::SubmitOf("enquiry-form");
    assert_eq!(h.ui.text(button).unwrap(), DEFAULT_SUBMIT_LABEL);
    assert!(!h.ui.is_disabled(button).unwrap());
    assert!(timer.sleeps().is_empty());
    // The fields keep what the user typed
    assert_eq!(h.ui.value(Target::Id("full-name")).unwrap(), "Thandi Nkosi");
}

#[test]
fn test_enquiry_reports_every_failure_in_order() {
    let spec = forms::enquiry();
    let (port, _) = simulated(&spec);
    let h = harness(spec, port);

    let outcome = block_on(h.controller.submit()).unwrap();

    let SubmitOutcome::Rejected(report) = outcome else {
        panic!("expected the form to be rejected");
    };
    let failed: Vec<_> = report.failures().map(|f| f.field).collect();
    assert_eq!(
        failed,
        ["full-name", "email", "phone", "age", "interest", "message", "terms"]
    );
    assert_eq!(
        error_text(&h.ui, "terms").as_deref(),
        Some("You must agree to the Privacy Policy and Terms of Use")
    );
    assert_eq!(
        error_text(&h.ui, "interest").as_deref(),
        Some("Please select how you'd like to get involved")
    );
}

#[test]
fn test_valid_enquiry_waits_for_simulated_delay() {
    let spec = forms::enquiry();
    let (port, timer) = simulated(&spec);
    let h = harness(spec.clone(), port);
    h.ui.fill(&spec, &valid_enquiry()).unwrap();

    let outcome = block_on(h.controller.submit()).unwrap();

    assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
    assert_eq!(timer.sleeps(), vec![Duration::from_millis(1500)]);
    assert_eq!(
        status(&h.ui, "form-status"),
        Some((
            "Thank you for your enquiry! We'll respond within 48 hours.".to_string(),
            true
        ))
    );
    assert!(!h.ui.is_checked(Target::Id("terms")).unwrap());
}

// ============================================================================
// Contact form
// ============================================================================

fn fill_valid_contact(ui: &MemoryUi, spec: &FormSpec) {
    ui.fill(
        spec,
        &[
            ("contact-name", "Sipho"),
            ("contact-email", "sipho@example.org"),
            ("contact-subject", "Planting day"),
            ("contact-message", "Which park is next on the list?"),
        ],
    )
    .unwrap();
}

#[test]
fn test_contact_button_is_pending_during_submission() {
    let spec = forms::contact();
    let (port, release) = GatedSubmission::new();
    let h = harness(spec.clone(), port.clone());
    fill_valid_contact(&h.ui, &spec);

    let mut pool = LocalPool::new();
    let outcome = Rc::new(RefCell::new(None));
    {
        let controller = Rc::clone(&h.controller);
        let outcome = Rc::clone(&outcome);
        pool.spawner()
            .spawn_local(async move {
                *outcome.borrow_mut() = Some(controller.submit().await);
            })
            .unwrap();
    }

    pool.run_until_stalled();

    let button = Target::SubmitOf("contact-form");
    assert_eq!(h.ui.text(button).unwrap(), "Sending...");
    assert!(h.ui.is_disabled(button).unwrap());
    assert_eq!(status(&h.ui, "contact-form-status"), None);
    assert_eq!(port.seen.borrow().len(), 1);
    assert!(outcome.borrow().is_none());

    release.send(Ok(())).unwrap();
    pool.run_until_stalled();

    assert_eq!(h.ui.text(button).unwrap(), DEFAULT_SUBMIT_LABEL);
    assert!(!h.ui.is_disabled(button).unwrap());
    assert_eq!(
        status(&h.ui, "contact-form-status"),
        Some((
            "Message sent successfully! We'll get back to you within 24 hours.".to_string(),
            true
        ))
    );
    for field in ["contact-name", "contact-email", "contact-subject", "contact-message"] {
        assert_eq!(h.ui.value(Target::Id(field)).unwrap(), "", "{field}");
    }
    assert!(matches!(
        outcome.borrow().as_ref(),
        Some(Ok(SubmitOutcome::Accepted(_)))
    ));
}

#[test]
fn test_failed_submission_keeps_fields_and_restores_button() {
    let spec = forms::contact();
    let (port, release) = GatedSubmission::new();
    let h = harness(spec.clone(), port);
    fill_valid_contact(&h.ui, &spec);

    release
        .send(Err(SubmitError::Transport("offline".into())))
        .unwrap();
    let result = block_on(h.controller.submit());

    assert_eq!(
        result,
        Err(FormError::Submit(SubmitError::Transport("offline".into())))
    );
    assert_eq!(
        status(&h.ui, "contact-form-status"),
        Some((SUBMIT_FAILED_MESSAGE.to_string(), false))
    );
    assert_eq!(h.ui.value(Target::Id("contact-name")).unwrap(), "Sipho");
    let button = Target::SubmitOf("contact-form");
    assert_eq!(h.ui.text(button).unwrap(), DEFAULT_SUBMIT_LABEL);
    assert!(!h.ui.is_disabled(button).unwrap());
}

#[test]
fn test_invalid_contact_has_no_banner() {
    let spec = forms::contact();
    let (port, _) = simulated(&spec);
    let h = harness(spec.clone(), port);
    h.ui.fill(&spec, &[("contact-name", "Sipho")]).unwrap();

    block_on(h.controller.submit()).unwrap();

    assert_eq!(status(&h.ui, "contact-form-status"), None);
    assert_eq!(
        error_text(&h.ui, "contact-subject").as_deref(),
        Some("Please enter a subject")
    );
}

#[test]
fn test_status_banner_dismisses_after_five_seconds() {
    let spec = forms::quick_volunteer();
    let (port, _) = simulated(&spec);
    let h = harness(spec.clone(), port);
    h.ui.fill(&spec, &[("name", "Jo"), ("email", "jo@x.com")]).unwrap();

    block_on(h.controller.submit()).unwrap();
    assert_eq!(h.scheduler.pending(), vec![Duration::from_millis(5000)]);
    assert!(status(&h.ui, "form-status").is_some());

    h.scheduler.run_all();
    assert_eq!(status(&h.ui, "form-status"), None);
}

// ============================================================================
// Blur
// ============================================================================

#[test]
fn test_blur_on_short_phone_shows_error() {
    let spec = forms::enquiry();
    let (port, _) = simulated(&spec);
    let h = harness(spec, port);
    h.ui.set_value("phone", "123").unwrap();

    let action = h.controller.blur("phone").unwrap();

    assert_eq!(
        action,
        BlurAction::Show("Please enter a valid phone number (at least 10 digits)")
    );
    assert_eq!(
        error_text(&h.ui, "phone").as_deref(),
        Some("Please enter a valid phone number (at least 10 digits)")
    );
    assert_eq!(status(&h.ui, "form-status"), None);
}

#[test]
fn test_blur_clears_once_corrected_and_ignores_empty() {
    let spec = forms::contact();
    let (port, _) = simulated(&spec);
    let h = harness(spec, port);

    h.ui.set_value("contact-email", "sipho@").unwrap();
    h.controller.blur("contact-email").unwrap();
    assert!(error_text(&h.ui, "contact-email").is_some());

    h.ui.set_value("contact-email", "").unwrap();
    assert_eq!(h.controller.blur("contact-email").unwrap(), BlurAction::Ignore);
    // Emptying the field leaves the previous message alone
    assert!(error_text(&h.ui, "contact-email").is_some());

    h.ui.set_value("contact-email", "sipho@example.org").unwrap();
    assert_eq!(h.controller.blur("contact-email").unwrap(), BlurAction::Clear);
    assert_eq!(error_text(&h.ui, "contact-email"), None);
}

#[test]
fn test_blur_on_unknown_field() {
    let spec = forms::contact();
    let (port, _) = simulated(&spec);
    let h = harness(spec, port);

    assert_eq!(
        h.controller.blur("phone"),
        Err(FormError::UnknownField {
            form: "contact-form".to_string(),
            field: "phone".to_string(),
        })
    );
}
