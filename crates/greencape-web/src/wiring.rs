// File: src/wiring.rs
// Purpose: Attach form controllers to the page's submit and blur events

use crate::listen;
use crate::timers::{GlooScheduler, GlooTimer};
use greencape_forms::{
    forms, FormController, FormsConfig, Scheduler, SimulatedSubmission, SubmissionPort,
    SubmitOutcome, UiPort,
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event};

fn on_submit(controller: Rc<FormController>) -> impl FnMut(Event) {
    move |e: Event| {
        e.prevent_default();
        let controller = Rc::clone(&controller);
        spawn_local(async move {
            let form = controller.spec().id;
            match controller.submit().await {
                Ok(SubmitOutcome::Accepted(submission)) => {
                    tracing::debug!("{} accepted ({} fields)", form, submission.fields.len());
                }
                Ok(SubmitOutcome::Rejected(report)) => {
                    tracing::debug!("{} rejected: {} invalid", form, report.failures().count());
                }
                Err(e) => tracing::error!("{} submit failed: {}", form, e),
            }
        });
    }
}

fn on_blur(controller: Rc<FormController>, field: &'static str) -> impl FnMut(Event) {
    move |_: Event| match controller.blur(field) {
        Ok(action) => tracing::debug!("{} blur: {:?}", field, action),
        Err(e) => tracing::error!("{} blur failed: {}", field, e),
    }
}

/// Wire every known form present on this page. Returns the number wired.
pub fn init(document: &Document, ui: Rc<dyn UiPort>, config: &FormsConfig) -> usize {
    let scheduler: Rc<dyn Scheduler> = Rc::new(GlooScheduler);
    let mut wired = 0;

    for spec in forms::all() {
        let Some(form) = document.get_element_by_id(spec.id) else {
            continue;
        };
        let submitter: Rc<dyn SubmissionPort> =
            Rc::new(SimulatedSubmission::new(GlooTimer, spec.submit_delay(config)));
        let blur_ids: Vec<&'static str> = spec.blur_fields().map(|rule| rule.id).collect();
        let controller = Rc::new(FormController::new(
            spec,
            Rc::clone(&ui),
            Rc::clone(&scheduler),
            submitter,
            config.status_dismiss(),
        ));

        listen(&form, "submit", on_submit(Rc::clone(&controller)));
        for id in blur_ids {
            match document.get_element_by_id(id) {
                Some(field) => listen(&field, "blur", on_blur(Rc::clone(&controller), id)),
                None => tracing::warn!("#{} not found; skipping blur check", id),
            }
        }

        tracing::debug!("Wired #{}", controller.spec().id);
        wired += 1;
    }
    wired
}
