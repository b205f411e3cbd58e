//! In-memory page for driving forms without a browser

use crate::error::UiError;
use crate::forms::FormSpec;
use crate::rules::FieldKind;
use crate::submission::Timer;
use crate::ui::{Scheduler, Target, UiPort};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

/// Label given to scaffolded submit buttons
pub const DEFAULT_SUBMIT_LABEL: &str = "Submit";

/// Everything the in-memory page tracks about one element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub value: String,
    pub checked: bool,
    pub text: String,
    pub visible: bool,
    pub disabled: bool,
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    /// Owning form, for `reset_form`
    pub form: Option<String>,
    pub scroll_count: u32,
}

/// In-memory [`UiPort`]
///
/// Elements are keyed by id; a form's submit button is keyed separately so
/// `Target::SubmitOf` resolves without a selector engine.
#[derive(Debug, Default)]
pub struct MemoryUi {
    elements: RefCell<BTreeMap<String, ElementState>>,
}

fn key(target: Target<'_>) -> String {
    match target {
        Target::Id(id) => id.to_string(),
        Target::SubmitOf(form) => format!("{form}::submit"),
    }
}

impl MemoryUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page containing `spec`'s form, fields, error regions, status region
    /// and submit button
    pub fn for_form(spec: &FormSpec) -> Self {
        let ui = Self::new();
        ui.add_form(spec);
        ui
    }

    pub fn add_form(&self, spec: &FormSpec) {
        let owned = |form: &str| ElementState {
            visible: true,
            form: Some(form.to_string()),
            ..ElementState::default()
        };

        self.insert(Target::Id(spec.id), ElementState {
            visible: true,
            ..ElementState::default()
        });
        for field in &spec.fields {
            self.insert(Target::Id(field.id), owned(spec.id));
            self.insert(
                Target::Id(&format!("{}-error", field.id)),
                ElementState::default(),
            );
        }
        self.insert(Target::Id(spec.status_region), ElementState::default());
        self.insert(Target::SubmitOf(spec.id), ElementState {
            text: DEFAULT_SUBMIT_LABEL.to_string(),
            ..owned(spec.id)
        });
    }

    pub fn insert(&self, target: Target<'_>, state: ElementState) {
        self.elements.borrow_mut().insert(key(target), state);
    }

    pub fn remove(&self, target: Target<'_>) -> Option<ElementState> {
        self.elements.borrow_mut().remove(&key(target))
    }

    pub fn element(&self, target: Target<'_>) -> Option<ElementState> {
        self.elements.borrow().get(&key(target)).cloned()
    }

    /// Copy of the whole page, for before/after comparisons
    pub fn snapshot(&self) -> BTreeMap<String, ElementState> {
        self.elements.borrow().clone()
    }

    /// Type into a field, as a user would
    pub fn set_value(&self, id: &str, value: &str) -> Result<(), UiError> {
        self.with_element(Target::Id(id), |el| el.value = value.to_string())
    }

    pub fn set_checked(&self, id: &str, checked: bool) -> Result<(), UiError> {
        self.with_element(Target::Id(id), |el| el.checked = checked)
    }

    /// Fill a form's fields from `(id, value)` pairs; checkbox values are
    /// ticked when non-empty
    pub fn fill(&self, spec: &FormSpec, values: &[(&str, &str)]) -> Result<(), UiError> {
        for (id, value) in values {
            match spec.field(id).map(|rule| rule.kind) {
                Some(FieldKind::Checkbox) => self.set_checked(id, !value.is_empty())?,
                _ => self.set_value(id, value)?,
            }
        }
        Ok(())
    }

    fn with_element<R>(
        &self,
        target: Target<'_>,
        f: impl FnOnce(&mut ElementState) -> R,
    ) -> Result<R, UiError> {
        let mut elements = self.elements.borrow_mut();
        let element = elements
            .get_mut(&key(target))
            .ok_or_else(|| UiError::MissingElement(target.to_string()))?;
        Ok(f(element))
    }
}

impl UiPort for MemoryUi {
    fn exists(&self, target: Target<'_>) -> bool {
        self.elements.borrow().contains_key(&key(target))
    }

    fn value(&self, target: Target<'_>) -> Result<String, UiError> {
        self.with_element(target, |el| el.value.clone())
    }

    fn is_checked(&self, target: Target<'_>) -> Result<bool, UiError> {
        self.with_element(target, |el| el.checked)
    }

    fn text(&self, target: Target<'_>) -> Result<String, UiError> {
        self.with_element(target, |el| el.text.clone())
    }

    fn set_text(&self, target: Target<'_>, text: &str) -> Result<(), UiError> {
        self.with_element(target, |el| el.text = text.to_string())
    }

    fn is_visible(&self, target: Target<'_>) -> Result<bool, UiError> {
        self.with_element(target, |el| el.visible)
    }

    fn set_visible(&self, target: Target<'_>, visible: bool) -> Result<(), UiError> {
        self.with_element(target, |el| el.visible = visible)
    }

    fn attribute(&self, target: Target<'_>, name: &str) -> Result<Option<String>, UiError> {
        self.with_element(target, |el| el.attributes.get(name).cloned())
    }

    fn set_attribute(&self, target: Target<'_>, name: &str, value: &str) -> Result<(), UiError> {
        self.with_element(target, |el| {
            el.attributes.insert(name.to_string(), value.to_string());
        })
    }

    fn remove_attribute(&self, target: Target<'_>, name: &str) -> Result<(), UiError> {
        self.with_element(target, |el| {
            el.attributes.remove(name);
        })
    }

    fn has_class(&self, target: Target<'_>, class: &str) -> Result<bool, UiError> {
        self.with_element(target, |el| el.classes.contains(class))
    }

    fn add_class(&self, target: Target<'_>, class: &str) -> Result<(), UiError> {
        self.with_element(target, |el| {
            el.classes.insert(class.to_string());
        })
    }

    fn remove_class(&self, target: Target<'_>, class: &str) -> Result<(), UiError> {
        self.with_element(target, |el| {
            el.classes.remove(class);
        })
    }

    fn set_class_name(&self, target: Target<'_>, class_name: &str) -> Result<(), UiError> {
        self.with_element(target, |el| {
            el.classes = class_name.split_whitespace().map(str::to_string).collect();
        })
    }

    fn is_disabled(&self, target: Target<'_>) -> Result<bool, UiError> {
        self.with_element(target, |el| el.disabled)
    }

    fn set_disabled(&self, target: Target<'_>, disabled: bool) -> Result<(), UiError> {
        self.with_element(target, |el| el.disabled = disabled)
    }

    fn reset_form(&self, form_id: &str) -> Result<(), UiError> {
        let mut elements = self.elements.borrow_mut();
        if !elements.contains_key(form_id) {
            return Err(UiError::MissingElement(Target::Id(form_id).to_string()));
        }

        for element in elements
            .values_mut()
            .filter(|el| el.form.as_deref() == Some(form_id))
        {
            element.value.clear();
            element.checked = false;
        }
        Ok(())
    }

    fn scroll_into_view(&self, target: Target<'_>) -> Result<(), UiError> {
        self.with_element(target, |el| el.scroll_count += 1)
    }
}

/// [`Scheduler`] that holds tasks until told to run them
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays of the tasks still waiting
    pub fn pending(&self) -> Vec<Duration> {
        self.queue.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    /// Fire everything queued so far; returns how many ran
    pub fn run_all(&self) -> usize {
        let tasks = std::mem::take(&mut *self.queue.borrow_mut());
        let count = tasks.len();
        for (_, task) in tasks {
            task();
        }
        count
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push((delay, task));
    }
}

/// [`Timer`] that returns at once and remembers what it was asked to wait
#[derive(Debug, Default)]
pub struct RecordingTimer {
    sleeps: RefCell<Vec<Duration>>,
}

impl RecordingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Timer for RecordingTimer {
    async fn sleep(&self, delay: Duration) {
        self.sleeps.borrow_mut().push(delay);
    }
}
