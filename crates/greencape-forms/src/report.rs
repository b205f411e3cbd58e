// File: src/report.rs
// Purpose: Submit-time evaluation of a whole form

use crate::forms::FormSpec;
use crate::rules::{FieldValue, Verdict};

/// Field values read from the page, in rule order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    entries: Vec<(&'static str, FieldValue)>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &'static str, value: FieldValue) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: &'static str, value: FieldValue) {
        match self.entries.iter_mut().find(|(id, _)| *id == field) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((field, value)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(id, _)| *id == field)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.entries.iter().map(|(id, value)| (*id, value))
    }
}

/// Verdict for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOutcome {
    pub field: &'static str,
    pub verdict: Verdict,
}

/// Result of validation across a form
///
/// Outcomes keep the rule order so errors are painted top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    outcomes: Vec<FieldOutcome>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|o| o.verdict.is_valid())
    }

    pub fn outcomes(&self) -> &[FieldOutcome] {
        &self.outcomes
    }

    /// Outcomes that carry an error message
    pub fn failures(&self) -> impl Iterator<Item = &FieldOutcome> {
        self.outcomes.iter().filter(|o| !o.verdict.is_valid())
    }

    pub fn verdict(&self, field: &str) -> Option<Verdict> {
        self.outcomes
            .iter()
            .find(|o| o.field == field)
            .map(|o| o.verdict)
    }

    /// Error message for a specific field
    pub fn get_error(&self, field: &str) -> Option<&'static str> {
        self.verdict(field).and_then(|v| v.message())
    }
}

/// Run every rule of `spec` against `values`
///
/// A field with no value is judged as empty text, which fails any required
/// rule rather than slipping through.
pub fn evaluate(spec: &FormSpec, values: &FormValues) -> ValidationReport {
    let empty = FieldValue::Text(String::new());
    let outcomes = spec
        .fields
        .iter()
        .map(|rule| FieldOutcome {
            field: rule.id,
            verdict: rule.evaluate(values.get(rule.id).unwrap_or(&empty)),
        })
        .collect();

    ValidationReport { outcomes }
}
