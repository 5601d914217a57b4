//! Field store: current values, per-field errors and submission phase.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `FormState` exists per mounted form. Editing a field drops that
//! field's error immediately so stale messages never outlive the input
//! that caused them.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;

/// Reserved error key for the generic, non-field submission error.
pub const SUBMIT_KEY: &str = "submit";

/// Field name (or [`SUBMIT_KEY`]) to human-readable message.
pub type ErrorMap = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("inputs are disabled while a submission is in flight")]
    Locked,
}

// =============================================================================
// PHASE
// =============================================================================

/// Submission state machine position.
///
/// `Validating` and `Submitting` are the only phases where the form counts as
/// submitting. The three terminal phases stay visible until the next submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    ValidationFailed,
    Submitting,
    Success,
    SubmitFailed,
}

impl Phase {
    #[must_use]
    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Validating | Self::Submitting)
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::ValidationFailed | Self::Success | Self::SubmitFailed)
    }
}

// =============================================================================
// FIELD VALUES
// =============================================================================

/// Values for a fixed, ordered set of declared fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues {
    slots: Vec<(&'static str, String)>,
}

impl FieldValues {
    /// All declared fields, initialized to the empty string.
    pub fn empty(names: impl IntoIterator<Item = &'static str>) -> Self {
        Self { slots: names.into_iter().map(|name| (name, String::new())).collect() }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Overwrite a declared field, returning its canonical name.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] if `name` was not declared.
    pub fn set(&mut self, name: &str, value: String) -> Result<&'static str, FormError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|(key, _)| *key == name)
            .ok_or_else(|| FormError::UnknownField(name.to_owned()))?;
        slot.1 = value;
        Ok(slot.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.slots.iter().map(|(key, value)| (*key, value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

// =============================================================================
// FORM STATE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    values: FieldValues,
    errors: ErrorMap,
    phase: Phase,
}

impl FormState {
    /// Fresh state: every field empty, no errors, idle.
    pub fn new(names: impl IntoIterator<Item = &'static str>) -> Self {
        Self { values: FieldValues::empty(names), errors: ErrorMap::new(), phase: Phase::Idle }
    }

    #[must_use]
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name)
    }

    /// Overwrite `name` and clear any error currently shown for it.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] if `name` is not part of the form.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let key = self.values.set(name, value.into())?;
        if self.errors.remove(key).is_some() {
            tracing::debug!(field = key, "cleared field error on edit");
        }
        Ok(())
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    #[must_use]
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn submit_error(&self) -> Option<&str> {
        self.error(SUBMIT_KEY)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase.is_submitting()
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        tracing::debug!(from = ?self.phase, to = ?phase, "form phase");
        self.phase = phase;
    }

    pub(crate) fn replace_errors(&mut self, errors: ErrorMap) {
        self.errors = errors;
    }

    pub(crate) fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub(crate) fn clear_submit_error(&mut self) {
        self.errors.remove(SUBMIT_KEY);
    }

    pub(crate) fn set_submit_error(&mut self, message: &str) {
        self.errors.insert(SUBMIT_KEY, message.to_owned());
    }
}
