//! Submission coordinator: validate -> transport -> result handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! A submit runs in two steps so the submitting flag is observable while the
//! request is in flight:
//!
//! 1. [`CredentialForm::begin_submit`] validates and, when the data is clean,
//!    hands back a [`PendingSubmission`].
//! 2. [`PendingSubmission::send`] awaits the transport and yields a
//!    [`Settled`] result, which [`CredentialForm::finish`] applies.
//!
//! [`CredentialForm::submit`] chains both for callers that just await.
//! A pending submission that will never be finished goes back through
//! [`CredentialForm::abandon`]; a dropped `submit` future does the same on
//! its own.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures are logged and collapsed into the form's generic
//! `submit` message; the underlying error never reaches the form state.
//! Every exit path leaves the form out of the submitting phases.

#[cfg(test)]
#[path = "coordinator_test.rs"]
mod coordinator_test;

use super::rules::{Schema, ValidatedData};
use super::store::{FormError, FormState, Phase};
use crate::nav::Navigator;
use crate::net::{AuthTransport, Endpoint, TransportError, TransportResponse};

// =============================================================================
// FORM SPEC
// =============================================================================

/// Which resolved transport responses count as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessRule {
    /// Only these HTTP statuses succeed; anything else that resolves is a failure.
    StatusIn(&'static [u16]),
    /// Any response the transport resolves with succeeds.
    AnyResponse,
}

impl SuccessRule {
    #[must_use]
    pub fn accepts(self, status: u16) -> bool {
        match self {
            Self::StatusIn(statuses) => statuses.contains(&status),
            Self::AnyResponse => true,
        }
    }
}

/// Submit button captions for the idle and submitting states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitLabels {
    pub idle: &'static str,
    pub busy: &'static str,
}

/// Everything that distinguishes one credential form from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSpec {
    /// Short name used in logs.
    pub name: &'static str,
    pub schema: Schema,
    pub endpoint: Endpoint,
    pub success: SuccessRule,
    /// Generic message stored under the `submit` key when a submission fails.
    pub failure_message: &'static str,
    /// Navigation target after success, if any.
    pub redirect_on_success: Option<&'static str>,
    /// Drop every error at submit start rather than only the stale submit error.
    pub reset_errors_on_submit: bool,
    /// Refuse field edits while a submission is in flight.
    pub lock_inputs_while_submitting: bool,
    pub labels: SubmitLabels,
    /// Route of the companion form ("Sign up" from sign-in and vice versa).
    pub alternate_route: &'static str,
}

// =============================================================================
// SUBMISSION TYPES
// =============================================================================

/// Result of [`CredentialForm::begin_submit`].
#[derive(Debug)]
pub enum Attempt {
    /// A submission is already in flight; nothing changed.
    Busy,
    /// Validation failed; field errors are now on the form.
    Invalid,
    /// Validation passed; send the data to finish the attempt.
    Ready(PendingSubmission),
}

/// Validated data waiting to be posted.
#[derive(Debug)]
#[must_use = "a pending submission keeps the form submitting until it is sent and finished"]
pub struct PendingSubmission {
    endpoint: Endpoint,
    data: ValidatedData,
}

impl PendingSubmission {
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    #[must_use]
    pub fn data(&self) -> &ValidatedData {
        &self.data
    }

    /// Post the data through `transport` and wait for it to settle.
    pub async fn send<T>(self, transport: &T) -> Settled
    where
        T: AuthTransport + ?Sized,
    {
        let result = transport.post(self.endpoint, &self.data).await;
        Settled { result }
    }
}

/// A transport interaction that has resolved or rejected.
#[derive(Debug)]
#[must_use = "pass the settled result to CredentialForm::finish"]
pub struct Settled {
    result: Result<TransportResponse, TransportError>,
}

/// How a submit attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Re-entrant or stale call; the form was left untouched.
    Ignored,
    Invalid,
    Succeeded { redirect: Option<&'static str> },
    Failed,
}

// =============================================================================
// CREDENTIAL FORM
// =============================================================================

#[derive(Debug, Clone)]
pub struct CredentialForm {
    spec: &'static FormSpec,
    state: FormState,
}

impl CredentialForm {
    /// A freshly mounted form: all fields empty, no errors, idle.
    #[must_use]
    pub fn new(spec: &'static FormSpec) -> Self {
        Self { spec, state: FormState::new(spec.schema.field_names()) }
    }

    #[must_use]
    pub fn spec(&self) -> &'static FormSpec {
        self.spec
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    /// Whether field inputs currently accept edits.
    #[must_use]
    pub fn inputs_enabled(&self) -> bool {
        !(self.spec.lock_inputs_while_submitting && self.is_submitting())
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { self.spec.labels.busy } else { self.spec.labels.idle }
    }

    /// Record user input for `name`, clearing that field's error.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] for undeclared fields and
    /// [`FormError::Locked`] while a locking form is submitting.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        if !self.inputs_enabled() {
            return Err(FormError::Locked);
        }
        self.state.set_field(name, value)
    }

    /// Return a terminal phase to `Idle` once the caller has shown the result.
    pub fn acknowledge(&mut self) {
        if self.phase().is_terminal() {
            self.state.set_phase(Phase::Idle);
        }
    }

    /// Validate the current values and, if clean, start a submission.
    pub fn begin_submit(&mut self) -> Attempt {
        if self.is_submitting() {
            tracing::debug!(form = self.spec.name, "submit ignored: already submitting");
            return Attempt::Busy;
        }

        self.state.set_phase(Phase::Validating);
        if self.spec.reset_errors_on_submit {
            self.state.clear_errors();
        } else {
            self.state.clear_submit_error();
        }

        match self.spec.schema.validate(self.state.values()) {
            Err(errors) => {
                tracing::debug!(form = self.spec.name, fields = errors.len(), "validation failed");
                self.state.replace_errors(errors);
                self.state.set_phase(Phase::ValidationFailed);
                Attempt::Invalid
            }
            Ok(data) => {
                self.state.set_phase(Phase::Submitting);
                Attempt::Ready(PendingSubmission { endpoint: self.spec.endpoint, data })
            }
        }
    }

    /// Apply a settled transport result, navigating on success when configured.
    pub fn finish<N>(&mut self, settled: Settled, navigator: &N) -> SubmitOutcome
    where
        N: Navigator + ?Sized,
    {
        if self.phase() != Phase::Submitting {
            tracing::warn!(
                form = self.spec.name,
                phase = ?self.phase(),
                "settled result ignored: no submission in flight"
            );
            return SubmitOutcome::Ignored;
        }

        match settled.result {
            Ok(response) if self.spec.success.accepts(response.status) => {
                tracing::info!(
                    form = self.spec.name,
                    status = response.status,
                    data = %response.data,
                    "submission succeeded"
                );
                self.state.set_phase(Phase::Success);
                if let Some(path) = self.spec.redirect_on_success {
                    navigator.navigate(path);
                }
                SubmitOutcome::Succeeded { redirect: self.spec.redirect_on_success }
            }
            Ok(response) => {
                tracing::warn!(form = self.spec.name, status = response.status, "submission rejected by status");
                self.fail()
            }
            Err(e) => {
                tracing::warn!(form = self.spec.name, error = %e, "submission failed");
                self.fail()
            }
        }
    }

    /// Drop a submission that will not be sent or finished, returning the
    /// form to `Idle` without a submit error.
    pub fn abandon(&mut self, pending: PendingSubmission) {
        tracing::debug!(form = self.spec.name, endpoint = ?pending.endpoint, "submission abandoned");
        self.cancel_in_flight();
    }

    /// Run a whole submit: validate, post, apply the result.
    ///
    /// There is no built-in timeout. Dropping the returned future before it
    /// completes returns the form to `Idle`.
    pub async fn submit<T, N>(&mut self, transport: &T, navigator: &N) -> SubmitOutcome
    where
        T: AuthTransport + ?Sized,
        N: Navigator + ?Sized,
    {
        let pending = match self.begin_submit() {
            Attempt::Busy => return SubmitOutcome::Ignored,
            Attempt::Invalid => return SubmitOutcome::Invalid,
            Attempt::Ready(pending) => pending,
        };
        let mut in_flight = InFlight { form: self, done: false };
        let settled = pending.send(transport).await;
        let outcome = in_flight.form.finish(settled, navigator);
        in_flight.done = true;
        outcome
    }

    fn fail(&mut self) -> SubmitOutcome {
        self.state.set_submit_error(self.spec.failure_message);
        self.state.set_phase(Phase::SubmitFailed);
        SubmitOutcome::Failed
    }

    fn cancel_in_flight(&mut self) {
        if self.phase() == Phase::Submitting {
            self.state.set_phase(Phase::Idle);
        }
    }
}

/// Returns the form to `Idle` if a `submit` future is dropped mid-flight.
struct InFlight<'a> {
    form: &'a mut CredentialForm,
    done: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.done {
            tracing::debug!(form = self.form.spec.name, "submission dropped before settling");
            self.form.cancel_in_flight();
        }
    }
}
