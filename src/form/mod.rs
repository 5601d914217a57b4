//! Credential form controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` holds field values and errors, `rules` turns a static schema into
//! per-field messages, and `coordinator` drives validate -> transport ->
//! result handling. `sign_in` and `sign_up` hold the two concrete `FormSpec`s.

pub mod coordinator;
pub mod rules;
pub mod sign_in;
pub mod sign_up;
pub mod store;

pub use coordinator::{
    Attempt, CredentialForm, FormSpec, PendingSubmission, Settled, SubmitLabels, SubmitOutcome, SuccessRule,
};
pub use rules::{FieldSpec, Rule, Schema, ValidatedData};
pub use store::{ErrorMap, FieldValues, FormError, FormState, Phase, SUBMIT_KEY};
