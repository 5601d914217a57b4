//! Sign-in form: email + password, status-gated success, redirect to the dashboard.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use super::coordinator::{CredentialForm, FormSpec, SubmitLabels, SuccessRule};
use super::rules::{FieldSpec, Rule, Schema};
use crate::net::Endpoint;
use crate::routes;

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";

pub static SIGN_IN: FormSpec = FormSpec {
    name: "sign-in",
    schema: Schema {
        fields: &[
            FieldSpec {
                name: "email",
                trim: true,
                rules: &[
                    Rule::Required("Email is required"),
                    Rule::Email("Please enter a valid email address"),
                    Rule::MaxChars(255, "Email is too long"),
                ],
            },
            FieldSpec {
                name: "password",
                trim: false,
                rules: &[Rule::Required("Password is required"), Rule::MaxChars(128, "Password is too long")],
            },
        ],
    },
    endpoint: Endpoint::SignIn,
    success: SuccessRule::StatusIn(&[200, 201]),
    failure_message: LOGIN_FAILED,
    redirect_on_success: Some(routes::DASHBOARD),
    reset_errors_on_submit: false,
    lock_inputs_while_submitting: true,
    labels: SubmitLabels { idle: "Login", busy: "Logging in..." },
    alternate_route: routes::SIGN_UP_PAGE,
};

impl CredentialForm {
    #[must_use]
    pub fn sign_in() -> Self {
        Self::new(&SIGN_IN)
    }
}
