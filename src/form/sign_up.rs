//! Sign-up form: profile + credentials, any resolved response counts as success.
//!
//! Success does not navigate anywhere; the form only leaves the submitting
//! state. Whether it should redirect like sign-in is an open product question.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use super::coordinator::{CredentialForm, FormSpec, SubmitLabels, SuccessRule};
use super::rules::{FieldSpec, Rule, Schema};
use crate::net::Endpoint;
use crate::routes;

pub const SIGN_UP_FAILED: &str = "Failed to create account. Please try again.";

pub static SIGN_UP: FormSpec = FormSpec {
    name: "sign-up",
    schema: Schema {
        fields: &[
            FieldSpec {
                name: "first_name",
                trim: true,
                rules: &[Rule::Required("First name is required"), Rule::MaxChars(50, "First name is too long")],
            },
            FieldSpec {
                name: "last_name",
                trim: true,
                rules: &[Rule::Required("Last name is required"), Rule::MaxChars(50, "Last name is too long")],
            },
            FieldSpec {
                name: "user_name",
                trim: true,
                rules: &[
                    Rule::MinChars(3, "Username must be at least 3 characters"),
                    Rule::MaxChars(30, "Username is too long"),
                    Rule::WordChars("Username can only contain letters, numbers, and underscores"),
                ],
            },
            FieldSpec {
                name: "email",
                trim: true,
                rules: &[Rule::Email("Please enter a valid email address"), Rule::MaxChars(255, "Email is too long")],
            },
            FieldSpec {
                name: "password",
                trim: false,
                rules: &[
                    Rule::MinChars(6, "Password must be at least 6 characters"),
                    Rule::MaxChars(128, "Password is too long"),
                    Rule::MixedCaseAndDigit(
                        "Password must contain at least one uppercase letter, one lowercase letter, and one number",
                    ),
                ],
            },
        ],
    },
    endpoint: Endpoint::SignUp,
    success: SuccessRule::AnyResponse,
    failure_message: SIGN_UP_FAILED,
    redirect_on_success: None,
    reset_errors_on_submit: true,
    lock_inputs_while_submitting: false,
    labels: SubmitLabels { idle: "Sign up", busy: "Creating account..." },
    alternate_route: routes::SIGN_IN_PAGE,
};

impl CredentialForm {
    #[must_use]
    pub fn sign_up() -> Self {
        Self::new(&SIGN_UP)
    }
}
