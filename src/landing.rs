//! Landing page call to action.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use crate::routes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
}

/// The single "Get Started" button, pointing at the sign-in page.
pub const GET_STARTED: CallToAction = CallToAction { label: "Get Started", href: routes::SIGN_IN_PAGE };
