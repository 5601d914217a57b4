//! Page routes and backend API paths.

/// Landing page.
pub const HOME: &str = "/";
pub const SIGN_IN_PAGE: &str = "/auth/sign-in";
pub const SIGN_UP_PAGE: &str = "/auth/sign-up";
/// Post-auth destination after a successful sign-in.
pub const DASHBOARD: &str = "/dashboard";

pub const API_SIGN_IN: &str = "/api/auth/sign-in";
pub const API_SIGN_UP: &str = "/api/auth/sign-up";
