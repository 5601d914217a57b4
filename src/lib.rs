//! Credential forms for the Custom Auth web app.
//!
//! DESIGN
//! ======
//! Sign-in and sign-up are two instances of one [`form::CredentialForm`],
//! parameterized by a static [`form::FormSpec`]. The form owns its field
//! values, per-field errors and submission phase; everything outside it
//! (HTTP transport, navigation, theme storage) is injected behind a trait.

pub mod config;
pub mod form;
pub mod landing;
pub mod nav;
pub mod net;
pub mod routes;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::{AuthApiConfig, ConfigError};
pub use form::{CredentialForm, FormError, Phase, SubmitOutcome};
pub use nav::Navigator;
pub use net::{AuthTransport, Endpoint, HttpTransport, TransportError, TransportResponse};
