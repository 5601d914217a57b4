//! Transport seam between the forms and the auth backend.
//!
//! DESIGN
//! ======
//! The backend is opaque: a transport posts a JSON body to one of two
//! endpoints and either resolves with a status + payload or rejects.
//! Tests swap in scripted transports the same way the HTTP one is used.

use crate::form::ValidatedData;
use crate::routes;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response (connect, TLS, timeout...).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a status the transport treats as a rejection.
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    #[error("response body could not be read: {0}")]
    Decode(String),

    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    SignIn,
    SignUp,
}

impl Endpoint {
    /// API path relative to the configured base URL.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::SignIn => routes::API_SIGN_IN,
            Self::SignUp => routes::API_SIGN_UP,
        }
    }
}

/// A response the transport resolved with.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub data: serde_json::Value,
}

/// Posts validated form data to the auth backend.
#[async_trait::async_trait]
pub trait AuthTransport: Send + Sync {
    /// Send `body` as JSON to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response arrives or the response
    /// counts as a rejection.
    async fn post(&self, endpoint: Endpoint, body: &ValidatedData) -> Result<TransportResponse, TransportError>;
}
