//! Scripted collaborators for unit tests.

use std::sync::{Mutex, PoisonError};

use crate::form::ValidatedData;
use crate::nav::Navigator;
use crate::net::{AuthTransport, Endpoint, TransportError, TransportResponse};

// =========================================================================
// MockTransport
// =========================================================================

/// Replays scripted results in order and records every request.
pub struct MockTransport {
    responses: Mutex<Vec<Result<TransportResponse, TransportError>>>,
    calls: Mutex<Vec<(Endpoint, serde_json::Value)>>,
}

impl MockTransport {
    pub fn new(responses: Vec<Result<TransportResponse, TransportError>>) -> Self {
        Self { responses: Mutex::new(responses), calls: Mutex::new(Vec::new()) }
    }

    /// Resolves once with `status` and a small JSON payload.
    pub fn status(status: u16) -> Self {
        Self::new(vec![Ok(TransportResponse { status, data: serde_json::json!({ "ok": true }) })])
    }

    /// Rejects once as if the network were down.
    pub fn unreachable() -> Self {
        Self::new(vec![Err(TransportError::Request("connection refused".to_owned()))])
    }

    pub fn calls(&self) -> Vec<(Endpoint, serde_json::Value)> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait::async_trait]
impl AuthTransport for MockTransport {
    async fn post(&self, endpoint: Endpoint, body: &ValidatedData) -> Result<TransportResponse, TransportError> {
        let body = serde_json::to_value(body).map_err(|e| TransportError::Decode(e.to_string()))?;
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((endpoint, body));
        let mut responses = self.responses.lock().unwrap_or_else(PoisonError::into_inner);
        if responses.is_empty() {
            Err(TransportError::Request("no scripted response".to_owned()))
        } else {
            responses.remove(0)
        }
    }
}

/// Never settles; the request stays in flight until the caller gives up.
pub struct StalledTransport;

#[async_trait::async_trait]
impl AuthTransport for StalledTransport {
    async fn post(&self, _endpoint: Endpoint, _body: &ValidatedData) -> Result<TransportResponse, TransportError> {
        std::future::pending().await
    }
}

// =========================================================================
// RecordingNavigator
// =========================================================================

#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_owned());
    }
}
