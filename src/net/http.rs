//! HTTP transport over `reqwest`.
//!
//! Posts the validated field map as JSON to `{base_url}{endpoint path}`.
//! 2xx responses resolve; every other status rejects with the body kept
//! for diagnostics. No timeout is applied unless the config sets one.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use super::transport::{AuthTransport, Endpoint, TransportError, TransportResponse};
use crate::config::AuthApiConfig;
use crate::form::ValidatedData;

pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::ClientBuild`] if the HTTP client cannot be constructed.
    pub fn new(config: &AuthApiConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[async_trait::async_trait]
impl AuthTransport for HttpTransport {
    async fn post(&self, endpoint: Endpoint, body: &ValidatedData) -> Result<TransportResponse, TransportError> {
        let url = self.url(endpoint);
        tracing::debug!(%url, "posting credentials");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(TransportError::Status { status, body: text });
        }

        Ok(TransportResponse { status, data: parse_body(&text) })
    }
}

/// JSON payload of a response body: `null` when empty, the raw text as a
/// JSON string when it is not JSON.
fn parse_body(text: &str) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_owned()))
}
