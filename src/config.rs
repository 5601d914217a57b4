//! Backend API configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::VarError;

pub const BASE_URL_VAR: &str = "AUTH_BASE_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "AUTH_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing base URL: env var AUTH_BASE_URL not set")]
    MissingBaseUrl,
    #[error("invalid base URL '{0}' (expected http:// or https://)")]
    InvalidBaseUrl(String),
    #[error("invalid {var} '{value}' (expected a positive number of seconds)")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthApiConfig {
    /// Scheme + host (+ optional prefix), without a trailing slash.
    pub base_url: String,
    /// Client-side request timeout. `None` waits for the transport indefinitely.
    pub request_timeout_secs: Option<u64>,
}

impl AuthApiConfig {
    /// # Errors
    ///
    /// Returns an error for a base URL without an http(s) scheme and host, or a zero timeout.
    pub fn new(base_url: &str, request_timeout_secs: Option<u64>) -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(base_url)?;
        if request_timeout_secs == Some(0) {
            return Err(ConfigError::InvalidTimeout { var: REQUEST_TIMEOUT_VAR, value: "0".to_owned() });
        }
        Ok(Self { base_url, request_timeout_secs })
    }

    /// Build config from environment variables.
    ///
    /// Required:
    /// - `AUTH_BASE_URL`: backend origin, e.g. `https://api.example.com`
    ///
    /// Optional:
    /// - `AUTH_REQUEST_TIMEOUT_SECS`: no timeout when absent
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is missing or malformed, or the timeout does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_value(std::env::var(BASE_URL_VAR), ConfigError::InvalidBaseUrl)?;
        let timeout = env_value(std::env::var(REQUEST_TIMEOUT_VAR), |value| ConfigError::InvalidTimeout {
            var: REQUEST_TIMEOUT_VAR,
            value,
        })?;
        Self::from_lookup(|key| match key {
            BASE_URL_VAR => base_url.clone(),
            REQUEST_TIMEOUT_VAR => timeout.clone(),
            _ => None,
        })
    }

    /// Same as [`AuthApiConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`AuthApiConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;
        let timeout = match lookup(REQUEST_TIMEOUT_VAR) {
            Some(raw) if !raw.trim().is_empty() => Some(parse_timeout(&raw)?),
            _ => None,
        };
        Self::new(&base_url, timeout)
    }
}

/// An unset variable is `None`; a non-UTF-8 one is reported through `invalid`.
fn env_value<F>(var: Result<String, VarError>, invalid: F) -> Result<Option<String>, ConfigError>
where
    F: FnOnce(String) -> ConfigError,
{
    match var {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(invalid(raw.to_string_lossy().into_owned())),
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match host {
        Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(trimmed.to_owned()),
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_owned())),
    }
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidTimeout { var: REQUEST_TIMEOUT_VAR, value: raw.to_owned() }),
    }
}
