use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_requires_base_url() {
    assert_eq!(AuthApiConfig::from_lookup(lookup(&[])), Err(ConfigError::MissingBaseUrl));
    assert_eq!(AuthApiConfig::from_lookup(lookup(&[(BASE_URL_VAR, "   ")])), Err(ConfigError::MissingBaseUrl));
}

#[test]
fn from_lookup_defaults_to_no_timeout() {
    let cfg = AuthApiConfig::from_lookup(lookup(&[(BASE_URL_VAR, "http://localhost:8000")])).unwrap();
    assert_eq!(cfg.base_url, "http://localhost:8000");
    assert_eq!(cfg.request_timeout_secs, None);
}

#[test]
fn from_lookup_trims_trailing_slashes_and_parses_timeout() {
    let cfg = AuthApiConfig::from_lookup(lookup(&[
        (BASE_URL_VAR, " https://api.example.test/v1// "),
        (REQUEST_TIMEOUT_VAR, "30"),
    ]))
    .unwrap();
    assert_eq!(cfg.base_url, "https://api.example.test/v1");
    assert_eq!(cfg.request_timeout_secs, Some(30));
}

#[test]
fn from_lookup_blank_timeout_is_absent() {
    let cfg =
        AuthApiConfig::from_lookup(lookup(&[(BASE_URL_VAR, "http://x.test"), (REQUEST_TIMEOUT_VAR, "")])).unwrap();
    assert_eq!(cfg.request_timeout_secs, None);
}

#[test]
fn from_lookup_rejects_bad_timeout() {
    for raw in ["soon", "-1", "0"] {
        let err = AuthApiConfig::from_lookup(lookup(&[(BASE_URL_VAR, "http://x.test"), (REQUEST_TIMEOUT_VAR, raw)]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeout { var: REQUEST_TIMEOUT_VAR, value: raw.to_owned() });
    }
}

#[test]
fn new_rejects_urls_without_http_scheme_or_host() {
    for raw in ["localhost:3000", "ftp://x.test", "http://", "https:///path"] {
        let err = AuthApiConfig::new(raw, None).unwrap_err();
        assert!(err.to_string().contains("invalid base URL"), "{raw}: {err}");
    }
}

#[test]
fn new_rejects_zero_timeout() {
    assert!(matches!(AuthApiConfig::new("http://x.test", Some(0)), Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn from_env_reads_process_environment() {
    // Only this test touches these variables.
    unsafe {
        std::env::set_var(BASE_URL_VAR, "http://env.test/");
        std::env::remove_var(REQUEST_TIMEOUT_VAR);
    }
    let cfg = AuthApiConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "http://env.test");
    unsafe { std::env::remove_var(BASE_URL_VAR) };
}

#[test]
fn env_value_distinguishes_unset_from_set() {
    assert_eq!(env_value(Err(VarError::NotPresent), ConfigError::InvalidBaseUrl), Ok(None));
    assert_eq!(
        env_value(Ok("http://x".to_owned()), ConfigError::InvalidBaseUrl),
        Ok(Some("http://x".to_owned()))
    );
}

#[cfg(unix)]
#[test]
fn env_value_reports_non_utf8_instead_of_missing() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let raw = OsString::from_vec(b"http://bad\xff".to_vec());
    assert_eq!(
        env_value(Err(VarError::NotUnicode(raw)), ConfigError::InvalidBaseUrl),
        Err(ConfigError::InvalidBaseUrl("http://bad\u{fffd}".to_owned()))
    );
}
