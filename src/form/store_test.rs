use super::*;

fn login_state() -> FormState {
    FormState::new(["email", "password"])
}

#[test]
fn new_state_has_every_field_empty_and_idle() {
    let state = login_state();
    assert_eq!(state.values().len(), 2);
    assert!(state.values().iter().all(|(_, value)| value.is_empty()));
    assert!(state.errors().is_empty());
    assert_eq!(state.phase(), Phase::Idle);
    assert!(!state.is_submitting());
}

#[test]
fn set_field_overwrites_value() {
    let mut state = login_state();
    state.set_field("email", "a@b.com").unwrap();
    state.set_field("email", "c@d.com").unwrap();
    assert_eq!(state.value("email"), Some("c@d.com"));
    assert_eq!(state.value("password"), Some(""));
}

#[test]
fn set_field_rejects_undeclared_name() {
    let mut state = login_state();
    assert_eq!(state.set_field("username", "x"), Err(FormError::UnknownField("username".to_owned())));
    assert_eq!(state.values().len(), 2);
}

#[test]
fn editing_a_field_clears_only_that_error() {
    let mut state = login_state();
    let mut errors = ErrorMap::new();
    errors.insert("email", "Email is required".to_owned());
    errors.insert("password", "Password is required".to_owned());
    errors.insert(SUBMIT_KEY, "Login failed. Please try again.".to_owned());
    state.replace_errors(errors);

    state.set_field("email", "a").unwrap();

    assert_eq!(state.error("email"), None);
    assert_eq!(state.error("password"), Some("Password is required"));
    assert_eq!(state.submit_error(), Some("Login failed. Please try again."));
}

#[test]
fn editing_a_field_without_error_leaves_errors_alone() {
    let mut state = login_state();
    let mut errors = ErrorMap::new();
    errors.insert("password", "Password is required".to_owned());
    state.replace_errors(errors.clone());

    state.set_field("email", "a").unwrap();
    assert_eq!(state.errors(), &errors);
}

#[test]
fn phase_submitting_flags() {
    assert!(Phase::Validating.is_submitting());
    assert!(Phase::Submitting.is_submitting());
    for phase in [Phase::Idle, Phase::ValidationFailed, Phase::Success, Phase::SubmitFailed] {
        assert!(!phase.is_submitting(), "{phase:?}");
    }
    assert!(Phase::Success.is_terminal());
    assert!(!Phase::Idle.is_terminal());
}

#[test]
fn submit_error_helpers() {
    let mut state = login_state();
    state.set_submit_error("boom");
    assert_eq!(state.submit_error(), Some("boom"));
    state.clear_submit_error();
    assert_eq!(state.submit_error(), None);
    state.set_submit_error("boom");
    state.clear_errors();
    assert!(state.errors().is_empty());
}
