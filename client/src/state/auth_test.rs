use super::*;

#[test]
fn loading_state_has_no_user() {
    let state = AuthState::loading();
    assert!(state.is_loading());
    assert_eq!(state.username(), None);
    assert!(!state.show_register);
}

#[test]
fn default_is_signed_out() {
    let state = AuthState::default();
    assert!(!state.is_loading());
    assert_eq!(state.session, SessionState::Unauthenticated);
}

#[test]
fn settle_authenticated_exposes_username() {
    let mut state = AuthState::loading();
    state.settle(SessionState::authenticated("alice"));
    assert_eq!(state.username(), Some("alice"));
    assert!(!state.is_loading());
}

#[test]
fn settle_signed_out_resets_register_toggle() {
    let mut state = AuthState { session: SessionState::authenticated("alice"), show_register: true };
    state.settle(SessionState::Unauthenticated);
    assert!(!state.show_register);
    assert_eq!(state.username(), None);
}
