use super::*;
use crate::net::types::SessionUser;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = SessionState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = SessionState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = SessionState {
        user: Some(SessionUser {
            id: "g-1".to_owned(),
            email: "ana@uc.cl".to_owned(),
            name: "Ana".to_owned(),
            picture: None,
        }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}
