use super::*;

fn user() -> SessionUser {
    SessionUser {
        id: "g-108234".to_owned(),
        email: "ana@uc.cl".to_owned(),
        name: "Ana".to_owned(),
        picture: None,
    }
}

#[test]
fn default_starts_loading_without_user() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn user_id_reads_through_to_session_user() {
    let state = SessionState { user: Some(user()), loading: false };
    assert_eq!(state.user_id(), Some("g-108234"));
}

#[test]
fn user_id_is_none_when_signed_out() {
    let state = SessionState { user: None, loading: false };
    assert!(state.user_id().is_none());
}
