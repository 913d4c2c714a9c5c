use super::*;

// =============================================================
// Estado string mapping
// =============================================================

#[test]
fn from_estado_parses_all_server_states() {
    assert_eq!(FriendshipStatus::from_estado("ninguno"), Some(FriendshipStatus::None));
    assert_eq!(
        FriendshipStatus::from_estado("solicitud_enviada"),
        Some(FriendshipStatus::RequestSent)
    );
    assert_eq!(
        FriendshipStatus::from_estado("solicitud_recibida"),
        Some(FriendshipStatus::RequestReceived)
    );
    assert_eq!(FriendshipStatus::from_estado("amigos"), Some(FriendshipStatus::Friends));
}

#[test]
fn from_estado_rejects_unknown_strings() {
    assert_eq!(FriendshipStatus::from_estado("pendiente"), None);
    assert_eq!(FriendshipStatus::from_estado(""), None);
    assert_eq!(FriendshipStatus::from_estado("Amigos"), None);
}

#[test]
fn as_estado_round_trips_every_state() {
    for status in [
        FriendshipStatus::None,
        FriendshipStatus::RequestSent,
        FriendshipStatus::RequestReceived,
        FriendshipStatus::Friends,
    ] {
        assert_eq!(FriendshipStatus::from_estado(status.as_estado()), Some(status));
    }
}

// =============================================================
// Action button table
// =============================================================

#[test]
fn action_labels_follow_current_state() {
    assert_eq!(FriendshipStatus::None.action_label(), "🤝 Enviar solicitud");
    assert_eq!(FriendshipStatus::RequestSent.action_label(), "❌ Cancelar solicitud");
    assert_eq!(FriendshipStatus::RequestReceived.action_label(), "✅ Aceptar solicitud");
    assert_eq!(FriendshipStatus::Friends.action_label(), "✅ Son amigos");
}

#[test]
fn action_disabled_only_when_already_friends() {
    assert!(FriendshipStatus::None.action_enabled());
    assert!(FriendshipStatus::RequestSent.action_enabled());
    assert!(FriendshipStatus::RequestReceived.action_enabled());
    assert!(!FriendshipStatus::Friends.action_enabled());
}

// =============================================================
// Optimistic transitions
// =============================================================

#[test]
fn sending_a_request_assumes_pending_state() {
    assert_eq!(FriendshipStatus::None.after_action(), FriendshipStatus::RequestSent);
}

#[test]
fn cancelling_a_request_assumes_no_relationship() {
    assert_eq!(FriendshipStatus::RequestSent.after_action(), FriendshipStatus::None);
}

#[test]
fn accepting_a_request_assumes_friendship() {
    assert_eq!(FriendshipStatus::RequestReceived.after_action(), FriendshipStatus::Friends);
}

#[test]
fn friends_state_is_terminal_for_the_button() {
    assert_eq!(FriendshipStatus::Friends.after_action(), FriendshipStatus::Friends);
}

// =============================================================
// Page state
// =============================================================

#[test]
fn friends_state_defaults_to_amigos_tab() {
    let state = FriendsState::default();
    assert_eq!(state.tab, FriendsTab::Amigos);
    assert!(state.amigos.is_empty());
    assert!(state.recibidas.is_empty());
    assert!(state.enviadas.is_empty());
}
