use super::*;

fn message(remitente: &str, mensaje: &str) -> FriendMessage {
    FriendMessage {
        remitente_id: remitente.to_owned(),
        destinatario_id: "g-2".to_owned(),
        mensaje: mensaje.to_owned(),
        fecha_envio: "2026-08-20T10:00:00".to_owned(),
    }
}

fn friend(google_id: &str) -> Friend {
    Friend {
        google_id: google_id.to_owned(),
        nombre: "Ana".to_owned(),
        foto_perfil: None,
    }
}

// =============================================================
// Poll diffing
// =============================================================

#[test]
fn apply_history_keeps_identical_list() {
    let mut state = FriendChatState::default();
    state.messages = vec![message("g-1", "hola")];

    let changed = state.apply_history(vec![message("g-1", "hola")]);

    assert!(!changed);
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn apply_history_swaps_when_a_message_arrives() {
    let mut state = FriendChatState::default();
    state.messages = vec![message("g-1", "hola")];

    let changed = state.apply_history(vec![message("g-1", "hola"), message("g-2", "qué tal")]);

    assert!(changed);
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn apply_history_swaps_when_content_differs_at_same_length() {
    let mut state = FriendChatState::default();
    state.messages = vec![message("g-1", "hola")];

    let changed = state.apply_history(vec![message("g-1", "chao")]);

    assert!(changed);
    assert_eq!(state.messages[0].mensaje, "chao");
}

// =============================================================
// Selection and ownership
// =============================================================

#[test]
fn selected_id_reads_the_open_conversation() {
    let mut state = FriendChatState::default();
    assert!(state.selected_id().is_none());

    state.selected = Some(friend("g-9"));
    assert_eq!(state.selected_id(), Some("g-9"));
}

#[test]
fn is_own_message_compares_sender_to_session_user() {
    let msg = message("g-1", "hola");
    assert!(is_own_message("g-1", &msg));
    assert!(!is_own_message("g-2", &msg));
}
