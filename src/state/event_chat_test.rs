use super::*;

fn message(remitente: &str) -> EventMessage {
    EventMessage {
        evento_id: None,
        remitente_id: remitente.to_owned(),
        mensaje: "hola".to_owned(),
        fecha_envio: "2026-08-20T10:00:00".to_owned(),
    }
}

fn event(id: i64, tipo: &str) -> MyEvent {
    MyEvent {
        evento_id: id,
        nombre: format!("Evento {id}"),
        fecha_hora: "2026-09-04T19:30:00".to_owned(),
        descripcion: String::new(),
        tipo: tipo.to_owned(),
        lugar: "Cancha 1".to_owned(),
        latitud: 0.0,
        longitud: 0.0,
        precio: 0,
        inscritos: 1,
        max_participantes: 10,
    }
}

// =============================================================
// Sender name cache
// =============================================================

#[test]
fn cache_sender_then_lookup() {
    let mut state = EventChatState::default();
    assert!(state.sender_name("g-1").is_none());

    state.cache_sender("g-1", "Ana");
    assert_eq!(state.sender_name("g-1"), Some("Ana"));
}

#[test]
fn unresolved_senders_deduplicates_and_skips_own_messages() {
    let mut state = EventChatState::default();
    state.messages = vec![message("g-1"), message("g-2"), message("g-1"), message("me")];

    let pending = state.unresolved_senders("me");
    assert_eq!(pending, vec!["g-1".to_owned(), "g-2".to_owned()]);
}

#[test]
fn unresolved_senders_skips_already_cached_names() {
    let mut state = EventChatState::default();
    state.messages = vec![message("g-1"), message("g-2")];
    state.cache_sender("g-1", "Ana");

    let pending = state.unresolved_senders("me");
    assert_eq!(pending, vec!["g-2".to_owned()]);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn selected_event_resolves_against_sidebar_list() {
    let mut state = EventChatState::default();
    state.events = vec![event(3, "anfitrion"), event(8, "participante")];

    assert!(state.selected_event().is_none());

    state.selected = Some(8);
    let selected = state.selected_event().expect("event in sidebar");
    assert_eq!(selected.nombre, "Evento 8");
}

#[test]
fn selected_event_is_none_when_id_left_the_list() {
    let mut state = EventChatState::default();
    state.events = vec![event(3, "anfitrion")];
    state.selected = Some(99);
    assert!(state.selected_event().is_none());
}
