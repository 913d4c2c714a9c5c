use super::*;

#[test]
fn group_events_endpoint_formats_expected_path() {
    assert_eq!(group_events_endpoint(2), "/grupos/2/eventos");
}

#[test]
fn event_endpoints_format_expected_paths() {
    assert_eq!(event_participants_endpoint(14), "/eventos/14/participantes");
    assert_eq!(join_event_endpoint(14), "/eventos/14/unirse");
}

#[test]
fn friendship_endpoints_format_expected_paths() {
    assert_eq!(respond_request_endpoint(31), "/amistad/responder/31");
    assert_eq!(cancel_request_endpoint("g-2"), "/amistad/cancelar/g-2");
    assert_eq!(remove_friend_endpoint("g-2"), "/amistad/eliminar/g-2");
    assert_eq!(accept_request_endpoint("g-1"), "/amistad/aceptar/g-1");
    assert_eq!(friendship_state_endpoint("g-2"), "/amistad/estado/g-2");
}

#[test]
fn chat_endpoints_format_expected_paths() {
    assert_eq!(chat_history_endpoint("g-2"), "/chat/historial/g-2");
    assert_eq!(event_chat_history_endpoint(7), "/chat/historial-evento/7");
}

#[test]
fn profile_endpoints_format_expected_paths() {
    assert_eq!(public_profile_endpoint("g-2"), "/usuarios/g-2");
    assert_eq!(ratings_endpoint("g-2"), "/calificaciones/g-2");
}

#[test]
fn respond_estado_maps_decision_to_wire_value() {
    assert_eq!(respond_estado(true), "aceptada");
    assert_eq!(respond_estado(false), "rechazada");
}

#[test]
fn failed_message_formats_operation_and_status() {
    assert_eq!(failed_message("group list", 500), "group list failed: 500");
}
