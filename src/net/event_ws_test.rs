use super::*;

#[test]
fn event_ws_endpoint_formats_expected_path() {
    assert_eq!(event_ws_endpoint(7), "/chat/ws-evento/7");
}

#[test]
fn outgoing_frame_wraps_text_in_mensaje() {
    assert_eq!(outgoing_frame("hola equipo"), r#"{"mensaje":"hola equipo"}"#);
}

#[test]
fn parse_incoming_decodes_broadcast_frame() {
    let frame = r#"{"evento_id":7,"remitente_id":"g-1","mensaje":"vamos","fecha_envio":"2026-08-20T10:00:00"}"#;
    let message = parse_incoming(frame).unwrap();
    assert_eq!(message.evento_id, Some(7));
    assert_eq!(message.remitente_id, "g-1");
    assert_eq!(message.mensaje, "vamos");
}

#[test]
fn parse_incoming_drops_malformed_frames() {
    assert!(parse_incoming("not json").is_none());
    assert!(parse_incoming(r#"{"mensaje":"sin remitente"}"#).is_none());
}
