use super::*;

// =============================================================
// Session user
// =============================================================

#[test]
fn session_user_decodes_profile_payload() {
    let json = r#"{"id":"108234","email":"ana@uc.cl","name":"Ana","picture":"https://lh3.example/a.png"}"#;
    let user: SessionUser = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, "108234");
    assert_eq!(user.name, "Ana");
    assert_eq!(user.picture.as_deref(), Some("https://lh3.example/a.png"));
}

#[test]
fn session_user_accepts_null_picture() {
    let json = r#"{"id":"1","email":"a@b.c","name":"A","picture":null}"#;
    let user: SessionUser = serde_json::from_str(json).unwrap();
    assert!(user.picture.is_none());
}

#[test]
fn google_login_reads_camel_case_first_login() {
    let json = r#"{
        "ok": true,
        "firstLogin": true,
        "user": {"id":"1","email":"a@b.c","name":"A","picture":null}
    }"#;
    let login: GoogleLogin = serde_json::from_str(json).unwrap();
    assert!(login.ok);
    assert!(login.first_login);
    assert_eq!(login.user.id, "1");
}

#[test]
fn google_login_defaults_first_login_to_false() {
    let json = r#"{"user":{"id":"1","email":"a@b.c","name":"A","picture":null}}"#;
    let login: GoogleLogin = serde_json::from_str(json).unwrap();
    assert!(!login.first_login);
}

// =============================================================
// Groups and events
// =============================================================

#[test]
fn group_defaults_missing_description() {
    let json = r#"{"id":2,"nombre":"Fútbol"}"#;
    let group: Group = serde_json::from_str(json).unwrap();
    assert_eq!(group.id, 2);
    assert_eq!(group.descripcion, "");
}

#[test]
fn group_event_decodes_full_row() {
    let json = r#"{
        "evento_id": 14,
        "nombre": "Pichanga viernes",
        "descripcion": "Cancha 2, traer peto",
        "fecha_hora": "2026-09-04T19:30:00",
        "lugar": "Cancha San Joaquín",
        "precio": 1500,
        "participantes": "Ana, Benja, Caro",
        "latitud": -33.4995,
        "longitud": -70.6118
    }"#;
    let event: GroupEvent = serde_json::from_str(json).unwrap();
    assert_eq!(event.evento_id, 14);
    assert_eq!(event.precio, 1500);
    assert_eq!(event.participantes, "Ana, Benja, Caro");
}

#[test]
fn group_event_accepts_float_price() {
    let json = r#"{
        "evento_id": 1,
        "nombre": "E",
        "fecha_hora": "2026-09-04T19:30:00",
        "lugar": "L",
        "precio": 2000.0,
        "latitud": 0.0,
        "longitud": 0.0
    }"#;
    let event: GroupEvent = serde_json::from_str(json).unwrap();
    assert_eq!(event.precio, 2000);
}

#[test]
fn group_events_envelope_carries_header_name() {
    let json = r#"{"grupo_nombre":"Fútbol","eventos":[]}"#;
    let envelope: GroupEvents = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.grupo_nombre, "Fútbol");
    assert!(envelope.eventos.is_empty());
}

#[test]
fn my_event_decodes_host_row() {
    let json = r#"{
        "evento_id": 7,
        "nombre": "Torneo padel",
        "fecha_hora": "2026-09-12T10:00:00",
        "descripcion": "",
        "tipo": "anfitrion",
        "lugar": "Club Las Condes",
        "latitud": -33.41,
        "longitud": -70.57,
        "precio": 0,
        "inscritos": 3,
        "max_participantes": 8
    }"#;
    let event: MyEvent = serde_json::from_str(json).unwrap();
    assert_eq!(event.tipo, "anfitrion");
    assert_eq!(event.inscritos, 3);
    assert_eq!(event.max_participantes, 8);
}

#[test]
fn new_event_serializes_wire_keys() {
    let event = NewEvent {
        nombre: "Pichanga".to_owned(),
        descripcion: "Amistoso".to_owned(),
        fecha_hora: "2026-09-04T19:30".to_owned(),
        lugar: "Cancha 1".to_owned(),
        max_participantes: 10,
        grupo_id: 2,
        precio: 0,
        latitud: -33.45,
        longitud: -70.66,
    };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["nombre"], "Pichanga");
    assert_eq!(value["grupo_id"], 2);
    assert_eq!(value["max_participantes"], 10);
    assert_eq!(value["latitud"], -33.45);
}

#[test]
fn join_outcome_decodes_counts() {
    let json = r#"{"message":"Te has unido al evento","participantes_actuales":4,"max_participantes":10}"#;
    let outcome: JoinOutcome = serde_json::from_str(json).unwrap();
    assert_eq!(outcome.participantes_actuales, 4);
    assert_eq!(outcome.max_participantes, 10);
}

// =============================================================
// Friendship rows
// =============================================================

#[test]
fn friend_request_keeps_side_fields_optional() {
    let json = r#"{
        "id": 31,
        "solicitante_id": "g-1",
        "destinatario_id": "g-2",
        "estado": "pendiente",
        "fecha_solicitud": "2026-08-01T12:00:00",
        "nombre_solicitante": "Ana",
        "foto_solicitante": null
    }"#;
    let request: FriendRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.nombre_solicitante.as_deref(), Some("Ana"));
    assert!(request.foto_solicitante.is_none());
    assert!(request.nombre_destinatario.is_none());
}

// =============================================================
// Chat messages
// =============================================================

#[test]
fn friend_message_equality_drives_poll_diffing() {
    let json = r#"{"remitente_id":"g-1","destinatario_id":"g-2","mensaje":"hola","fecha_envio":"2026-08-20T10:00:00"}"#;
    let a: FriendMessage = serde_json::from_str(json).unwrap();
    let b: FriendMessage = serde_json::from_str(json).unwrap();
    assert_eq!(a, b);
}

#[test]
fn event_message_decodes_history_row_without_event_id() {
    let json = r#"{"remitente_id":"g-1","mensaje":"vamos","fecha_envio":"2026-08-20T10:00:00"}"#;
    let message: EventMessage = serde_json::from_str(json).unwrap();
    assert!(message.evento_id.is_none());
    assert_eq!(message.mensaje, "vamos");
}

#[test]
fn event_message_decodes_live_frame_with_event_id() {
    let json = r#"{"evento_id":7,"remitente_id":"g-1","mensaje":"vamos","fecha_envio":"2026-08-20T10:00:00"}"#;
    let message: EventMessage = serde_json::from_str(json).unwrap();
    assert_eq!(message.evento_id, Some(7));
}

// =============================================================
// Public profile and ratings
// =============================================================

#[test]
fn public_profile_tolerates_sparse_rows() {
    let json = r#"{"nombre":"Benja","email":"benja@uc.cl"}"#;
    let profile: PublicProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.nombre, "Benja");
    assert!(profile.region.is_none());
    assert!(profile.edad.is_none());
}

#[test]
fn ratings_summary_decodes_average_and_rows() {
    let json = r#"{
        "ok": true,
        "evaluado_id": "g-2",
        "promedio": 4.5,
        "total_calificaciones": 2,
        "calificaciones": [
            {
                "id": 1,
                "estrellas": 5,
                "comentario": "Buen anfitrión",
                "fecha_calificacion": "2026-07-30T18:00:00",
                "evento_id": 3,
                "evaluador_nombre": "Caro",
                "evaluador_foto": null
            },
            {
                "id": 2,
                "estrellas": 4,
                "comentario": null,
                "fecha_calificacion": "2026-08-02T18:00:00",
                "evento_id": 5,
                "evaluador_nombre": "Diego"
            }
        ]
    }"#;
    let summary: RatingsSummary = serde_json::from_str(json).unwrap();
    assert!(summary.ok);
    assert_eq!(summary.promedio, 4.5);
    assert_eq!(summary.total_calificaciones, 2);
    assert_eq!(summary.calificaciones.len(), 2);
    assert!(summary.calificaciones[1].comentario.is_none());
}
