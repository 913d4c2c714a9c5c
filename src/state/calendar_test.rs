use super::*;

fn event(id: i64, fecha_hora: &str, tipo: &str) -> MyEvent {
    MyEvent {
        evento_id: id,
        nombre: format!("Evento {id}"),
        fecha_hora: fecha_hora.to_owned(),
        descripcion: String::new(),
        tipo: tipo.to_owned(),
        lugar: "Cancha 1".to_owned(),
        latitud: -33.45,
        longitud: -70.66,
        precio: 0,
        inscritos: 2,
        max_participantes: 10,
    }
}

#[test]
fn events_on_day_buckets_by_start_date() {
    let state = CalendarState {
        events: vec![
            event(1, "2026-09-04T19:30:00", "anfitrion"),
            event(2, "2026-09-04T21:00:00", "participante"),
            event(3, "2026-09-05T10:00:00", "participante"),
        ],
        loading: false,
        error: None,
    };

    let day = NaiveDate::from_ymd_opt(2026, 9, 4).unwrap();
    let on_day = state.events_on_day(day);
    assert_eq!(on_day.len(), 2);
    assert_eq!(on_day[0].evento_id, 1);
    assert_eq!(on_day[1].evento_id, 2);
}

#[test]
fn events_on_day_skips_unparseable_timestamps() {
    let state = CalendarState {
        events: vec![event(1, "not-a-date", "anfitrion")],
        loading: false,
        error: None,
    };
    let day = NaiveDate::from_ymd_opt(2026, 9, 4).unwrap();
    assert!(state.events_on_day(day).is_empty());
}

#[test]
fn patch_occupancy_updates_only_the_joined_event() {
    let mut state = CalendarState {
        events: vec![
            event(1, "2026-09-04T19:30:00", "participante"),
            event(2, "2026-09-05T10:00:00", "participante"),
        ],
        loading: false,
        error: None,
    };

    state.patch_occupancy(2, 7, 10);

    assert_eq!(state.events[0].inscritos, 2);
    assert_eq!(state.events[1].inscritos, 7);
    assert_eq!(state.events[1].max_participantes, 10);
}

#[test]
fn is_host_only_for_anfitrion_rows() {
    assert!(is_host(&event(1, "2026-09-04T19:30:00", "anfitrion")));
    assert!(!is_host(&event(2, "2026-09-04T19:30:00", "participante")));
}

#[test]
fn event_day_parses_iso_timestamp() {
    let day = event_day(&event(1, "2026-09-04T19:30:00", "anfitrion"));
    assert_eq!(day, NaiveDate::from_ymd_opt(2026, 9, 4));
}
