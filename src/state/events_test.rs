use super::*;

#[test]
fn events_state_default_has_no_group_selected() {
    let state = EventsState::default();
    assert!(state.group_id.is_none());
    assert!(state.events.is_empty());
}

#[test]
fn split_participants_trims_each_name() {
    let names = split_participants("Ana, Benja , Caro");
    assert_eq!(names, vec!["Ana", "Benja", "Caro"]);
}

#[test]
fn split_participants_yields_nothing_for_empty_string() {
    assert!(split_participants("").is_empty());
}

#[test]
fn split_participants_drops_empty_segments() {
    let names = split_participants("Ana,, ,Benja");
    assert_eq!(names, vec!["Ana", "Benja"]);
}
