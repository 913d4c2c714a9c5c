use super::*;

#[test]
fn groups_state_default_is_empty_and_idle() {
    let state = GroupsState::default();
    assert!(state.groups.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn sport_emoji_maps_known_sports() {
    assert_eq!(sport_emoji("Fútbol"), "⚽");
    assert_eq!(sport_emoji("Básquetbol"), "🏀");
    assert_eq!(sport_emoji("Running"), "👟");
    assert_eq!(sport_emoji("Padel"), "🥎");
    assert_eq!(sport_emoji("Tenis"), "🥎");
    assert_eq!(sport_emoji("Voleibol"), "🏐");
}

#[test]
fn sport_emoji_falls_back_for_unknown_names() {
    assert_eq!(sport_emoji("Ajedrez"), "🏃‍♂️");
    assert_eq!(sport_emoji(""), "🏃‍♂️");
}
