//! Group catalog state for the browse tab.

#[cfg(test)]
#[path = "groups_test.rs"]
mod groups_test;

use crate::net::types::Group;

/// State for the group list fetched from `/grupos`.
#[derive(Clone, Debug, Default)]
pub struct GroupsState {
    pub groups: Vec<Group>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Emoji shown on a group card, keyed by the group's name.
pub fn sport_emoji(nombre: &str) -> &'static str {
    match nombre {
        "Fútbol" => "⚽",
        "Básquetbol" => "🏀",
        "Running" => "👟",
        "Padel" | "Tenis" => "🥎",
        "Voleibol" => "🏐",
        _ => "🏃‍♂️",
    }
}
