//! Per-group event list state for the browse tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds exactly one group's events at a time; selecting another group
//! replaces the whole list. The server renders the participant roster as a
//! comma-joined name string, split here for display.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::net::types::GroupEvent;

/// State for the events of the currently selected group.
#[derive(Clone, Debug, Default)]
pub struct EventsState {
    /// Selected group id; `None` until the user picks a group.
    pub group_id: Option<i64>,
    /// Name of the selected group as the server labels it.
    pub group_name: String,
    pub events: Vec<GroupEvent>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Split the server's comma-joined participant string into display names.
///
/// Empty segments vanish, so `""` yields no participants.
pub fn split_participants(participantes: &str) -> Vec<String> {
    participantes
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
