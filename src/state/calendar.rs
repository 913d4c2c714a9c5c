//! Month-calendar state over the session user's events.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use chrono::NaiveDate;

use crate::net::types::MyEvent;
use crate::util::format::parse_timestamp;

/// State for the `/mis-eventos` list rendered on the month grid.
#[derive(Clone, Debug, Default)]
pub struct CalendarState {
    pub events: Vec<MyEvent>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CalendarState {
    /// Events whose start timestamp falls on `day`, in list order.
    pub fn events_on_day(&self, day: NaiveDate) -> Vec<MyEvent> {
        self.events
            .iter()
            .filter(|event| event_day(event) == Some(day))
            .cloned()
            .collect()
    }

    /// Patch the occupancy of one event after a join, list-wide.
    pub fn patch_occupancy(&mut self, evento_id: i64, inscritos: i64, max_participantes: i64) {
        for event in &mut self.events {
            if event.evento_id == evento_id {
                event.inscritos = inscritos;
                event.max_participantes = max_participantes;
            }
        }
    }
}

/// Calendar day an event starts on, if its timestamp parses.
pub fn event_day(event: &MyEvent) -> Option<NaiveDate> {
    parse_timestamp(&event.fecha_hora).map(|dt| dt.date())
}

/// Whether the session user hosts this event.
pub fn is_host(event: &MyEvent) -> bool {
    event.tipo == "anfitrion"
}
