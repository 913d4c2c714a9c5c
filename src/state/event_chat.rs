//! Event chat state: event sidebar, live message list, and sender names.
//!
//! DESIGN
//! ======
//! Messages carry only a sender id on the wire. Display names come from a
//! per-page cache filled lazily via `/usuarios/:id`; history rows and live
//! frames share it so each sender is resolved at most once.

#[cfg(test)]
#[path = "event_chat_test.rs"]
mod event_chat_test;

use std::collections::HashMap;

use crate::net::types::{EventMessage, MyEvent};

/// State for the event chat page.
#[derive(Clone, Debug, Default)]
pub struct EventChatState {
    /// Sidebar of the session user's events, from `/mis-eventos`.
    pub events: Vec<MyEvent>,
    /// Selected event id, if a chat is open.
    pub selected: Option<i64>,
    /// Messages of the open chat, oldest first; live frames append.
    pub messages: Vec<EventMessage>,
    /// Sender id to display name, filled lazily.
    pub sender_names: HashMap<String, String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl EventChatState {
    /// Cached display name for a sender, if resolved.
    pub fn sender_name(&self, sender_id: &str) -> Option<&str> {
        self.sender_names.get(sender_id).map(String::as_str)
    }

    /// Record a resolved sender name.
    pub fn cache_sender(&mut self, sender_id: &str, nombre: &str) {
        self.sender_names.insert(sender_id.to_owned(), nombre.to_owned());
    }

    /// Distinct sender ids in the current history that still need a name.
    ///
    /// The session user never needs resolution; their messages render as
    /// their own.
    pub fn unresolved_senders(&self, own_id: &str) -> Vec<String> {
        let mut pending = Vec::new();
        for message in &self.messages {
            let sender = message.remitente_id.as_str();
            if sender == own_id
                || self.sender_names.contains_key(sender)
                || pending.iter().any(|seen: &String| seen == sender)
            {
                continue;
            }
            pending.push(sender.to_owned());
        }
        pending
    }

    /// The selected event, looked up in the sidebar list.
    pub fn selected_event(&self) -> Option<&MyEvent> {
        let id = self.selected?;
        self.events.iter().find(|event| event.evento_id == id)
    }
}
