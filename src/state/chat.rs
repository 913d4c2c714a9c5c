//! Friend chat state: conversation list, open history, and the poll guard.
//!
//! DESIGN
//! ======
//! The open conversation refetches its full history on a fixed interval.
//! There is no delta endpoint; `apply_history` compares the fetched list with
//! the displayed one and swaps only on change so an idle conversation does
//! not re-render every tick. Polling also skips ticks while the user is
//! typing to keep the input from fighting a list swap.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{Friend, FriendMessage};

/// State for the friend chat page.
#[derive(Clone, Debug, Default)]
pub struct FriendChatState {
    /// Conversation sidebar, from `/amistad/lista`.
    pub friends: Vec<Friend>,
    /// Open conversation partner, if any.
    pub selected: Option<Friend>,
    /// Full history of the open conversation, oldest first.
    pub messages: Vec<FriendMessage>,
    /// True while the user has uncommitted input in the compose box.
    pub composing: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl FriendChatState {
    /// Replace the history when the fetched list differs; returns whether a
    /// swap happened.
    pub fn apply_history(&mut self, fetched: Vec<FriendMessage>) -> bool {
        if self.messages == fetched {
            return false;
        }
        self.messages = fetched;
        true
    }

    /// Google id of the open conversation partner, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|friend| friend.google_id.as_str())
    }
}

/// Whether a message was sent by the session user.
pub fn is_own_message(own_id: &str, message: &FriendMessage) -> bool {
    message.remitente_id == own_id
}
