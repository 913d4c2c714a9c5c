//! Friendship lists and the per-profile relationship state machine.
//!
//! DESIGN
//! ======
//! The server owns the friendship lifecycle; this module only mirrors it.
//! Each profile view fetches the current relationship, and every action
//! optimistically moves local state to that action's post-condition:
//!
//! ```text
//! ninguno --solicitar--> solicitud_enviada --cancelar--> ninguno
//! solicitud_recibida --aceptar--> amigos
//! ```
//!
//! The response body of a transition is never reconciled back into local
//! state; a failed call leaves the state untouched instead.

#[cfg(test)]
#[path = "friends_test.rs"]
mod friends_test;

use crate::net::types::{Friend, FriendRequest};

/// Relationship between the session user and a viewed profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FriendshipStatus {
    /// No relationship and no pending request.
    None,
    /// The session user sent a request that is still pending.
    RequestSent,
    /// The viewed user sent a request the session user has not answered.
    RequestReceived,
    /// Confirmed friends.
    Friends,
}

impl FriendshipStatus {
    /// Parse the server's `estado` string; unknown values yield `None`.
    pub fn from_estado(estado: &str) -> Option<Self> {
        match estado {
            "ninguno" => Some(Self::None),
            "solicitud_enviada" => Some(Self::RequestSent),
            "solicitud_recibida" => Some(Self::RequestReceived),
            "amigos" => Some(Self::Friends),
            _ => None,
        }
    }

    /// The server's `estado` string for this state.
    pub fn as_estado(self) -> &'static str {
        match self {
            Self::None => "ninguno",
            Self::RequestSent => "solicitud_enviada",
            Self::RequestReceived => "solicitud_recibida",
            Self::Friends => "amigos",
        }
    }

    /// Label of the single action button on the profile page.
    pub fn action_label(self) -> &'static str {
        match self {
            Self::None => "🤝 Enviar solicitud",
            Self::RequestSent => "❌ Cancelar solicitud",
            Self::RequestReceived => "✅ Aceptar solicitud",
            Self::Friends => "✅ Son amigos",
        }
    }

    /// Whether the action button does anything in this state.
    pub fn action_enabled(self) -> bool {
        !matches!(self, Self::Friends)
    }

    /// State assumed locally after the action for this state succeeds.
    pub fn after_action(self) -> Self {
        match self {
            Self::None => Self::RequestSent,
            Self::RequestSent => Self::None,
            Self::RequestReceived => Self::Friends,
            Self::Friends => Self::Friends,
        }
    }
}

/// Tab selection on the friends page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FriendsTab {
    #[default]
    Amigos,
    Recibidas,
    Enviadas,
}

/// State for the friends page: confirmed friends plus both request queues.
#[derive(Clone, Debug, Default)]
pub struct FriendsState {
    pub amigos: Vec<Friend>,
    pub recibidas: Vec<FriendRequest>,
    pub enviadas: Vec<FriendRequest>,
    pub tab: FriendsTab,
    pub loading: bool,
    pub error: Option<String>,
}
