//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen domain (`session`, `friends`, `chat`, etc.) so
//! individual components depend on small focused models. Only the session
//! lives in app-wide context; every other state is owned by its page and
//! re-fetched on mount.

pub mod calendar;
pub mod chat;
pub mod event_chat;
pub mod events;
pub mod friends;
pub mod groups;
pub mod session;
