//! Networking modules for the backend HTTP + WebSocket boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `base` resolves backend URLs, `api` handles REST calls, `event_ws`
//! manages the per-event chat socket, and `types` defines the shared wire
//! schema.

pub mod api;
pub mod base;
pub mod event_ws;
pub mod types;
