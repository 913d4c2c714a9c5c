//! # sunity-client
//!
//! Leptos + WASM frontend for the Sunity sports-event platform.
//!
//! This crate contains pages, components, application state, network types,
//! and the per-event WebSocket chat client. All business rules live in the
//! backend; the client renders server state and forwards user intent.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
