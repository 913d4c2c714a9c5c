//! Backend origin and URL builders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every HTTP and WebSocket call targets the same external backend. This is
//! the single module that knows its origin; callers pass paths relative to it.

#[cfg(test)]
#[path = "base_test.rs"]
mod base_test;

/// Origin of the backend API.
pub const API_BASE: &str = "http://localhost:8000";

/// Build an absolute HTTP URL for a backend path starting with `/`.
pub fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Build an absolute WebSocket URL for a backend path starting with `/`.
///
/// Rewrites the scheme: `http` becomes `ws`, `https` becomes `wss`.
pub fn ws_url(path: &str) -> String {
    let origin = API_BASE
        .replacen("https://", "wss://", 1)
        .replacen("http://", "ws://", 1);
    format!("{origin}{path}")
}
