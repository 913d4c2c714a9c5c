//! Small browser-surface helpers shared by pages.
//!
//! TRADE-OFFS
//! ==========
//! Alert and storage access are best-effort browser-only behavior; non-CSR
//! builds no-op so pure logic stays testable natively.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

#[cfg(feature = "csr")]
const USER_STORAGE_KEY: &str = "user";

/// Show a blocking browser alert with a server or validation message.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}

/// Drop the cached login marker and all session-scoped storage.
///
/// Runs after `/logout` so a later page load starts signed out even if the
/// cookie delete raced.
pub fn clear_session_artifacts() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(USER_STORAGE_KEY);
            }
            if let Ok(Some(storage)) = window.session_storage() {
                let _ = storage.clear();
            }
        }
    }
}
