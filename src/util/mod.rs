//! Utility helpers shared across page and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure formatting
//! logic from page and component code to improve reuse and testability.

pub mod auth;
pub mod browser;
pub mod calendar_grid;
pub mod format;
pub mod google_identity;
pub mod regions;
