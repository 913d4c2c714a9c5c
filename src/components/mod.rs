//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading and
//! writing shared state owned by the hosting page or provided via context.

pub mod event_calendar;
pub mod event_form;
pub mod event_list;
pub mod group_list;
pub mod nav_bar;
pub mod side_menu;
