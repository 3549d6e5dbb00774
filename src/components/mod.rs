//! Reusable UI components shared by the dashboard pages.

pub mod history_modal;
pub mod language_selector;
pub mod navbar;
