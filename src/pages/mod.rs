//! Top-level routed pages.

pub mod admin;
pub mod doctor;
pub mod login;
pub mod worker;
