//! # healthcard
//!
//! Leptos + WASM frontend for the worker health-record system. Workers see
//! their latest medical record and notifications; doctors look up a worker by
//! health ID and append records. The server owns the session cookie; this
//! crate mirrors the actor's role locally to route between dashboards.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
