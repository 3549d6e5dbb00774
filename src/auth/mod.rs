//! Client-side authentication: the session manager and the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server keeps the real session in a cookie. This module mirrors the
//! actor's role locally so the UI can route without a round trip, and decides
//! which views that role may see.

pub mod guard;
pub mod manager;
