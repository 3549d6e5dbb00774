//! Networking modules for the clinic REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns request construction and failure logging, `types` defines the
//! wire schema, and `api` maps each endpoint to a typed call.

pub mod api;
pub mod http;
pub mod types;
