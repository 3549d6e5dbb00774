//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `language`, `doctor`, `worker`) so
//! pages depend on small focused models. Each model is a plain struct with
//! pure transitions; pages wrap them in `RwSignal`s for reactivity.

pub mod doctor;
pub mod language;
pub mod session;
pub mod worker;
