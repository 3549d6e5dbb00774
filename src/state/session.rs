//! Session snapshot for the current browser actor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and role-aware pages, written only through
//! [`crate::auth::manager::SessionManager`]. A present role is a UI claim
//! mirrored from the last successful login; the server cookie stays
//! authoritative.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Actor role. Determines which dashboard is reachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Worker,
    Doctor,
    Admin,
}

/// Roles a visitor may request when signing up.
pub const SIGNUP_ROLES: &[Role] = &[Role::Worker, Role::Doctor];

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Worker => "worker",
            Self::Doctor => "doctor",
            Self::Admin => "admin",
        }
    }

    /// Parse a stored or wire role string. Exact lowercase match only.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "worker" => Some(Self::Worker),
            "doctor" => Some(Self::Doctor),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Landing route after authenticating with this role.
    #[must_use]
    pub const fn home_route(self) -> &'static str {
        match self {
            Self::Worker => "/worker",
            Self::Doctor => "/doctor",
            Self::Admin => "/admin",
        }
    }

    /// Translation key for the role's display name.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Worker => "worker_role",
            Self::Doctor => "doctor_role",
            Self::Admin => "admin_role",
        }
    }
}

/// Session snapshot: who is signed in and whether that is known yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub role: Option<Role>,
    /// True from creation until the persisted hint has been read.
    pub loading: bool,
    /// True while a login or signup request is outstanding.
    pub pending: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { role: None, loading: true, pending: false }
    }
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }
}
