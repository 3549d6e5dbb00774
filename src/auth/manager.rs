//! Session manager: login, signup, logout and hydration from the role hint.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built once in `App` from injected collaborators (an [`AuthApi`], a
//! [`HintStore`] and a [`SessionCell`]) and shared through Leptos context.
//! Pages call it; the route guard only reads the session cell.
//!
//! ERROR HANDLING
//! ==============
//! Every endpoint failure collapses into one generic [`AuthError`] per
//! operation. A failed call never touches the role or the hint.
//!
//! KNOWN LIMITATIONS
//! =================
//! - Hydration trusts the stored hint without asking the server; a stale hint
//!   surfaces only when the next API call fails.
//! - Logout is local. The server session cookie may remain valid.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::cell::RefCell;

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::net::api::AuthApi;
use crate::net::types::SignupRequest;
use crate::state::session::{Role, SessionState};
use crate::util::storage::{HintStore, ROLE_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("login failed")]
    LoginFailed,
    #[error("registration failed")]
    RegistrationFailed,
    #[error("another login or signup request is still in flight")]
    Busy,
}

impl AuthError {
    /// Translation key for the message shown to the user.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::LoginFailed => "login_fail",
            Self::RegistrationFailed => "reg_fail",
            Self::Busy => "busy",
        }
    }
}

/// Holder of the session snapshot. Reactive in the app, plain in tests.
pub trait SessionCell {
    fn read_session(&self) -> SessionState;
    fn write_session(&self, f: impl FnOnce(&mut SessionState));
}

impl SessionCell for RwSignal<SessionState> {
    fn read_session(&self) -> SessionState {
        self.get_untracked()
    }

    fn write_session(&self, f: impl FnOnce(&mut SessionState)) {
        self.update(f);
    }
}

impl SessionCell for RefCell<SessionState> {
    fn read_session(&self) -> SessionState {
        self.borrow().clone()
    }

    fn write_session(&self, f: impl FnOnce(&mut SessionState)) {
        f(&mut *self.borrow_mut());
    }
}

/// Single source of truth for the current actor's role.
#[derive(Clone, Debug)]
pub struct SessionManager<A, S, C> {
    api: A,
    hints: S,
    state: C,
}

impl<A, S, C> SessionManager<A, S, C>
where
    A: AuthApi,
    S: HintStore,
    C: SessionCell,
{
    pub fn new(api: A, hints: S, state: C) -> Self {
        Self { api, hints, state }
    }

    /// Current session snapshot.
    pub fn snapshot(&self) -> SessionState {
        self.state.read_session()
    }

    /// Adopt the persisted role hint and finish loading.
    ///
    /// Synchronous and network-free. An unreadable hint counts as absent.
    pub fn hydrate(&self) {
        let stored = self.hints.get(ROLE_KEY);
        let role = stored.as_deref().and_then(Role::parse);
        if let (Some(raw), None) = (stored.as_deref(), role) {
            log::warn!("ignoring unrecognized stored role {raw:?}");
        }
        self.state.write_session(|s| {
            s.role = role;
            s.loading = false;
        });
    }

    /// Authenticate with a phone number.
    ///
    /// # Errors
    ///
    /// [`AuthError::Busy`] if another request is outstanding, otherwise
    /// [`AuthError::LoginFailed`] for any endpoint failure.
    pub async fn login(&self, phone: &str) -> Result<Role, AuthError> {
        self.begin_request()?;
        match self.api.login(phone).await {
            Ok(resp) => {
                self.adopt_role(resp.role);
                log::info!("logged in as {}", resp.role.as_str());
                Ok(resp.role)
            }
            Err(e) => {
                self.end_request();
                log::warn!("login rejected: {e}");
                Err(AuthError::LoginFailed)
            }
        }
    }

    /// Register a new actor.
    ///
    /// When the server issues a health ID the new actor is signed in as a
    /// worker, whatever role was requested, and `Some(Role::Worker)` is
    /// returned. Without a health ID nothing changes and `None` is returned.
    ///
    /// # Errors
    ///
    /// [`AuthError::Busy`] if another request is outstanding, otherwise
    /// [`AuthError::RegistrationFailed`] for any endpoint failure.
    pub async fn signup(&self, profile: &SignupRequest) -> Result<Option<Role>, AuthError> {
        self.begin_request()?;
        match self.api.signup(profile).await {
            Ok(resp) if resp.health_id.is_some() => {
                self.adopt_role(Role::Worker);
                log::info!("registered and signed in as worker");
                Ok(Some(Role::Worker))
            }
            Ok(_) => {
                self.end_request();
                log::info!("registered {} without a session", profile.role.as_str());
                Ok(None)
            }
            Err(e) => {
                self.end_request();
                log::warn!("signup rejected: {e}");
                Err(AuthError::RegistrationFailed)
            }
        }
    }

    /// Forget the role in memory and in storage. Navigation is up to the caller.
    pub fn logout(&self) {
        self.hints.remove(ROLE_KEY);
        self.state.write_session(|s| s.role = None);
        log::info!("logged out");
    }

    fn begin_request(&self) -> Result<(), AuthError> {
        if self.state.read_session().pending {
            return Err(AuthError::Busy);
        }
        self.state.write_session(|s| s.pending = true);
        Ok(())
    }

    fn end_request(&self) {
        self.state.write_session(|s| s.pending = false);
    }

    fn adopt_role(&self, role: Role) {
        self.hints.set(ROLE_KEY, role.as_str());
        self.state.write_session(|s| {
            s.role = Some(role);
            s.pending = false;
        });
    }
}
