//! Route guard for role-scoped views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard route wraps its page in [`RoleGate`]. The decision itself
//! is the pure [`decide`] so the access table can be tested without a router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::i18n::{Language, t};
use crate::state::session::{Role, SessionState};

/// Route unauthenticated or mismatched actors are sent to.
pub const ENTRY_ROUTE: &str = "/";

/// Outcome of evaluating a guard against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Hydration has not finished; show a placeholder and wait.
    Pending,
    Redirect(&'static str),
    Allow,
}

/// Decide access for `required` given the session snapshot.
///
/// Roles match exactly; there is no hierarchy between them.
#[must_use]
pub fn decide(state: &SessionState, required: Option<Role>) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    match (state.role, required) {
        (None, _) => GuardDecision::Redirect(ENTRY_ROUTE),
        (Some(current), Some(needed)) if current != needed => GuardDecision::Redirect(ENTRY_ROUTE),
        _ => GuardDecision::Allow,
    }
}

/// Render `children` only while the session satisfies `role`.
///
/// Re-evaluates whenever the session signal changes and navigates away on a
/// redirect decision.
#[component]
pub fn RoleGate(role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let lang = expect_context::<RwSignal<Language>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let GuardDecision::Redirect(path) = decide(&session.get(), role) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decide(&session.get(), role) {
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Pending => view! { <div class="gate gate--loading">{t(lang.get(), "loading")}</div> }.into_any(),
        GuardDecision::Redirect(_) => {
            view! { <div class="gate gate--redirect">{t(lang.get(), "redirecting")}</div> }.into_any()
        }
    }
}
