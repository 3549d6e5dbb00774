//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the session manager once and shares it, the session signal,
//! the language signal and the API handle through context. Dashboard routes
//! sit behind [`RoleGate`]; the login page at `/` is open to everyone.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::auth::guard::RoleGate;
use crate::auth::manager::SessionManager;
use crate::config::ClientConfig;
use crate::i18n::t;
use crate::net::api::ClinicApi;
use crate::net::http::ApiClient;
use crate::pages::{admin::AdminPage, doctor::DoctorPage, login::LoginPage, worker::WorkerPage};
use crate::state::language::{persist_language, restore_language};
use crate::state::session::{Role, SessionState};
use crate::util::storage::BrowserStorage;

/// Session manager wired to the real server, `localStorage` and the session signal.
pub type AppSession = SessionManager<ClinicApi, BrowserStorage, RwSignal<SessionState>>;

/// Root application component.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let language = RwSignal::new(restore_language(&BrowserStorage));
    let api = ClinicApi::new(ApiClient::from_config(&config));
    let manager = AppSession::new(api.clone(), BrowserStorage, session);

    provide_context(session);
    provide_context(language);
    provide_context(api);
    provide_context(manager.clone());

    // Read the stored role once after mount; guards show a placeholder until then.
    Effect::new(move || manager.hydrate());
    Effect::new(move || persist_language(&BrowserStorage, language.get()));

    view! {
        <Title text=move || t(language.get(), "app_name")/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route
                    path=StaticSegment("doctor")
                    view=|| view! { <RoleGate role=Some(Role::Doctor)><DoctorPage/></RoleGate> }
                />
                <Route
                    path=StaticSegment("worker")
                    view=|| view! { <RoleGate role=Some(Role::Worker)><WorkerPage/></RoleGate> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <RoleGate role=Some(Role::Admin)><AdminPage/></RoleGate> }
                />
            </Routes>
        </Router>
    }
}
