//! Top bar for dashboard pages: title, language selector and logout.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::auth::guard::ENTRY_ROUTE;
use crate::components::language_selector::LanguageSelector;
use crate::i18n::{Language, t};

/// Navbar showing the translated `title_key`.
///
/// Logout clears the session and then reloads the entry route so no page
/// state survives.
#[component]
pub fn Navbar(title_key: &'static str) -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let session = expect_context::<AppSession>();

    let on_logout = move |_| {
        session.logout();
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(ENTRY_ROUTE);
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = ENTRY_ROUTE;
    };

    view! {
        <nav class="navbar">
            <span class="navbar__brand">{move || t(lang.get(), "app_name")}</span>
            <h1 class="navbar__title">{move || t(lang.get(), title_key)}</h1>
            <div class="navbar__actions">
                <LanguageSelector/>
                <button class="navbar__logout" on:click=on_logout>
                    {move || t(lang.get(), "logout")}
                </button>
            </div>
        </nav>
    }
}
