//! Admin landing page. Admin tooling is not built yet.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::i18n::{Language, t};

#[component]
pub fn AdminPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();

    view! {
        <div class="admin-page">
            <Navbar title_key="admin_role"/>
            <main class="admin-page__body">
                <p class="admin-page__placeholder">{move || t(lang.get(), "admin_placeholder")}</p>
            </main>
        </div>
    }
}
