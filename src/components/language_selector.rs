//! Dropdown bound to the shared language signal.

use leptos::prelude::*;

use crate::i18n::{LANGUAGES, Language, t};

#[component]
pub fn LanguageSelector() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();

    let on_change = move |ev: leptos::ev::Event| {
        if let Some(next) = Language::parse(&event_target_value(&ev)) {
            lang.set(next);
        }
    };

    view! {
        <label class="language-selector">
            <span class="language-selector__label">{move || t(lang.get(), "language_label")}</span>
            <select class="language-selector__select" prop:value=move || lang.get().code() on:change=on_change>
                {LANGUAGES
                    .iter()
                    .map(|&option| {
                        view! {
                            <option value=option.code() selected=move || lang.get() == option>
                                {option.native_name()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
