//! Login page with phone login and signup tabs.
//!
//! Errors render as translated messages; the session manager decides where a
//! successful login lands via [`Role::home_route`].

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::language_selector::LanguageSelector;
use crate::i18n::{Language, t};
use crate::net::types::SignupRequest;
use crate::state::session::{Role, SIGNUP_ROLES, SessionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Login,
    Signup,
}

/// Trim a phone number and require a value.
///
/// # Errors
///
/// Returns `"phone_required"` for blank input.
pub fn validate_phone_input(phone: &str) -> Result<String, &'static str> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err("phone_required");
    }
    Ok(phone.to_owned())
}

/// Build a signup request from form input, tagged with the current UI language.
///
/// # Errors
///
/// Returns `"name_required"` or `"phone_required"` for blank fields.
pub fn validate_signup_input(
    name: &str,
    phone: &str,
    role: Role,
    language: Language,
) -> Result<SignupRequest, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("name_required");
    }
    let phone = validate_phone_input(phone)?;
    Ok(SignupRequest { name: name.to_owned(), role, phone, language })
}

/// Full navigation to the role's dashboard; the next load hydrates from the stored role.
#[cfg(feature = "csr")]
fn open_home(role: Role) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(role.home_route());
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let session_state = expect_context::<RwSignal<SessionState>>();
    let session = expect_context::<AppSession>();

    let tab = RwSignal::new(Tab::Login);
    let phone = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let signup_phone = RwSignal::new(String::new());
    let signup_role = RwSignal::new(Role::Worker);
    let error = RwSignal::new(None::<&'static str>);
    let info = RwSignal::new(None::<&'static str>);
    let pending = move || session_state.get().pending;

    let switch_tab = move |next: Tab| {
        tab.set(next);
        error.set(None);
        info.set(None);
    };

    let on_login = {
        let session = session.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if session_state.get_untracked().pending {
                return;
            }
            let phone_value = match validate_phone_input(&phone.get_untracked()) {
                Ok(value) => value,
                Err(key) => {
                    error.set(Some(key));
                    return;
                }
            };
            error.set(None);
            info.set(None);

            #[cfg(feature = "csr")]
            {
                let session = session.clone();
                leptos::task::spawn_local(async move {
                    match session.login(&phone_value).await {
                        Ok(role) => open_home(role),
                        Err(e) => error.set(Some(e.message_key())),
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            let _ = (&session, phone_value);
        }
    };

    let on_signup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session_state.get_untracked().pending {
            return;
        }
        let request = match validate_signup_input(
            &name.get_untracked(),
            &signup_phone.get_untracked(),
            signup_role.get_untracked(),
            lang.get_untracked(),
        ) {
            Ok(request) => request,
            Err(key) => {
                error.set(Some(key));
                return;
            }
        };
        error.set(None);
        info.set(None);

        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match session.signup(&request).await {
                    Ok(Some(role)) => open_home(role),
                    Ok(None) => {
                        phone.set(request.phone);
                        tab.set(Tab::Login);
                        info.set(Some("signup_done"));
                    }
                    Err(e) => error.set(Some(e.message_key())),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&session, request);
    };

    let tab_class = move |which: Tab| {
        if tab.get() == which { "login-tabs__tab login-tabs__tab--active" } else { "login-tabs__tab" }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__top">
                    <h1>{move || t(lang.get(), "app_name")}</h1>
                    <LanguageSelector/>
                </div>
                <div class="login-tabs">
                    <button class=move || tab_class(Tab::Login) on:click=move |_| switch_tab(Tab::Login)>
                        {move || t(lang.get(), "login_tab")}
                    </button>
                    <button class=move || tab_class(Tab::Signup) on:click=move |_| switch_tab(Tab::Signup)>
                        {move || t(lang.get(), "signup_tab")}
                    </button>
                </div>
                <Show
                    when=move || tab.get() == Tab::Login
                    fallback=move || {
                        view! {
                            <form class="login-form" on:submit=on_signup.clone()>
                                <label class="login-label">{move || t(lang.get(), "name_label")}</label>
                                <input
                                    class="login-input"
                                    type="text"
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                                <label class="login-label">{move || t(lang.get(), "phone_label")}</label>
                                <input
                                    class="login-input"
                                    type="tel"
                                    prop:value=move || signup_phone.get()
                                    on:input=move |ev| signup_phone.set(event_target_value(&ev))
                                />
                                <label class="login-label">{move || t(lang.get(), "role_label")}</label>
                                <select
                                    class="login-input"
                                    prop:value=move || signup_role.get().as_str()
                                    on:change=move |ev| {
                                        if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                            signup_role.set(role);
                                        }
                                    }
                                >
                                    {SIGNUP_ROLES
                                        .iter()
                                        .map(|&role| {
                                            view! {
                                                <option value=role.as_str() selected=move || signup_role.get() == role>
                                                    {move || t(lang.get(), role.label_key())}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                                <button class="login-button" type="submit" disabled=pending>
                                    {move || t(lang.get(), "signup_btn")}
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_login.clone()>
                        <label class="login-label">{move || t(lang.get(), "phone_label")}</label>
                        <input
                            class="login-input"
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=pending>
                            {move || t(lang.get(), "login_btn")}
                        </button>
                    </form>
                </Show>
                {move || {
                    error.get().map(|key| view! { <p class="login-message login-message--error">{t(lang.get(), key)}</p> })
                }}
                {move || info.get().map(|key| view! { <p class="login-message">{t(lang.get(), key)}</p> })}
            </div>
        </div>
    }
}
