//! Doctor dashboard: look up a worker by health ID and append a record.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page state lives in a local `RwSignal<DoctorState>`; the transitions are
//! tested in `state::doctor`. This module only wires them to requests.

use leptos::prelude::*;

use crate::components::history_modal::HistoryModal;
use crate::components::navbar::Navbar;
use crate::i18n::{Language, t};
use crate::net::api::ClinicApi;
use crate::net::types::Patient;
use crate::state::doctor::{BLOOD_GROUPS, DoctorState, FlashKind, TEXT_FIELDS};
use crate::util::dates;

#[component]
pub fn DoctorPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let api = expect_context::<ClinicApi>();
    let state = RwSignal::new(DoctorState::default());
    let busy = move || state.get().busy;

    let on_lookup = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let mut started = None;
            state.update(|s| started = s.begin_lookup().ok());
            let Some(health_id) = started else {
                return;
            };

            #[cfg(feature = "csr")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    let result = api.get_patient(&health_id).await;
                    state.update(|s| s.apply_lookup(health_id, result));
                });
            }
            #[cfg(not(feature = "csr"))]
            let _ = (&api, health_id);
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let today = dates::today_iso();
        let mut started = None;
        state.update(|s| started = s.begin_save(today.as_deref()).ok());
        let Some(request) = started else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let saved = api.add_record(&request).await;
                let mut refresh = None;
                state.update(|s| refresh = s.apply_save(saved));
                if let Some(health_id) = refresh {
                    let result = api.get_patient(&health_id).await;
                    state.update(|s| s.apply_refresh(health_id, result));
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&api, request);
    };

    let close_history = Callback::new(move |()| state.update(|s| s.show_history = false));

    view! {
        <div class="doctor-page">
            <Navbar title_key="welcome_doctor"/>
            <main class="doctor-page__body">
                <section class="card lookup-card">
                    <h2>{move || t(lang.get(), "patient_lookup")}</h2>
                    <form class="lookup-form" on:submit=on_lookup>
                        <input
                            class="lookup-form__input"
                            type="text"
                            placeholder=move || t(lang.get(), "your_hid")
                            prop:value=move || state.with(|s| s.health_id_input.clone())
                            on:input=move |ev| state.update(|s| s.health_id_input = event_target_value(&ev))
                        />
                        <button class="lookup-form__button" type="submit" disabled=busy>
                            {move || t(lang.get(), "fetch_btn")}
                        </button>
                    </form>
                </section>

                {move || {
                    state
                        .with(|s| s.flash)
                        .map(|flash| {
                            let class = match flash.kind {
                                FlashKind::Success => "flash flash--success",
                                FlashKind::Error => "flash flash--error",
                            };
                            view! { <p class=class>{move || t(lang.get(), flash.key)}</p> }
                        })
                }}

                <Show when=move || state.with(|s| s.patient.is_some())>
                    <PatientCard state/>
                    <section class="card record-card">
                        <h2>{move || t(lang.get(), "create_report")}</h2>
                        <form class="record-form" on:submit=on_save.clone()>
                            <label class="record-form__label">{move || t(lang.get(), "blood_group")}</label>
                            <select
                                class="record-form__input"
                                prop:value=move || state.with(|s| s.draft.blood_group.clone())
                                on:change=move |ev| state.update(|s| s.draft.blood_group = event_target_value(&ev))
                            >
                                <option value="">"-"</option>
                                {BLOOD_GROUPS
                                    .iter()
                                    .map(|&group| {
                                        view! {
                                            <option
                                                value=group
                                                selected=move || state.with(|s| s.draft.blood_group == group)
                                            >
                                                {group}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                            {TEXT_FIELDS.iter().map(|&key| view! { <DraftTextArea state key/> }).collect_view()}
                            <label class="record-form__label">
                                {move || t(lang.get(), "next_visit")}
                                " ("
                                {move || t(lang.get(), "optional")}
                                ")"
                            </label>
                            <input
                                class="record-form__input"
                                type="date"
                                min=move || dates::today_iso().unwrap_or_default()
                                prop:value=move || state.with(|s| s.draft.next_visit.clone())
                                on:input=move |ev| state.update(|s| s.draft.next_visit = event_target_value(&ev))
                            />
                            <button class="record-form__submit" type="submit" disabled=busy>
                                {move || t(lang.get(), "save_record")}
                            </button>
                        </form>
                    </section>
                </Show>

                <Show when=move || state.with(|s| s.show_history)>
                    {move || {
                        let records = state.with_untracked(|s| s.history().to_vec());
                        view! { <HistoryModal records on_close=close_history/> }
                    }}
                </Show>
            </main>
        </div>
    }
}

#[component]
fn PatientCard(state: RwSignal<DoctorState>) -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let field = move |f: fn(&Patient) -> String| {
        move || state.with(|s| s.patient.as_ref().map(f).unwrap_or_default())
    };
    let has_history = move || state.with(|s| !s.history().is_empty());

    view! {
        <section class="card patient-card">
            <h2 class="patient-card__name">{field(|p| p.name.clone())}</h2>
            <p class="patient-card__meta">
                <span>{move || t(lang.get(), "your_hid")}": "</span>
                {move || state.with(|s| s.patient_id.clone().unwrap_or_default())}
            </p>
            <p class="patient-card__meta">
                <span>{move || t(lang.get(), "phone_label")}": "</span>
                {field(|p| p.phone.clone())}
            </p>
            <p class="patient-card__meta">
                <span>{move || t(lang.get(), "language_label")}": "</span>
                {field(|p| Language::parse(&p.language).map_or_else(|| p.language.clone(), |l| l.native_name().to_owned()))}
            </p>
            <button
                class="patient-card__history"
                disabled=move || !has_history()
                on:click=move |_| state.update(|s| s.show_history = true)
            >
                {move || t(lang.get(), "view_previous_reports")}
            </button>
        </section>
    }
}

#[component]
fn DraftTextArea(state: RwSignal<DoctorState>, key: &'static str) -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();

    view! {
        <label class="record-form__label">{move || t(lang.get(), key)}</label>
        <textarea
            class="record-form__input record-form__input--text"
            prop:value=move || state.with(|s| s.draft.field(key).unwrap_or_default().to_owned())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                state.update(|s| {
                    if let Some(slot) = s.draft.field_mut(key) {
                        *slot = value;
                    }
                });
            }
        ></textarea>
    }
}
