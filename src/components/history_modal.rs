//! Modal listing a patient's previous medical records.

use leptos::prelude::*;

use crate::i18n::{Language, t};
use crate::net::types::MedicalRecord;
use crate::state::worker::{field_value, last_updated, summary_rows};

/// Fullscreen modal with one card per record, newest first.
#[component]
pub fn HistoryModal(records: Vec<MedicalRecord>, on_close: Callback<()>) -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let body = if records.is_empty() {
        view! { <p class="history-modal__empty">{move || t(lang.get(), "no_records")}</p> }.into_any()
    } else {
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| view! { <HistoryCard record recent=index == 0/> })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="history-modal__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="history-modal"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="history-modal__header">
                    <h2>{move || t(lang.get(), "post_history")}</h2>
                    <button class="history-modal__close" on:click=move |_| on_close.run(())>
                        {move || t(lang.get(), "close")}
                    </button>
                </div>
                <div class="history-modal__list">{body}</div>
            </div>
        </div>
    }
}

#[component]
fn HistoryCard(record: MedicalRecord, recent: bool) -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let date = last_updated(&record).unwrap_or_default().to_owned();
    let doctor = record.doctor_id.clone();
    let rows: Vec<(&'static str, Option<String>)> = summary_rows(&record)
        .into_iter()
        .map(|(key, value)| (key, field_value(value).map(str::to_owned)))
        .collect();

    view! {
        <article class=card_class(recent)>
            <header class="history-card__header">
                <span class="history-card__date">{date}</span>
                <Show when=move || recent>
                    <span class="history-card__badge">{move || t(lang.get(), "recent_history")}</span>
                </Show>
                {doctor
                    .map(|id| {
                        view! {
                            <span class="history-card__doctor">
                                {move || t(lang.get(), "doctor_prefix")}
                                " "
                                {id}
                            </span>
                        }
                    })}
            </header>
            <dl class="history-card__fields">
                {rows
                    .into_iter()
                    .map(|(key, value)| {
                        view! {
                            <dt>{move || t(lang.get(), key)}</dt>
                            <dd>{move || value.clone().unwrap_or_else(|| t(lang.get(), "nil_value").to_owned())}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
        </article>
    }
}

fn card_class(recent: bool) -> &'static str {
    if recent { "history-card history-card--recent" } else { "history-card" }
}
