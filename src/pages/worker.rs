//! Worker dashboard: own health ID, latest record summary and notifications.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::i18n::{Language, t};
use crate::net::api::ClinicApi;
use crate::net::types::{MedicalRecord, Notification, WorkerDashboard};
use crate::state::worker::{WorkerView, field_value, last_updated, ordered_notifications, summary_rows};

#[component]
pub fn WorkerPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let api = expect_context::<ClinicApi>();
    let view_state = RwSignal::new(WorkerView::Loading);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = api.worker_dashboard().await;
        view_state.set(WorkerView::from_result(result));
    });
    #[cfg(not(feature = "csr"))]
    let _ = api;

    view! {
        <div class="worker-page">
            <Navbar title_key="welcome_worker"/>
            <main class="worker-page__body">
                {move || match view_state.get() {
                    WorkerView::Loading => {
                        view! { <p class="worker-page__status">{move || t(lang.get(), "loading")}</p> }.into_any()
                    }
                    WorkerView::Failed => {
                        view! { <p class="flash flash--error">{move || t(lang.get(), "conn_error")}</p> }.into_any()
                    }
                    WorkerView::Ready(dashboard) => view! { <DashboardBody dashboard/> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn DashboardBody(dashboard: WorkerDashboard) -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let WorkerDashboard { health_id, medical_record, notifications } = dashboard;
    let health_id = field_value(health_id.as_deref()).map(str::to_owned);

    view! {
        <section class="card hid-card">
            <h2>{move || t(lang.get(), "your_hid")}</h2>
            <p class="hid-card__value">
                {move || health_id.clone().unwrap_or_else(|| t(lang.get(), "nil_value").to_owned())}
            </p>
        </section>
        <ReportSummary record=medical_record.unwrap_or_default()/>
        <NotificationList notifications/>
    }
}

#[component]
fn ReportSummary(record: MedicalRecord) -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let updated = last_updated(&record).map(str::to_owned);
    let rows: Vec<(&'static str, Option<String>)> = summary_rows(&record)
        .into_iter()
        .map(|(key, value)| (key, field_value(value).map(str::to_owned)))
        .collect();

    view! {
        <section class="card report-card">
            <h2>{move || t(lang.get(), "report_summary")}</h2>
            <dl class="report-card__fields">
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
            {updated
                .map(|date| {
                    view! {
                        <p class="report-card__updated">
                            {move || t(lang.get(), "last_updated")}
                            ": "
                            {date}
                        </p>
                    }
                })}
        </section>
    }
}

#[component]
fn NotificationList(notifications: Vec<Notification>) -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let unread = notifications.iter().filter(|n| !n.is_read).count();
    let items: Vec<(String, bool)> = ordered_notifications(&notifications)
        .into_iter()
        .map(|n| (n.message.clone(), n.is_read))
        .collect();

    let body = if items.is_empty() {
        view! { <p class="notifications__empty">{move || t(lang.get(), "no_notifs")}</p> }.into_any()
    } else {
        view! {
            <ul class="notifications__list">
                {items
                    .into_iter()
                    .map(|(message, is_read)| {
                        view! {
                            <li class=notification_class(is_read)>
                                <span class="notifications__tag">{move || t(lang.get(), "doc_update")}</span>
                                <span class="notifications__message">{message}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <section class="card notifications">
            <h2>
                {move || t(lang.get(), "my_notifications")}
                <span class="notifications__count">{unread}</span>
            </h2>
            {body}
        </section>
    }
}

fn notification_class(is_read: bool) -> &'static str {
    if is_read { "notifications__item" } else { "notifications__item notifications__item--unread" }
}
