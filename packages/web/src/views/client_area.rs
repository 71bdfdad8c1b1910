//! Client area: read-only views of the signed-in client's own data.
//!
//! The cached user id is an account id; the client record it belongs to is
//! only known after fetching the account, so every page here chains that
//! lookup before the data fetch.

use api::{Invoice, Measurement, Payment, Schedule, Workout};
use chrono::NaiveDate;
use dioxus::prelude::*;
use ui::components::{DataTable, DateField, EmptyState, Loading};
use ui::{use_auth, use_feedback, DayGrid, Feedback};

use super::{authed_api, parse_date, today};
use crate::Route;

/// Resolve the signed-in account's client record id.
async fn own_client_id(auth: &ui::AuthState) -> Option<i64> {
    let session = auth.session.as_ref()?;
    let api = authed_api(auth);
    match api.get_user(&session.user_id).await {
        Ok(user) => user.client_id,
        Err(err) => {
            tracing::error!("failed to resolve own client record: {err}");
            None
        }
    }
}

#[component]
pub fn ClientInicio() -> Element {
    let auth = use_auth();
    let mut feedback = use_feedback();
    let mut upcoming = use_signal(Vec::<Schedule>::new);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let Some(client_id) = own_client_id(&auth()).await else {
            loaded.set(true);
            return;
        };
        let api = authed_api(&auth());
        match api.list_schedule().await {
            Ok(all) => {
                let mut own: Vec<Schedule> = all
                    .into_iter()
                    .filter(|s| s.client_id == client_id && s.date >= today())
                    .collect();
                own.sort_by(api::models::by_date_time);
                own.truncate(5);
                upcoming.set(own);
            }
            Err(err) => feedback.set(Feedback::error(err)),
        }
        loaded.set(true);
    });

    rsx! {
        div {
            class: "page-header",
            h1 { "Início" }
        }

        section {
            class: "home-section",
            h2 { "Próximas sessões" }
            if !loaded() {
                Loading {}
            } else if upcoming().is_empty() {
                EmptyState { message: "Sem sessões marcadas." }
            } else {
                DataTable {
                    headers: vec!["Dia", "Hora", "Duração"],
                    for appointment in upcoming() {
                        tr {
                            key: "{appointment.id}",
                            td { "{appointment.date}" }
                            td { {appointment.time.format("%H:%M").to_string()} }
                            td { "{appointment.duration_min} min" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ClientAgenda() -> Element {
    let auth = use_auth();
    let mut feedback = use_feedback();
    let mut own = use_signal(Vec::<Schedule>::new);
    let mut loaded = use_signal(|| false);
    let mut day = use_signal(|| today().to_string());

    let _loader = use_resource(move || async move {
        let Some(client_id) = own_client_id(&auth()).await else {
            loaded.set(true);
            return;
        };
        let api = authed_api(&auth());
        match api.list_schedule().await {
            Ok(all) => own.set(all.into_iter().filter(|s| s.client_id == client_id).collect()),
            Err(err) => feedback.set(Feedback::error(err)),
        }
        loaded.set(true);
    });

    let selected_day: NaiveDate = parse_date(&day()).unwrap_or_else(today);
    let appointments = Schedule::for_day(&own(), selected_day);

    rsx! {
        div {
            class: "page-header",
            h1 { "A minha agenda" }
        }

        DateField {
            label: "Dia",
            value: day(),
            oninput: move |evt: FormEvent| day.set(evt.value()),
        }

        if !loaded() {
            Loading {}
        } else if appointments.is_empty() {
            EmptyState { message: "Sem sessões neste dia." }
        } else {
            DayGrid {
                appointments,
                on_select: move |_| {},
            }
        }
    }
}

#[component]
pub fn ClientTreinos() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut workouts = use_signal(Vec::<Workout>::new);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let Some(client_id) = own_client_id(&auth()).await else {
            loaded.set(true);
            return;
        };
        let api = authed_api(&auth());
        match api.list_client_workouts(client_id).await {
            Ok(list) => workouts.set(list),
            Err(err) => feedback.set(Feedback::error(err)),
        }
        loaded.set(true);
    });

    rsx! {
        div {
            class: "page-header",
            h1 { "Os meus treinos" }
        }
        if !loaded() {
            Loading {}
        } else if workouts().is_empty() {
            EmptyState { message: "Ainda não tem planos atribuídos." }
        } else {
            DataTable {
                headers: vec!["Nome", "Exercícios"],
                for workout in workouts() {
                    tr {
                        key: "{workout.id}",
                        onclick: {
                            let id = workout.id;
                            move |_| { nav.push(Route::ClientTreinoDetail { id }); }
                        },
                        td { "{workout.name}" }
                        td { {workout.exercises.len().to_string()} }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ClientTreinoDetail(id: i64) -> Element {
    let auth = use_auth();
    let mut feedback = use_feedback();
    let mut workout = use_signal(|| Option::<Workout>::None);
    let mut catalogue = use_signal(Vec::<api::Exercise>::new);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        let (record, exercises) = futures::join!(api.get_workout(id), api.list_exercises());
        match record {
            Ok(record) => workout.set(Some(record)),
            Err(err) => feedback.set(Feedback::error(err)),
        }
        if let Ok(list) = exercises {
            catalogue.set(list);
        }
        loaded.set(true);
    });

    if !loaded() {
        return rsx! { Loading {} };
    }
    let Some(record) = workout() else {
        return rsx! { EmptyState { message: "Plano não encontrado." } };
    };

    let mut ordered = record.exercises.clone();
    ordered.sort_by_key(|e| e.order);

    rsx! {
        div {
            class: "page-header",
            h1 { "{record.name}" }
        }
        if let Some(notes) = record.notes {
            p { class: "detail-notes", "{notes}" }
        }

        for item in ordered {
            {
                let exercise = item.exercise.clone().or_else(|| {
                    catalogue().into_iter().find(|e| e.id == item.exercise_id)
                });
                let name = exercise
                    .as_ref()
                    .map(|e| e.name.clone())
                    .unwrap_or_else(|| format!("Exercício #{}", item.exercise_id));
                let kinds = exercise
                    .as_ref()
                    .map(|e| e.measurement_kinds())
                    .unwrap_or_default();
                rsx! {
                    div {
                        key: "{item.order}",
                        class: "builder-entry",
                        div {
                            class: "builder-entry-header",
                            span { class: "builder-entry-name", "{name}" }
                        }
                        table {
                            class: "builder-sets",
                            thead {
                                tr {
                                    th { "Série" }
                                    for kind in kinds.clone() {
                                        th { {kind.label()} }
                                    }
                                }
                            }
                            tbody {
                                for set in item.sets.clone() {
                                    tr {
                                        key: "{set.set_number}",
                                        td { "{set.set_number}" }
                                        for kind in kinds.clone() {
                                            td {
                                                {
                                                    match kind {
                                                        api::MeasurementKind::Reps => set.reps.map(|v| v.to_string()),
                                                        api::MeasurementKind::Weight => set.weight_kg.map(|v| format!("{v:.1}")),
                                                        api::MeasurementKind::Time => set.time_sec.map(|v| v.to_string()),
                                                        api::MeasurementKind::Distance => set.distance_m.map(|v| format!("{v:.0}")),
                                                    }
                                                    .unwrap_or_else(|| "—".to_string())
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ClientAvaliacoes() -> Element {
    let auth = use_auth();
    let mut feedback = use_feedback();
    let mut measurements = use_signal(Vec::<Measurement>::new);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let Some(client_id) = own_client_id(&auth()).await else {
            loaded.set(true);
            return;
        };
        let api = authed_api(&auth());
        match api.list_client_measurements(client_id).await {
            Ok(mut list) => {
                list.sort_by(|a, b| b.date.cmp(&a.date));
                measurements.set(list);
            }
            Err(err) => feedback.set(Feedback::error(err)),
        }
        loaded.set(true);
    });

    rsx! {
        div {
            class: "page-header",
            h1 { "As minhas avaliações" }
        }
        if !loaded() {
            Loading {}
        } else if measurements().is_empty() {
            EmptyState { message: "Ainda não tem avaliações registadas." }
        } else {
            DataTable {
                headers: vec!["Data", "Peso", "Massa gorda"],
                for measurement in measurements() {
                    tr {
                        key: "{measurement.id}",
                        td { "{measurement.date}" }
                        td { {format!("{:.1} kg", measurement.weight_kg)} }
                        td {
                            {
                                measurement
                                    .body_fat_pct
                                    .map(|v| format!("{v:.1} %"))
                                    .unwrap_or_else(|| "—".to_string())
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ClientFaturas() -> Element {
    let auth = use_auth();
    let mut feedback = use_feedback();
    let mut invoices = use_signal(Vec::<Invoice>::new);
    let mut payments = use_signal(Vec::<Payment>::new);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let Some(client_id) = own_client_id(&auth()).await else {
            loaded.set(true);
            return;
        };
        let api = authed_api(&auth());
        let (invoice_list, payment_list) = futures::join!(
            api.list_client_invoices(client_id),
            api.list_client_payments(client_id)
        );
        match invoice_list {
            Ok(mut list) => {
                list.sort_by(api::models::by_due_date);
                invoices.set(list);
            }
            Err(err) => feedback.set(Feedback::error(err)),
        }
        if let Ok(list) = payment_list {
            payments.set(list);
        }
        loaded.set(true);
    });

    if !loaded() {
        return rsx! { Loading {} };
    }

    rsx! {
        div {
            class: "page-header",
            h1 { "As minhas faturas" }
        }

        if invoices().is_empty() {
            EmptyState { message: "Sem faturas." }
        } else {
            DataTable {
                headers: vec!["Vencimento", "Total", "Pago", "Estado"],
                for invoice in invoices() {
                    {
                        let own_payments: Vec<Payment> = payments()
                            .into_iter()
                            .filter(|p| p.invoice_id == invoice.id)
                            .collect();
                        let paid = invoice.paid_total(&own_payments);
                        rsx! {
                            tr {
                                key: "{invoice.id}",
                                td { "{invoice.due_date}" }
                                td { {format!("{:.2} €", invoice.total)} }
                                td { {format!("{paid:.2} €")} }
                                td { {invoice.status.label()} }
                            }
                        }
                    }
                }
            }
        }
    }
}
