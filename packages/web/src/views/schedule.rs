//! Schedule day view and appointment forms.
//!
//! The day view renders the 07:00–23:00 time grid; picking another date
//! only refilters the already-fetched collection.

use api::payloads::SchedulePayload;
use api::{Client, ClientLocation, Schedule};
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, DateField, Drawer, EmptyState, Loading, NumberField, SelectField,
    TextareaField, TimeField,
};
use ui::{use_auth, use_feedback, DayGrid, Feedback};
use validator::Validate;

use super::{authed_api, first_validation_message, non_empty, parse_date, parse_time, today};
use crate::Route;

#[component]
pub fn ScheduleDay() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut all = use_signal(Vec::<Schedule>::new);
    let mut clients = use_signal(Vec::<Client>::new);
    let mut loaded = use_signal(|| false);
    let mut day = use_signal(|| today().to_string());
    let mut preview = use_signal(|| Option::<i64>::None);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        let (schedule, client_list) = futures::join!(api.list_schedule(), api.list_clients());
        match schedule {
            Ok(list) => all.set(list),
            Err(err) => feedback.set(Feedback::error(err)),
        }
        match client_list {
            Ok(list) => clients.set(list),
            Err(err) => tracing::warn!("failed to load clients for the agenda: {err}"),
        }
        loaded.set(true);
    });

    let selected_day = parse_date(&day()).unwrap_or_else(today);
    // Attach client records the backend didn't embed, so blocks show names.
    let appointments: Vec<Schedule> = Schedule::for_day(&all(), selected_day)
        .into_iter()
        .map(|mut appointment| {
            if appointment.client.is_none() {
                appointment.client = clients()
                    .iter()
                    .find(|c| c.id == appointment.client_id)
                    .cloned();
            }
            appointment
        })
        .collect();

    rsx! {
        div {
            class: "page-header",
            h1 { "Agenda" }
            Button {
                onclick: move |_| { nav.push(Route::ScheduleNew {}); },
                "Marcar sessão"
            }
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
                appointments: appointments.clone(),
                on_select: move |id| preview.set(Some(id)),
            }
        }

        {
            let selected = preview().and_then(|id| appointments.iter().find(|a| a.id == id).cloned());
            rsx! {
                Drawer {
                    open: selected.is_some(),
                    title: "Sessão",
                    on_close: move |_| preview.set(None),
                    if let Some(appointment) = selected {
                        p {
                            class: "detail-owner",
                            {
                                appointment
                                    .client
                                    .as_ref()
                                    .map(|c| c.full_name())
                                    .unwrap_or_else(|| format!("Cliente #{}", appointment.client_id))
                            }
                        }
                        p { {format!("{} às {}", appointment.date, appointment.time.format("%H:%M"))} }
                        p { "{appointment.duration_min} minutos" }
                        if let Some(notes) = appointment.notes.clone() {
                            p { class: "detail-notes", "{notes}" }
                        }
                        div {
                            class: "form-actions",
                            Button {
                                onclick: {
                                    let id = appointment.id;
                                    move |_| { nav.push(Route::ScheduleEdit { id }); }
                                },
                                "Editar"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ScheduleNew() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();

    rsx! {
        div {
            class: "page-header",
            h1 { "Marcar sessão" }
        }
        ScheduleForm {
            existing: None,
            on_submit: move |payload: SchedulePayload| {
                spawn(async move {
                    let api = authed_api(&auth());
                    match api.create_schedule(&payload).await {
                        Ok(()) => { nav.push(Route::ScheduleDay {}); }
                        Err(err) => feedback.set(Feedback::error(err)),
                    }
                });
            },
        }
    }
}

#[component]
pub fn ScheduleEdit(id: i64) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut appointment = use_signal(|| Option::<Schedule>::None);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        match api.get_schedule(id).await {
            Ok(record) => appointment.set(Some(record)),
            Err(err) => feedback.set(Feedback::error(err)),
        }
        loaded.set(true);
    });

    let handle_delete = move |_| {
        spawn(async move {
            let api = authed_api(&auth());
            match api.delete_schedule(id).await {
                Ok(()) => { nav.push(Route::ScheduleDay {}); }
                Err(err) => feedback.set(Feedback::error(err)),
            }
        });
    };

    if !loaded() {
        return rsx! { Loading {} };
    }
    let Some(record) = appointment() else {
        return rsx! { EmptyState { message: "Sessão não encontrada." } };
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "Editar sessão" }
            Button {
                variant: ButtonVariant::Danger,
                onclick: handle_delete,
                "Desmarcar"
            }
        }
        ScheduleForm {
            existing: Some(record),
            on_submit: move |payload: SchedulePayload| {
                spawn(async move {
                    let api = authed_api(&auth());
                    match api.update_schedule(id, &payload).await {
                        Ok(()) => { nav.push(Route::ScheduleDay {}); }
                        Err(err) => feedback.set(Feedback::error(err)),
                    }
                });
            },
        }
    }
}

#[component]
fn ScheduleForm(existing: Option<Schedule>, on_submit: EventHandler<SchedulePayload>) -> Element {
    let auth = use_auth();
    let mut feedback = use_feedback();
    let mut clients = use_signal(Vec::<Client>::new);
    let mut locations = use_signal(Vec::<ClientLocation>::new);

    let mut client_id = use_signal({
        let initial = existing
            .as_ref()
            .map(|s| s.client_id.to_string())
            .unwrap_or_default();
        move || initial
    });
    let mut date = use_signal({
        let initial = existing
            .as_ref()
            .map(|s| s.date.to_string())
            .unwrap_or_else(|| today().to_string());
        move || initial
    });
    let mut time = use_signal({
        let initial = existing
            .as_ref()
            .map(|s| s.time.format("%H:%M").to_string())
            .unwrap_or_default();
        move || initial
    });
    let mut duration = use_signal({
        let initial = existing
            .as_ref()
            .map(|s| s.duration_min.to_string())
            .unwrap_or_else(|| "60".to_string());
        move || initial
    });
    let mut location_id = use_signal({
        let initial = existing
            .as_ref()
            .and_then(|s| s.location_id)
            .map(|id| id.to_string())
            .unwrap_or_default();
        move || initial
    });
    let mut notes = use_signal({
        let initial = existing
            .as_ref()
            .and_then(|s| s.notes.clone())
            .unwrap_or_default();
        move || initial
    });

    let _lookups = use_resource(move || async move {
        let api = authed_api(&auth());
        let (client_list, location_list) = futures::join!(api.list_clients(), api.list_locations());
        if let Ok(list) = client_list {
            clients.set(list);
        }
        if let Ok(list) = location_list {
            locations.set(list);
        }
    });

    let handle_submit = move |_| {
        let Some(parsed_date) = parse_date(&date()) else {
            feedback.set(Feedback::error("escolha um dia"));
            return;
        };
        let Some(parsed_time) = parse_time(&time()) else {
            feedback.set(Feedback::error("escolha uma hora"));
            return;
        };
        let payload = SchedulePayload {
            client_id: client_id().parse().unwrap_or_default(),
            date: parsed_date,
            time: parsed_time,
            duration_min: duration().parse().unwrap_or_default(),
            location_id: location_id().parse().ok(),
            notes: non_empty(notes()),
        };
        if let Err(errors) = payload.validate() {
            feedback.set(Feedback::error(first_validation_message(&errors)));
            return;
        }
        on_submit.call(payload);
    };

    let client_options: Vec<(String, String)> =
        std::iter::once((String::new(), "Escolher cliente".to_string()))
            .chain(clients().into_iter().map(|c| (c.id.to_string(), c.full_name())))
            .collect();
    let location_options: Vec<(String, String)> = std::iter::once((String::new(), "—".to_string()))
        .chain(locations().into_iter().map(|l| (l.id.to_string(), l.name)))
        .collect();

    rsx! {
        div {
            class: "form-card",
            SelectField {
                label: "Cliente",
                value: client_id(),
                options: client_options,
                onchange: move |evt: FormEvent| client_id.set(evt.value()),
            }
            div {
                class: "form-grid",
                DateField {
                    label: "Dia",
                    value: date(),
                    oninput: move |evt: FormEvent| date.set(evt.value()),
                }
                TimeField {
                    label: "Hora",
                    value: time(),
                    oninput: move |evt: FormEvent| time.set(evt.value()),
                }
                NumberField {
                    label: "Duração (min)",
                    value: duration(),
                    oninput: move |evt: FormEvent| duration.set(evt.value()),
                }
                SelectField {
                    label: "Local",
                    value: location_id(),
                    options: location_options,
                    onchange: move |evt: FormEvent| location_id.set(evt.value()),
                }
            }
            TextareaField {
                label: "Notas",
                value: notes(),
                oninput: move |evt: FormEvent| notes.set(evt.value()),
            }
            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: handle_submit,
                    "Guardar"
                }
            }
        }
    }
}
