//! Trainer dashboard: today's appointments next to the unpaid invoices.
//! The two fetches are independent, so they run concurrently.

use api::models::by_due_date;
use api::{Invoice, Schedule};
use dioxus::prelude::*;
use ui::components::{DataTable, EmptyState, Loading};
use ui::{use_auth, use_feedback, Feedback};

use super::{authed_api, today};
use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut appointments = use_signal(Vec::<Schedule>::new);
    let mut unpaid = use_signal(Vec::<Invoice>::new);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        let (schedule, invoices) = futures::join!(api.list_schedule(), api.list_unpaid_invoices());
        match schedule {
            Ok(all) => appointments.set(Schedule::for_day(&all, today())),
            Err(err) => feedback.set(Feedback::error(err)),
        }
        match invoices {
            Ok(mut list) => {
                list.sort_by(by_due_date);
                unpaid.set(list);
            }
            Err(err) => feedback.set(Feedback::error(err)),
        }
        loaded.set(true);
    });

    if !loaded() {
        return rsx! { Loading {} };
    }

    rsx! {
        div {
            class: "page-header",
            h1 { "Início" }
        }

        section {
            class: "home-section",
            h2 { "Sessões de hoje" }
            if appointments().is_empty() {
                EmptyState { message: "Sem sessões marcadas para hoje." }
            } else {
                DataTable {
                    headers: vec!["Hora", "Cliente", "Duração"],
                    for appointment in appointments() {
                        tr {
                            key: "{appointment.id}",
                            onclick: {
                                let id = appointment.id;
                                move |_| { nav.push(Route::ScheduleEdit { id }); }
                            },
                            td { {appointment.time.format("%H:%M").to_string()} }
                            td {
                                {
                                    appointment
                                        .client
                                        .as_ref()
                                        .map(|c| c.full_name())
                                        .unwrap_or_else(|| format!("Cliente #{}", appointment.client_id))
                                }
                            }
                            td { "{appointment.duration_min} min" }
                        }
                    }
                }
            }
        }

        section {
            class: "home-section",
            h2 { "Faturas por cobrar" }
            if unpaid().is_empty() {
                EmptyState { message: "Tudo cobrado." }
            } else {
                DataTable {
                    headers: vec!["Vencimento", "Cliente", "Total", "Estado"],
                    for invoice in unpaid() {
                        tr {
                            key: "{invoice.id}",
                            onclick: {
                                let id = invoice.id;
                                move |_| { nav.push(Route::InvoiceDetail { id }); }
                            },
                            td { "{invoice.due_date}" }
                            td { "Cliente #{invoice.client_id}" }
                            td { {format!("{:.2} €", invoice.total)} }
                            td { {invoice.status.label()} }
                        }
                    }
                }
            }
        }
    }
}
