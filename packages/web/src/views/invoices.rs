//! Invoicing: listings, the payment ledger, and the register-payment form.
//!
//! Paid/pending totals are derived client-side from the payment list; the
//! invoice status itself is computed by the backend and only displayed.

use api::models::by_due_date;
use api::payloads::{InvoicePayload, PaymentPayload};
use api::{Client, Invoice, InvoiceStatus, Payment};
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, DataTable, DateField, EmptyState, Loading, NumberField, SelectField,
    TextField, TextareaField,
};
use ui::filters::by_status;
use ui::{use_auth, use_feedback, Feedback};
use validator::Validate;

use super::{authed_api, first_validation_message, non_empty, parse_date, today};
use crate::Route;

const STATUS_FILTERS: [(InvoiceStatus, &str); 4] = [
    (InvoiceStatus::Pending, "Pendentes"),
    (InvoiceStatus::Paid, "Pagas"),
    (InvoiceStatus::Overdue, "Vencidas"),
    (InvoiceStatus::Cancelled, "Anuladas"),
];

fn status_from_filter(value: &str) -> Option<InvoiceStatus> {
    STATUS_FILTERS
        .iter()
        .find(|(_, key)| *key == value)
        .map(|(status, _)| *status)
}

#[component]
pub fn Invoices() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut invoices = use_signal(Vec::<Invoice>::new);
    let mut loaded = use_signal(|| false);
    let mut status_filter = use_signal(String::new);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        match api.list_invoices().await {
            Ok(mut list) => {
                list.sort_by(by_due_date);
                invoices.set(list);
            }
            Err(err) => feedback.set(Feedback::error(err)),
        }
        loaded.set(true);
    });

    let filtered = by_status(&invoices(), status_from_filter(&status_filter()));

    let status_options: Vec<(String, String)> =
        std::iter::once((String::new(), "Todas".to_string()))
            .chain(
                STATUS_FILTERS
                    .iter()
                    .map(|(_, label)| (label.to_string(), label.to_string())),
            )
            .collect();

    rsx! {
        div {
            class: "page-header",
            h1 { "Faturas" }
            div {
                class: "page-header-actions",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| { nav.push(Route::UnpaidInvoices {}); },
                    "Por cobrar"
                }
                Button {
                    onclick: move |_| { nav.push(Route::InvoiceNew {}); },
                    "Nova fatura"
                }
            }
        }

        SelectField {
            label: "Estado",
            value: status_filter(),
            options: status_options,
            onchange: move |evt: FormEvent| status_filter.set(evt.value()),
        }

        if !loaded() {
            Loading {}
        } else if filtered.is_empty() {
            EmptyState { message: "Sem faturas para mostrar." }
        } else {
            InvoiceTable { invoices: filtered }
        }
    }
}

#[component]
pub fn UnpaidInvoices() -> Element {
    let auth = use_auth();
    let mut feedback = use_feedback();
    let mut invoices = use_signal(Vec::<Invoice>::new);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        match api.list_unpaid_invoices().await {
            Ok(mut list) => {
                list.sort_by(by_due_date);
                invoices.set(list);
            }
            Err(err) => feedback.set(Feedback::error(err)),
        }
        loaded.set(true);
    });

    rsx! {
        div {
            class: "page-header",
            h1 { "Faturas por cobrar" }
        }
        if !loaded() {
            Loading {}
        } else if invoices().is_empty() {
            EmptyState { message: "Nada por cobrar." }
        } else {
            InvoiceTable { invoices: invoices() }
        }
    }
}

#[component]
pub fn ClientInvoices(client_id: i64) -> Element {
    let auth = use_auth();
    let mut feedback = use_feedback();
    let mut invoices = use_signal(Vec::<Invoice>::new);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        match api.list_client_invoices(client_id).await {
            Ok(mut list) => {
                list.sort_by(by_due_date);
                invoices.set(list);
            }
            Err(err) => feedback.set(Feedback::error(err)),
        }
        loaded.set(true);
    });

    rsx! {
        div {
            class: "page-header",
            h1 { "Faturas do cliente" }
        }
        if !loaded() {
            Loading {}
        } else if invoices().is_empty() {
            EmptyState { message: "Este cliente não tem faturas." }
        } else {
            InvoiceTable { invoices: invoices() }
        }
    }
}

#[component]
fn InvoiceTable(invoices: Vec<Invoice>) -> Element {
    let nav = use_navigator();
    rsx! {
        DataTable {
            headers: vec!["Emissão", "Vencimento", "Total", "Estado"],
            for invoice in invoices {
                tr {
                    key: "{invoice.id}",
                    onclick: {
                        let id = invoice.id;
                        move |_| { nav.push(Route::InvoiceDetail { id }); }
                    },
                    td { "{invoice.issue_date}" }
                    td { "{invoice.due_date}" }
                    td { {format!("{:.2} €", invoice.total)} }
                    td { {invoice.status.label()} }
                }
            }
        }
    }
}

/// Invoice detail with the payment ledger. Invoice and payments are
/// independent fetches, so they run concurrently.
#[component]
pub fn InvoiceDetail(id: i64) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut invoice = use_signal(|| Option::<Invoice>::None);
    let mut payments = use_signal(Vec::<Payment>::new);
    let mut loaded = use_signal(|| false);
    let mut reload = use_signal(|| 0u32);

    let _loader = use_resource(move || {
        let _ = reload();
        async move {
            let api = authed_api(&auth());
            let (record, ledger) =
                futures::join!(api.get_invoice(id), api.list_invoice_payments(id));
            match record {
                Ok(record) => invoice.set(Some(record)),
                Err(err) => feedback.set(Feedback::error(err)),
            }
            match ledger {
                Ok(list) => payments.set(list),
                Err(err) => feedback.set(Feedback::error(err)),
            }
            loaded.set(true);
        }
    });

    if !loaded() {
        return rsx! { Loading {} };
    }
    let Some(record) = invoice() else {
        return rsx! { EmptyState { message: "Fatura não encontrada." } };
    };

    let paid = record.paid_total(&payments());
    let pending = record.pending_total(&payments());

    rsx! {
        div {
            class: "page-header",
            h1 { "Fatura #{record.id}" }
            Button {
                onclick: move |_| { nav.push(Route::PaymentNew { invoice_id: id }); },
                "Registar pagamento"
            }
        }

        div {
            class: "ledger-summary",
            div {
                class: "ledger-cell",
                span { class: "ledger-label", "Total" }
                span { class: "ledger-value", {format!("{:.2} €", record.total)} }
            }
            div {
                class: "ledger-cell",
                span { class: "ledger-label", "Pago" }
                span { class: "ledger-value ledger-value--paid", {format!("{paid:.2} €")} }
            }
            div {
                class: "ledger-cell",
                span { class: "ledger-label", "Pendente" }
                span { class: "ledger-value ledger-value--pending", {format!("{pending:.2} €")} }
            }
            div {
                class: "ledger-cell",
                span { class: "ledger-label", "Estado" }
                span { class: "ledger-value", {record.status.label()} }
            }
        }

        section {
            class: "home-section",
            h2 { "Pagamentos" }
            if payments().is_empty() {
                EmptyState { message: "Ainda sem pagamentos registados." }
            } else {
                DataTable {
                    headers: vec!["Data", "Valor", "Método", ""],
                    for payment in payments() {
                        tr {
                            key: "{payment.id}",
                            class: if payment.cancelled { "row-inactive" } else { "" },
                            td { "{payment.date}" }
                            td { {format!("{:.2} €", payment.amount)} }
                            td { {payment.method.clone().unwrap_or_else(|| "—".to_string())} }
                            td {
                                if payment.cancelled {
                                    "Anulado"
                                } else {
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Anular pagamento",
                                        onclick: {
                                            let payment_id = payment.id;
                                            move |_| {
                                                spawn(async move {
                                                    let api = authed_api(&auth());
                                                    match api.cancel_payment(payment_id).await {
                                                        Ok(()) => reload += 1,
                                                        Err(err) => feedback.set(Feedback::error(err)),
                                                    }
                                                });
                                            }
                                        },
                                        "Anular"
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
pub fn InvoiceNew() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut clients = use_signal(Vec::<Client>::new);

    let mut client_id = use_signal(String::new);
    let mut issue_date = use_signal(|| today().to_string());
    let mut due_date = use_signal(String::new);
    let mut total = use_signal(String::new);
    let mut notes = use_signal(String::new);

    let _clients = use_resource(move || async move {
        let api = authed_api(&auth());
        if let Ok(list) = api.list_clients().await {
            clients.set(list);
        }
    });

    let handle_submit = move |_| {
        let Some(issued) = parse_date(&issue_date()) else {
            feedback.set(Feedback::error("escolha a data de emissão"));
            return;
        };
        let Some(due) = parse_date(&due_date()) else {
            feedback.set(Feedback::error("escolha a data de vencimento"));
            return;
        };
        let payload = InvoicePayload {
            client_id: client_id().parse().unwrap_or_default(),
            issue_date: issued,
            due_date: due,
            total: total().trim().parse().unwrap_or_default(),
            notes: non_empty(notes()),
        };
        if let Err(errors) = payload.validate() {
            feedback.set(Feedback::error(first_validation_message(&errors)));
            return;
        }
        spawn(async move {
            let api = authed_api(&auth());
            match api.create_invoice(&payload).await {
                Ok(()) => { nav.push(Route::Invoices {}); }
                Err(err) => feedback.set(Feedback::error(err)),
            }
        });
    };

    let client_options: Vec<(String, String)> =
        std::iter::once((String::new(), "Escolher cliente".to_string()))
            .chain(clients().into_iter().map(|c| (c.id.to_string(), c.full_name())))
            .collect();

    rsx! {
        div {
            class: "page-header",
            h1 { "Nova fatura" }
        }
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
                    label: "Emissão",
                    value: issue_date(),
                    oninput: move |evt: FormEvent| issue_date.set(evt.value()),
                }
                DateField {
                    label: "Vencimento",
                    value: due_date(),
                    oninput: move |evt: FormEvent| due_date.set(evt.value()),
                }
                NumberField {
                    label: "Total (€)",
                    value: total(),
                    step: "0.01",
                    oninput: move |evt: FormEvent| total.set(evt.value()),
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
                    "Emitir"
                }
            }
        }
    }
}

#[component]
pub fn PaymentNew(invoice_id: i64) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();

    let mut date = use_signal(|| today().to_string());
    let mut amount = use_signal(String::new);
    let mut method = use_signal(String::new);

    let handle_submit = move |_| {
        let Some(parsed_date) = parse_date(&date()) else {
            feedback.set(Feedback::error("escolha a data do pagamento"));
            return;
        };
        let payload = PaymentPayload {
            invoice_id,
            date: parsed_date,
            amount: amount().trim().parse().unwrap_or_default(),
            method: non_empty(method()),
        };
        if let Err(errors) = payload.validate() {
            feedback.set(Feedback::error(first_validation_message(&errors)));
            return;
        }
        spawn(async move {
            let api = authed_api(&auth());
            match api.create_payment(&payload).await {
                Ok(()) => { nav.push(Route::InvoiceDetail { id: invoice_id }); }
                Err(err) => feedback.set(Feedback::error(err)),
            }
        });
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "Registar pagamento" }
        }
        div {
            class: "form-card",
            div {
                class: "form-grid",
                DateField {
                    label: "Data",
                    value: date(),
                    oninput: move |evt: FormEvent| date.set(evt.value()),
                }
                NumberField {
                    label: "Valor (€)",
                    value: amount(),
                    step: "0.01",
                    oninput: move |evt: FormEvent| amount.set(evt.value()),
                }
                TextField {
                    label: "Método",
                    value: method(),
                    placeholder: "MBWay, transferência...",
                    oninput: move |evt: FormEvent| method.set(evt.value()),
                }
            }
            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: handle_submit,
                    "Registar"
                }
            }
        }
    }
}
