//! Physical-test records: listings, detail and the capture form.

use api::payloads::MeasurementPayload;
use api::{Client, Measurement};
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, DataTable, DateField, EmptyState, Loading, NumberField, SelectField,
    TextareaField,
};
use ui::{use_auth, use_feedback, Feedback};
use validator::Validate;

use super::{authed_api, first_validation_message, non_empty, parse_date, today};
use crate::Route;

fn optional_number(value: String) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse().ok()
    }
}

#[component]
pub fn Measurements() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut measurements = use_signal(Vec::<Measurement>::new);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        match api.list_measurements().await {
            Ok(mut list) => {
                // Newest first.
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
            h1 { "Avaliações físicas" }
            Button {
                onclick: move |_| { nav.push(Route::MeasurementNew {}); },
                "Nova avaliação"
            }
        }

        if !loaded() {
            Loading {}
        } else if measurements().is_empty() {
            EmptyState { message: "Ainda não há avaliações registadas." }
        } else {
            MeasurementTable { measurements: measurements() }
        }
    }
}

#[component]
pub fn ClientMeasurements(client_id: i64) -> Element {
    let auth = use_auth();
    let mut feedback = use_feedback();
    let mut measurements = use_signal(Vec::<Measurement>::new);
    let mut client = use_signal(|| Option::<Client>::None);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        let (list, record) = futures::join!(
            api.list_client_measurements(client_id),
            api.get_client(client_id)
        );
        match list {
            Ok(mut list) => {
                list.sort_by(|a, b| b.date.cmp(&a.date));
                measurements.set(list);
            }
            Err(err) => feedback.set(Feedback::error(err)),
        }
        if let Ok(record) = record {
            client.set(Some(record));
        }
        loaded.set(true);
    });

    let title = client()
        .map(|c| format!("Avaliações de {}", c.full_name()))
        .unwrap_or_else(|| "Avaliações".to_string());

    rsx! {
        div {
            class: "page-header",
            h1 { "{title}" }
        }
        if !loaded() {
            Loading {}
        } else if measurements().is_empty() {
            EmptyState { message: "Este cliente ainda não tem avaliações." }
        } else {
            MeasurementTable { measurements: measurements() }
        }
    }
}

#[component]
fn MeasurementTable(measurements: Vec<Measurement>) -> Element {
    let nav = use_navigator();
    rsx! {
        DataTable {
            headers: vec!["Data", "Peso", "Massa gorda", "Cintura"],
            for measurement in measurements {
                tr {
                    key: "{measurement.id}",
                    onclick: {
                        let id = measurement.id;
                        move |_| { nav.push(Route::MeasurementDetail { id }); }
                    },
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
                    td {
                        {
                            measurement
                                .waist_cm
                                .map(|v| format!("{v:.0} cm"))
                                .unwrap_or_else(|| "—".to_string())
                        }
                    }
                }
            }
        }
    }
}

/// Detail of one test. The client record is only known after the
/// measurement arrives, so the second fetch is chained.
#[component]
pub fn MeasurementDetail(id: i64) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut measurement = use_signal(|| Option::<Measurement>::None);
    let mut client = use_signal(|| Option::<Client>::None);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        match api.get_measurement(id).await {
            Ok(record) => {
                let client_id = record.client_id;
                measurement.set(Some(record));
                match api.get_client(client_id).await {
                    Ok(owner) => client.set(Some(owner)),
                    Err(err) => tracing::warn!("failed to load measurement owner: {err}"),
                }
            }
            Err(err) => feedback.set(Feedback::error(err)),
        }
        loaded.set(true);
    });

    let handle_delete = move |_| {
        spawn(async move {
            let api = authed_api(&auth());
            match api.delete_measurement(id).await {
                Ok(()) => { nav.push(Route::Measurements {}); }
                Err(err) => feedback.set(Feedback::error(err)),
            }
        });
    };

    if !loaded() {
        return rsx! { Loading {} };
    }
    let Some(record) = measurement() else {
        return rsx! { EmptyState { message: "Avaliação não encontrada." } };
    };

    let owner = client()
        .map(|c| c.full_name())
        .unwrap_or_else(|| format!("Cliente #{}", record.client_id));

    rsx! {
        div {
            class: "page-header",
            h1 { "Avaliação de {record.date}" }
            Button {
                variant: ButtonVariant::Danger,
                onclick: handle_delete,
                "Eliminar"
            }
        }

        div {
            class: "detail-card",
            p { class: "detail-owner", "{owner}" }
            dl {
                class: "detail-grid",
                DetailRow { label: "Peso", value: format!("{:.1} kg", record.weight_kg) }
                DetailRow { label: "Altura", value: format_opt(record.height_cm, "cm") }
                DetailRow { label: "Massa gorda", value: format_opt(record.body_fat_pct, "%") }
                DetailRow { label: "Peito", value: format_opt(record.chest_cm, "cm") }
                DetailRow { label: "Cintura", value: format_opt(record.waist_cm, "cm") }
                DetailRow { label: "Anca", value: format_opt(record.hip_cm, "cm") }
                DetailRow { label: "Braço", value: format_opt(record.arm_cm, "cm") }
                DetailRow { label: "Coxa", value: format_opt(record.thigh_cm, "cm") }
            }
            if let Some(notes) = record.notes {
                p { class: "detail-notes", "{notes}" }
            }
        }
    }
}

fn format_opt(value: Option<f64>, unit: &str) -> String {
    value
        .map(|v| format!("{v:.1} {unit}"))
        .unwrap_or_else(|| "—".to_string())
}

#[component]
fn DetailRow(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "detail-row",
            dt { "{label}" }
            dd { "{value}" }
        }
    }
}

#[component]
pub fn MeasurementNew() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut clients = use_signal(Vec::<Client>::new);

    let mut client_id = use_signal(String::new);
    let mut date = use_signal(|| today().to_string());
    let mut weight = use_signal(String::new);
    let mut height = use_signal(String::new);
    let mut body_fat = use_signal(String::new);
    let mut chest = use_signal(String::new);
    let mut waist = use_signal(String::new);
    let mut hip = use_signal(String::new);
    let mut arm = use_signal(String::new);
    let mut thigh = use_signal(String::new);
    let mut notes = use_signal(String::new);

    let _clients = use_resource(move || async move {
        let api = authed_api(&auth());
        if let Ok(list) = api.list_clients().await {
            clients.set(list);
        }
    });

    let handle_submit = move |_| {
        let Some(parsed_date) = parse_date(&date()) else {
            feedback.set(Feedback::error("escolha a data da avaliação"));
            return;
        };
        let payload = MeasurementPayload {
            client_id: client_id().parse().unwrap_or_default(),
            date: parsed_date,
            weight_kg: weight().trim().parse().unwrap_or_default(),
            height_cm: optional_number(height()),
            body_fat_pct: optional_number(body_fat()),
            chest_cm: optional_number(chest()),
            waist_cm: optional_number(waist()),
            hip_cm: optional_number(hip()),
            arm_cm: optional_number(arm()),
            thigh_cm: optional_number(thigh()),
            notes: non_empty(notes()),
        };
        if let Err(errors) = payload.validate() {
            feedback.set(Feedback::error(first_validation_message(&errors)));
            return;
        }
        spawn(async move {
            let api = authed_api(&auth());
            match api.create_measurement(&payload).await {
                Ok(()) => { nav.push(Route::Measurements {}); }
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
            h1 { "Nova avaliação" }
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
                    label: "Data",
                    value: date(),
                    oninput: move |evt: FormEvent| date.set(evt.value()),
                }
                NumberField {
                    label: "Peso (kg)",
                    value: weight(),
                    step: "0.1",
                    oninput: move |evt: FormEvent| weight.set(evt.value()),
                }
                NumberField {
                    label: "Altura (cm)",
                    value: height(),
                    step: "0.5",
                    oninput: move |evt: FormEvent| height.set(evt.value()),
                }
                NumberField {
                    label: "Massa gorda (%)",
                    value: body_fat(),
                    step: "0.1",
                    oninput: move |evt: FormEvent| body_fat.set(evt.value()),
                }
                NumberField {
                    label: "Peito (cm)",
                    value: chest(),
                    step: "0.5",
                    oninput: move |evt: FormEvent| chest.set(evt.value()),
                }
                NumberField {
                    label: "Cintura (cm)",
                    value: waist(),
                    step: "0.5",
                    oninput: move |evt: FormEvent| waist.set(evt.value()),
                }
                NumberField {
                    label: "Anca (cm)",
                    value: hip(),
                    step: "0.5",
                    oninput: move |evt: FormEvent| hip.set(evt.value()),
                }
                NumberField {
                    label: "Braço (cm)",
                    value: arm(),
                    step: "0.5",
                    oninput: move |evt: FormEvent| arm.set(evt.value()),
                }
                NumberField {
                    label: "Coxa (cm)",
                    value: thigh(),
                    step: "0.5",
                    oninput: move |evt: FormEvent| thigh.set(evt.value()),
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
