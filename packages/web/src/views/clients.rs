//! Client management: filterable listing, creation and edit forms.

use api::models::by_active_then_name;
use api::payloads::ClientPayload;
use api::{Client, ClientLocation};
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, CheckboxField, DataTable, DateField, Dialog, EmptyState, Loading,
    SelectField, TextField, TextareaField,
};
use ui::{use_auth, use_feedback, Feedback};
use validator::Validate;

use super::{authed_api, first_validation_message, non_empty, parse_date};
use crate::Route;

#[component]
pub fn Clients() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut clients = use_signal(Vec::<Client>::new);
    let mut loaded = use_signal(|| false);
    let mut query = use_signal(String::new);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        match api.list_clients().await {
            Ok(mut list) => {
                list.sort_by(by_active_then_name);
                clients.set(list);
            }
            Err(err) => feedback.set(Feedback::error(err)),
        }
        loaded.set(true);
    });

    // Recomputed on every keystroke.
    let visible: Vec<Client> = clients()
        .into_iter()
        .filter(|c| c.matches_query(&query()))
        .collect();

    rsx! {
        div {
            class: "page-header",
            h1 { "Clientes" }
            Button {
                onclick: move |_| { nav.push(Route::ClientNew {}); },
                "Novo cliente"
            }
        }

        TextField {
            label: "Pesquisar",
            value: query(),
            placeholder: "Nome do cliente",
            oninput: move |evt: FormEvent| query.set(evt.value()),
        }

        if !loaded() {
            Loading {}
        } else if visible.is_empty() {
            EmptyState { message: "Sem clientes para mostrar." }
        } else {
            DataTable {
                headers: vec!["Nome", "Email", "Telefone", "Estado"],
                for client in visible {
                    tr {
                        key: "{client.id}",
                        class: if client.active { "" } else { "row-inactive" },
                        onclick: {
                            let id = client.id;
                            move |_| { nav.push(Route::ClientDetail { id }); }
                        },
                        td { {client.full_name()} }
                        td { {client.email.clone().unwrap_or_default()} }
                        td { {client.phone.clone().unwrap_or_default()} }
                        td { if client.active { "Ativo" } else { "Inativo" } }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ClientNew() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();

    rsx! {
        div {
            class: "page-header",
            h1 { "Novo cliente" }
        }
        ClientForm {
            existing: None,
            on_submit: move |payload: ClientPayload| {
                spawn(async move {
                    let api = authed_api(&auth());
                    match api.create_client(&payload).await {
                        Ok(()) => { nav.push(Route::Clients {}); }
                        Err(err) => feedback.set(Feedback::error(err)),
                    }
                });
            },
        }
    }
}

#[component]
pub fn ClientDetail(id: i64) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut client = use_signal(|| Option::<Client>::None);
    let mut loaded = use_signal(|| false);
    let mut confirm_delete = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        match api.get_client(id).await {
            Ok(record) => client.set(Some(record)),
            Err(err) => {
                feedback.set(Feedback::error(err));
            }
        }
        loaded.set(true);
    });

    let handle_delete = move |_| {
        spawn(async move {
            let api = authed_api(&auth());
            match api.delete_client(id).await {
                Ok(()) => { nav.push(Route::Clients {}); }
                Err(err) => {
                    confirm_delete.set(false);
                    feedback.set(Feedback::error(err));
                }
            }
        });
    };

    if !loaded() {
        return rsx! { Loading {} };
    }
    let Some(record) = client() else {
        return rsx! { EmptyState { message: "Cliente não encontrado." } };
    };

    rsx! {
        div {
            class: "page-header",
            h1 { {record.full_name()} }
            div {
                class: "page-header-actions",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| { nav.push(Route::ClientMeasurements { client_id: id }); },
                    "Avaliações"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| { nav.push(Route::ClientWorkouts { client_id: id }); },
                    "Treinos"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| { nav.push(Route::ClientInvoices { client_id: id }); },
                    "Faturas"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| confirm_delete.set(true),
                    "Eliminar"
                }
            }
        }

        if confirm_delete() {
            Dialog {
                title: "Eliminar cliente",
                on_close: move |_| confirm_delete.set(false),
                p { "Esta operação não pode ser desfeita." }
                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: handle_delete,
                        "Eliminar"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| confirm_delete.set(false),
                        "Cancelar"
                    }
                }
            }
        }

        ClientForm {
            existing: Some(record),
            on_submit: move |payload: ClientPayload| {
                spawn(async move {
                    let api = authed_api(&auth());
                    match api.update_client(id, &payload).await {
                        Ok(()) => feedback.set(Feedback::success("Cliente atualizado")),
                        Err(err) => feedback.set(Feedback::error(err)),
                    }
                });
            },
        }
    }
}

/// Shared create/edit form. Validates before handing the payload back.
#[component]
fn ClientForm(existing: Option<Client>, on_submit: EventHandler<ClientPayload>) -> Element {
    let auth = use_auth();
    let mut feedback = use_feedback();
    let mut locations = use_signal(Vec::<ClientLocation>::new);

    let mut first_name = use_signal({
        let initial = existing.as_ref().map(|c| c.first_name.clone()).unwrap_or_default();
        move || initial
    });
    let mut last_name = use_signal({
        let initial = existing.as_ref().map(|c| c.last_name.clone()).unwrap_or_default();
        move || initial
    });
    let mut email = use_signal({
        let initial = existing.as_ref().and_then(|c| c.email.clone()).unwrap_or_default();
        move || initial
    });
    let mut phone = use_signal({
        let initial = existing.as_ref().and_then(|c| c.phone.clone()).unwrap_or_default();
        move || initial
    });
    let mut birthdate = use_signal({
        let initial = existing
            .as_ref()
            .and_then(|c| c.birthdate)
            .map(|d| d.to_string())
            .unwrap_or_default();
        move || initial
    });
    let mut location_id = use_signal({
        let initial = existing
            .as_ref()
            .and_then(|c| c.location_id)
            .map(|id| id.to_string())
            .unwrap_or_default();
        move || initial
    });
    let mut active = use_signal({
        let initial = existing.as_ref().map(|c| c.active).unwrap_or(true);
        move || initial
    });
    let mut notes = use_signal({
        let initial = existing.as_ref().and_then(|c| c.notes.clone()).unwrap_or_default();
        move || initial
    });

    let _locations = use_resource(move || async move {
        let api = authed_api(&auth());
        match api.list_locations().await {
            Ok(list) => locations.set(list),
            Err(err) => tracing::warn!("failed to load locations: {err}"),
        }
    });

    let handle_submit = move |_| {
        let payload = ClientPayload {
            first_name: first_name().trim().to_string(),
            last_name: last_name().trim().to_string(),
            email: non_empty(email()),
            phone: non_empty(phone()),
            birthdate: parse_date(&birthdate()),
            location_id: location_id().parse().ok(),
            active: active(),
            notes: non_empty(notes()),
        };
        if let Err(errors) = payload.validate() {
            feedback.set(Feedback::error(first_validation_message(&errors)));
            return;
        }
        on_submit.call(payload);
    };

    let location_options: Vec<(String, String)> = std::iter::once((String::new(), "—".to_string()))
        .chain(locations().into_iter().map(|l| (l.id.to_string(), l.name)))
        .collect();

    rsx! {
        div {
            class: "form-card",
            div {
                class: "form-grid",
                TextField {
                    label: "Nome próprio",
                    value: first_name(),
                    oninput: move |evt: FormEvent| first_name.set(evt.value()),
                }
                TextField {
                    label: "Apelido",
                    value: last_name(),
                    oninput: move |evt: FormEvent| last_name.set(evt.value()),
                }
                TextField {
                    label: "Email",
                    value: email(),
                    input_type: "email",
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                TextField {
                    label: "Telefone",
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }
                DateField {
                    label: "Data de nascimento",
                    value: birthdate(),
                    oninput: move |evt: FormEvent| birthdate.set(evt.value()),
                }
                SelectField {
                    label: "Local de treino",
                    value: location_id(),
                    options: location_options,
                    onchange: move |evt: FormEvent| location_id.set(evt.value()),
                }
            }
            CheckboxField {
                label: "Cliente ativo",
                checked: active(),
                onchange: move |_| active.set(!active()),
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
