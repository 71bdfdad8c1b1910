//! Training locations.

use api::payloads::LocationPayload;
use api::ClientLocation;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, DataTable, EmptyState, Loading, TextField};
use ui::{use_auth, use_feedback, Feedback};
use validator::Validate;

use super::{authed_api, first_validation_message, non_empty};
use crate::Route;

#[component]
pub fn Locations() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut locations = use_signal(Vec::<ClientLocation>::new);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        match api.list_locations().await {
            Ok(list) => locations.set(list),
            Err(err) => feedback.set(Feedback::error(err)),
        }
        loaded.set(true);
    });

    rsx! {
        div {
            class: "page-header",
            h1 { "Locais de treino" }
            Button {
                onclick: move |_| { nav.push(Route::LocationNew {}); },
                "Novo local"
            }
        }

        if !loaded() {
            Loading {}
        } else if locations().is_empty() {
            EmptyState { message: "Ainda não há locais registados." }
        } else {
            DataTable {
                headers: vec!["Nome", "Morada", "Cidade"],
                for location in locations() {
                    tr {
                        key: "{location.id}",
                        onclick: {
                            let id = location.id;
                            move |_| { nav.push(Route::LocationEdit { id }); }
                        },
                        td { "{location.name}" }
                        td { {location.address.clone().unwrap_or_default()} }
                        td { {location.city.clone().unwrap_or_default()} }
                    }
                }
            }
        }
    }
}

#[component]
pub fn LocationNew() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();

    rsx! {
        div {
            class: "page-header",
            h1 { "Novo local" }
        }
        LocationForm {
            existing: None,
            on_submit: move |payload: LocationPayload| {
                spawn(async move {
                    let api = authed_api(&auth());
                    match api.create_location(&payload).await {
                        Ok(()) => { nav.push(Route::Locations {}); }
                        Err(err) => feedback.set(Feedback::error(err)),
                    }
                });
            },
        }
    }
}

#[component]
pub fn LocationEdit(id: i64) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut location = use_signal(|| Option::<ClientLocation>::None);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        match api.get_location(id).await {
            Ok(record) => location.set(Some(record)),
            Err(err) => feedback.set(Feedback::error(err)),
        }
        loaded.set(true);
    });

    if !loaded() {
        return rsx! { Loading {} };
    }
    let Some(record) = location() else {
        return rsx! { EmptyState { message: "Local não encontrado." } };
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "{record.name}" }
        }
        LocationForm {
            existing: Some(record),
            on_submit: move |payload: LocationPayload| {
                spawn(async move {
                    let api = authed_api(&auth());
                    match api.update_location(id, &payload).await {
                        Ok(()) => { nav.push(Route::Locations {}); }
                        Err(err) => feedback.set(Feedback::error(err)),
                    }
                });
            },
        }
    }
}

#[component]
fn LocationForm(
    existing: Option<ClientLocation>,
    on_submit: EventHandler<LocationPayload>,
) -> Element {
    let mut feedback = use_feedback();

    let mut name = use_signal({
        let initial = existing.as_ref().map(|l| l.name.clone()).unwrap_or_default();
        move || initial
    });
    let mut address = use_signal({
        let initial = existing
            .as_ref()
            .and_then(|l| l.address.clone())
            .unwrap_or_default();
        move || initial
    });
    let mut city = use_signal({
        let initial = existing
            .as_ref()
            .and_then(|l| l.city.clone())
            .unwrap_or_default();
        move || initial
    });

    let handle_submit = move |_| {
        let payload = LocationPayload {
            name: name().trim().to_string(),
            address: non_empty(address()),
            city: non_empty(city()),
        };
        if let Err(errors) = payload.validate() {
            feedback.set(Feedback::error(first_validation_message(&errors)));
            return;
        }
        on_submit.call(payload);
    };

    rsx! {
        div {
            class: "form-card",
            TextField {
                label: "Nome",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            TextField {
                label: "Morada",
                value: address(),
                oninput: move |evt: FormEvent| address.set(evt.value()),
            }
            TextField {
                label: "Cidade",
                value: city(),
                oninput: move |evt: FormEvent| city.set(evt.value()),
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
