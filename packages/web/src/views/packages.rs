//! Service packages and client enrollments.

use api::payloads::{PackagePayload, SubscriptionPayload};
use api::{Client, Package, Subscription};
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, CheckboxField, DataTable, DateField, EmptyState, Loading, NumberField,
    SelectField, TextField, TextareaField,
};
use ui::{use_auth, use_feedback, Feedback};
use validator::Validate;

use super::{authed_api, first_validation_message, non_empty, parse_date, today};
use crate::Route;

#[component]
pub fn Packages() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut packages = use_signal(Vec::<Package>::new);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        match api.list_packages().await {
            Ok(mut list) => {
                // Active tiers first.
                list.sort_by(|a, b| b.active.cmp(&a.active).then(a.name.cmp(&b.name)));
                packages.set(list);
            }
            Err(err) => feedback.set(Feedback::error(err)),
        }
        loaded.set(true);
    });

    rsx! {
        div {
            class: "page-header",
            h1 { "Pacotes" }
            Button {
                onclick: move |_| { nav.push(Route::PackageNew {}); },
                "Novo pacote"
            }
        }

        if !loaded() {
            Loading {}
        } else if packages().is_empty() {
            EmptyState { message: "Ainda não há pacotes." }
        } else {
            DataTable {
                headers: vec!["Nome", "Preço", "Sessões/semana", "Estado"],
                for package in packages() {
                    tr {
                        key: "{package.id}",
                        class: if package.active { "" } else { "row-inactive" },
                        onclick: {
                            let id = package.id;
                            move |_| { nav.push(Route::PackageDetail { id }); }
                        },
                        td { "{package.name}" }
                        td { {format!("{:.2} €", package.price)} }
                        td {
                            {
                                package
                                    .sessions_per_week
                                    .map(|v| v.to_string())
                                    .unwrap_or_else(|| "—".to_string())
                            }
                        }
                        td { if package.active { "Ativo" } else { "Inativo" } }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PackageNew() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();

    rsx! {
        div {
            class: "page-header",
            h1 { "Novo pacote" }
        }
        PackageForm {
            existing: None,
            on_submit: move |payload: PackagePayload| {
                spawn(async move {
                    let api = authed_api(&auth());
                    match api.create_package(&payload).await {
                        Ok(()) => { nav.push(Route::Packages {}); }
                        Err(err) => feedback.set(Feedback::error(err)),
                    }
                });
            },
        }
    }
}

/// Package detail: the edit form next to the enrollment list.
#[component]
pub fn PackageDetail(id: i64) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut package = use_signal(|| Option::<Package>::None);
    let mut subscriptions = use_signal(Vec::<Subscription>::new);
    let mut clients = use_signal(Vec::<Client>::new);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        let (record, subs, client_list) = futures::join!(
            api.get_package(id),
            api.list_package_subs(id),
            api.list_clients()
        );
        match record {
            Ok(record) => package.set(Some(record)),
            Err(err) => feedback.set(Feedback::error(err)),
        }
        match subs {
            Ok(list) => subscriptions.set(list),
            Err(err) => tracing::warn!("failed to load subscriptions: {err}"),
        }
        if let Ok(list) = client_list {
            clients.set(list);
        }
        loaded.set(true);
    });

    if !loaded() {
        return rsx! { Loading {} };
    }
    let Some(record) = package() else {
        return rsx! { EmptyState { message: "Pacote não encontrado." } };
    };

    let client_name = move |client_id: i64| {
        clients()
            .iter()
            .find(|c| c.id == client_id)
            .map(|c| c.full_name())
            .unwrap_or_else(|| format!("Cliente #{client_id}"))
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "{record.name}" }
            Button {
                onclick: move |_| { nav.push(Route::SubscriptionNew { package_id: id }); },
                "Subscrever cliente"
            }
        }

        PackageForm {
            existing: Some(record),
            on_submit: move |payload: PackagePayload| {
                spawn(async move {
                    let api = authed_api(&auth());
                    match api.update_package(id, &payload).await {
                        Ok(()) => feedback.set(Feedback::success("Pacote atualizado")),
                        Err(err) => feedback.set(Feedback::error(err)),
                    }
                });
            },
        }

        section {
            class: "home-section",
            h2 { "Subscrições" }
            if subscriptions().is_empty() {
                EmptyState { message: "Nenhum cliente subscreveu este pacote." }
            } else {
                DataTable {
                    headers: vec!["Cliente", "Início", "Fim", "Estado"],
                    for subscription in subscriptions() {
                        tr {
                            key: "{subscription.id}",
                            class: if subscription.active { "" } else { "row-inactive" },
                            td { {client_name(subscription.client_id)} }
                            td { "{subscription.start_date}" }
                            td {
                                {
                                    subscription
                                        .end_date
                                        .map(|d| d.to_string())
                                        .unwrap_or_else(|| "—".to_string())
                                }
                            }
                            td { if subscription.active { "Ativa" } else { "Terminada" } }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SubscriptionNew(package_id: i64) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut clients = use_signal(Vec::<Client>::new);
    let mut client_id = use_signal(String::new);
    let mut start_date = use_signal(|| today().to_string());

    let _clients = use_resource(move || async move {
        let api = authed_api(&auth());
        if let Ok(list) = api.list_clients().await {
            clients.set(list);
        }
    });

    let handle_submit = move |_| {
        let Some(parsed_date) = parse_date(&start_date()) else {
            feedback.set(Feedback::error("escolha a data de início"));
            return;
        };
        let payload = SubscriptionPayload {
            client_id: client_id().parse().unwrap_or_default(),
            package_id,
            start_date: parsed_date,
        };
        if let Err(errors) = payload.validate() {
            feedback.set(Feedback::error(first_validation_message(&errors)));
            return;
        }
        spawn(async move {
            let api = authed_api(&auth());
            match api.create_subscription(&payload).await {
                Ok(()) => { nav.push(Route::PackageDetail { id: package_id }); }
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
            h1 { "Nova subscrição" }
        }
        div {
            class: "form-card",
            SelectField {
                label: "Cliente",
                value: client_id(),
                options: client_options,
                onchange: move |evt: FormEvent| client_id.set(evt.value()),
            }
            DateField {
                label: "Início",
                value: start_date(),
                oninput: move |evt: FormEvent| start_date.set(evt.value()),
            }
            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: handle_submit,
                    "Subscrever"
                }
            }
        }
    }
}

#[component]
fn PackageForm(existing: Option<Package>, on_submit: EventHandler<PackagePayload>) -> Element {
    let mut feedback = use_feedback();

    let mut name = use_signal({
        let initial = existing.as_ref().map(|p| p.name.clone()).unwrap_or_default();
        move || initial
    });
    let mut description = use_signal({
        let initial = existing
            .as_ref()
            .and_then(|p| p.description.clone())
            .unwrap_or_default();
        move || initial
    });
    let mut price = use_signal({
        let initial = existing
            .as_ref()
            .map(|p| p.price.to_string())
            .unwrap_or_default();
        move || initial
    });
    let mut sessions = use_signal({
        let initial = existing
            .as_ref()
            .and_then(|p| p.sessions_per_week)
            .map(|v| v.to_string())
            .unwrap_or_default();
        move || initial
    });
    let mut duration = use_signal({
        let initial = existing
            .as_ref()
            .and_then(|p| p.duration_days)
            .map(|v| v.to_string())
            .unwrap_or_default();
        move || initial
    });
    let mut active = use_signal({
        let initial = existing.as_ref().map(|p| p.active).unwrap_or(true);
        move || initial
    });

    let handle_submit = move |_| {
        let payload = PackagePayload {
            name: name().trim().to_string(),
            description: non_empty(description()),
            price: price().trim().parse().unwrap_or(-1.0),
            sessions_per_week: sessions().trim().parse().ok(),
            duration_days: duration().trim().parse().ok(),
            active: active(),
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
            TextareaField {
                label: "Descrição",
                value: description(),
                oninput: move |evt: FormEvent| description.set(evt.value()),
            }
            div {
                class: "form-grid",
                NumberField {
                    label: "Preço (€)",
                    value: price(),
                    step: "0.01",
                    oninput: move |evt: FormEvent| price.set(evt.value()),
                }
                NumberField {
                    label: "Sessões por semana",
                    value: sessions(),
                    oninput: move |evt: FormEvent| sessions.set(evt.value()),
                }
                NumberField {
                    label: "Duração (dias)",
                    value: duration(),
                    oninput: move |evt: FormEvent| duration.set(evt.value()),
                }
            }
            CheckboxField {
                label: "Pacote ativo",
                checked: active(),
                onchange: move |_| active.set(!active()),
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
