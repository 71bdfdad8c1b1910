//! Account page: the signed-in user's record plus the logout action.

use api::User;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, EmptyState, Loading};
use ui::{sign_out, use_auth, use_feedback, Feedback};

use super::authed_api;

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let mut feedback = use_feedback();
    let mut user = use_signal(|| Option::<User>::None);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let Some(session) = auth().session else {
            loaded.set(true);
            return;
        };
        let api = authed_api(&auth());
        match api.get_user(&session.user_id).await {
            Ok(record) => user.set(Some(record)),
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
            h1 { "Perfil" }
            Button {
                variant: ButtonVariant::Danger,
                onclick: move |_| sign_out(auth),
                "Sair"
            }
        }

        if let Some(record) = user() {
            div {
                class: "detail-card",
                dl {
                    class: "detail-grid",
                    div {
                        class: "detail-row",
                        dt { "Nome" }
                        dd { "{record.name}" }
                    }
                    div {
                        class: "detail-row",
                        dt { "Email" }
                        dd { "{record.email}" }
                    }
                    div {
                        class: "detail-row",
                        dt { "Perfil" }
                        dd { "{record.role}" }
                    }
                }
            }
        } else {
            EmptyState { message: "Não foi possível carregar o perfil." }
        }
    }
}
