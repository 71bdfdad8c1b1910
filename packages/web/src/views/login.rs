//! Login page. On success the token, user id and role are cached and the
//! root redirect routes by role.

use api::payloads::LoginPayload;
use api::Api;
use dioxus::prelude::*;
use store::{Role, Session};
use ui::components::{Button, ButtonVariant, TextField};
use ui::{sign_in, use_auth, use_feedback, Feedback};
use validator::Validate;

use super::first_validation_message;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    // Already signed in: straight into the app.
    if !auth().loading && auth().session.is_some() {
        nav.replace(Route::Root {});
    }

    let handle_submit = move |_| {
        let payload = LoginPayload {
            email: email().trim().to_string(),
            password: password(),
        };
        if let Err(errors) = payload.validate() {
            feedback.set(Feedback::error(first_validation_message(&errors)));
            return;
        }
        spawn(async move {
            submitting.set(true);
            match Api::new(None).login(&payload).await {
                Ok(response) => {
                    let Some(role) = Role::parse(&response.user.role) else {
                        tracing::error!("login returned unknown role {:?}", response.user.role);
                        feedback.set(Feedback::error("perfil de utilizador desconhecido"));
                        submitting.set(false);
                        return;
                    };
                    sign_in(
                        auth,
                        Session::new(response.token, response.user.id.to_string(), role),
                    );
                    nav.replace(Route::Root {});
                }
                Err(err) => {
                    feedback.set(Feedback::error(err));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-screen",
            div {
                class: "login-card",
                h1 { "FitDesk" }
                p { class: "login-subtitle", "Gestão de treino pessoal" }

                TextField {
                    label: "Email",
                    value: email(),
                    input_type: "email",
                    placeholder: "treinador@exemplo.pt",
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                TextField {
                    label: "Palavra-passe",
                    value: password(),
                    input_type: "password",
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    disabled: submitting(),
                    onclick: handle_submit,
                    if submitting() { "A entrar..." } else { "Entrar" }
                }
            }
        }
    }
}
