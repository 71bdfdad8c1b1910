//! Single feedback channel for operation outcomes.
//!
//! Pages push a success or error message into the context signal; the one
//! [`StatusDialog`] mounted by [`FeedbackProvider`] renders whichever is
//! current. This replaces per-page dialog state.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Feedback {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl Feedback {
    pub fn error(message: impl ToString) -> Self {
        Feedback::Error(message.to_string())
    }

    pub fn success(message: impl ToString) -> Self {
        Feedback::Success(message.to_string())
    }
}

pub fn use_feedback() -> Signal<Feedback> {
    use_context::<Signal<Feedback>>()
}

/// Mounts the dialog and provides the feedback signal to descendants.
#[component]
pub fn FeedbackProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Feedback::None));

    rsx! {
        {children}
        StatusDialog {}
    }
}

/// The single modal that shows the current feedback, if any.
#[component]
pub fn StatusDialog() -> Element {
    let mut feedback = use_feedback();

    let (class, title, message) = match feedback() {
        Feedback::None => return rsx! {},
        Feedback::Success(message) => ("status-dialog status-dialog--success", "Sucesso", message),
        Feedback::Error(message) => ("status-dialog status-dialog--error", "Erro", message),
    };

    rsx! {
        div {
            class: "dialog-overlay",
            div {
                class: "{class}",
                h2 { "{title}" }
                p { "{message}" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| feedback.set(Feedback::None),
                    "OK"
                }
            }
        }
    }
}
