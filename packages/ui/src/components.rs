//! Presentation-only building blocks: buttons, form rows, tables, dialogs.
//! No component here owns state beyond what is passed in.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Secondary => "btn btn--secondary",
            ButtonVariant::Danger => "btn btn--danger",
            ButtonVariant::Ghost => "btn btn--ghost",
        }
    }
}

#[component]
pub fn Button(
    #[props(default = ButtonVariant::Primary)] variant: ButtonVariant,
    onclick: EventHandler<MouseEvent>,
    #[props(default)] disabled: bool,
    #[props(default)] title: String,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: variant.class(),
            disabled,
            title: "{title}",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn TextField(
    label: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { "{label}" }
            input {
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

/// Numeric input. The raw string is kept by the caller and parsed at
/// submit time, so a half-typed value never panics.
#[component]
pub fn NumberField(
    label: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default)] step: String,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { "{label}" }
            input {
                r#type: "number",
                step: "{step}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

#[component]
pub fn DateField(label: String, value: String, oninput: EventHandler<FormEvent>) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { "{label}" }
            input {
                r#type: "date",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

#[component]
pub fn TimeField(label: String, value: String, oninput: EventHandler<FormEvent>) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { "{label}" }
            input {
                r#type: "time",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

/// Select with `(value, label)` options. The first entry is usually a
/// placeholder with an empty value.
#[component]
pub fn SelectField(
    label: String,
    value: String,
    options: Vec<(String, String)>,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { "{label}" }
            select {
                value: "{value}",
                onchange: move |evt| onchange.call(evt),
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        value: "{option_value}",
                        selected: option_value == value,
                        "{option_label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn TextareaField(
    label: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { "{label}" }
            textarea {
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

#[component]
pub fn CheckboxField(label: String, checked: bool, onchange: EventHandler<FormEvent>) -> Element {
    rsx! {
        div {
            class: "form-field form-field--checkbox",
            label {
                input {
                    r#type: "checkbox",
                    checked,
                    onchange: move |evt| onchange.call(evt),
                }
                "{label}"
            }
        }
    }
}

/// Table scaffold: fixed headers, caller-provided rows.
#[component]
pub fn DataTable(headers: Vec<&'static str>, children: Element) -> Element {
    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    for header in headers {
                        th { "{header}" }
                    }
                }
            }
            tbody {
                {children}
            }
        }
    }
}

#[component]
pub fn Dialog(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                div {
                    class: "dialog-header",
                    h2 { "{title}" }
                    button {
                        class: "dialog-close",
                        onclick: move |_| on_close.call(()),
                        "\u{00d7}"
                    }
                }
                div {
                    class: "dialog-body",
                    {children}
                }
            }
        }
    }
}

/// Side panel sliding in from the right.
#[component]
pub fn Drawer(
    open: bool,
    title: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }
    rsx! {
        div {
            class: "drawer-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "drawer",
                onclick: move |evt| evt.stop_propagation(),
                div {
                    class: "drawer-header",
                    h2 { "{title}" }
                    button {
                        class: "dialog-close",
                        onclick: move |_| on_close.call(()),
                        "\u{00d7}"
                    }
                }
                div {
                    class: "drawer-body",
                    {children}
                }
            }
        }
    }
}

#[component]
pub fn Loading() -> Element {
    rsx! {
        div {
            class: "loading",
            span { class: "loading-spinner" }
            "A carregar..."
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div {
            class: "empty-state",
            p { "{message}" }
        }
    }
}
