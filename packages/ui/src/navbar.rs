//! Bottom navigation bar primitives. The web crate composes the
//! role-specific bars (trainer, client, admin) from these, deriving the
//! active item from the current route.

use dioxus::prelude::*;

#[component]
pub fn NavBar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            {children}
        }
    }
}

/// One icon+label entry. `active` highlights the item for the current path.
#[component]
pub fn NavItem(
    label: String,
    active: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: if active { "navbar-item navbar-item--active" } else { "navbar-item" },
            onclick: move |evt| onclick.call(evt),
            span { class: "navbar-icon", {children} }
            span { class: "navbar-label", "{label}" }
        }
    }
}
