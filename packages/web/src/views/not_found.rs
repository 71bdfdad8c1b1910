use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = segments.join("/");

    rsx! {
        div {
            class: "boot-screen",
            h1 { "404" }
            p { "A página /{path} não existe." }
            button {
                class: "btn btn--primary",
                onclick: move |_| { nav.replace(Route::Root {}); },
                "Voltar ao início"
            }
        }
    }
}
