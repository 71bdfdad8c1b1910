//! Guarded application shell.
//!
//! Every protected page sits under this router layout: the guard decision
//! runs before any page component mounts, so an unauthenticated visit
//! redirects to `/login` without a flash of protected content. The shell
//! also picks the top-level layout class from the current path and mounts
//! the navbar matching the cached role.

use dioxus::prelude::*;
use store::Role;
use ui::components::Loading;
use ui::icons::{
    FaBoxesStacked, FaCalendarDays, FaDumbbell, FaFileInvoiceDollar, FaHouse, FaLocationDot,
    FaPersonRunning, FaUser, FaUsers,
};
use ui::{use_auth, Icon, NavBar, NavItem};

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Cache not read yet; render nothing page-like.
    Wait,
    RedirectToLogin,
    Allow,
}

/// The single route-guard rule: no session, no page.
pub fn guard_decision(loading: bool, has_session: bool) -> GuardDecision {
    if loading {
        GuardDecision::Wait
    } else if has_session {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Whether a navbar entry owns the current path.
pub fn is_active(current: &str, prefix: &str) -> bool {
    current == prefix || current.starts_with(&format!("{prefix}/"))
}

#[component]
pub fn AppShell() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let path = route.to_string();

    match guard_decision(auth().loading, auth().session.is_some()) {
        GuardDecision::Wait => rsx! { Loading {} },
        GuardDecision::RedirectToLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        GuardDecision::Allow => {
            let Some(session) = auth().session else {
                return rsx! {};
            };
            // The agenda gets an edge-to-edge canvas; everything else a
            // padded page background.
            let main_class = if is_active(&path, "/agenda") || is_active(&path, "/cliente/agenda")
            {
                "app-main app-main--canvas"
            } else {
                "app-main"
            };

            rsx! {
                main {
                    class: "{main_class}",
                    Outlet::<Route> {}
                }
                {match session.role {
                    Role::Trainer => rsx! { TrainerNavbar { path } },
                    Role::Admin => rsx! { AdminNavbar { path } },
                    Role::Client => rsx! { ClientNavbar { path } },
                }}
            }
        }
    }
}

#[component]
fn TrainerNavbar(path: String) -> Element {
    let nav = use_navigator();
    rsx! {
        NavBar {
            NavItem {
                label: "Início",
                active: is_active(&path, "/inicio"),
                onclick: move |_| { nav.push(Route::Home {}); },
                Icon { icon: FaHouse, width: 20, height: 20 }
            }
            NavItem {
                label: "Clientes",
                active: is_active(&path, "/clientes"),
                onclick: move |_| { nav.push(Route::Clients {}); },
                Icon { icon: FaUsers, width: 20, height: 20 }
            }
            NavItem {
                label: "Agenda",
                active: is_active(&path, "/agenda"),
                onclick: move |_| { nav.push(Route::ScheduleDay {}); },
                Icon { icon: FaCalendarDays, width: 20, height: 20 }
            }
            NavItem {
                label: "Treinos",
                active: is_active(&path, "/treinos") || is_active(&path, "/avaliacoes"),
                onclick: move |_| { nav.push(Route::Workouts {}); },
                Icon { icon: FaDumbbell, width: 20, height: 20 }
            }
            NavItem {
                label: "Faturas",
                active: is_active(&path, "/faturas"),
                onclick: move |_| { nav.push(Route::Invoices {}); },
                Icon { icon: FaFileInvoiceDollar, width: 20, height: 20 }
            }
            NavItem {
                label: "Perfil",
                active: is_active(&path, "/perfil"),
                onclick: move |_| { nav.push(Route::Profile {}); },
                Icon { icon: FaUser, width: 20, height: 20 }
            }
        }
    }
}

#[component]
fn AdminNavbar(path: String) -> Element {
    let nav = use_navigator();
    rsx! {
        NavBar {
            NavItem {
                label: "Início",
                active: is_active(&path, "/inicio"),
                onclick: move |_| { nav.push(Route::Home {}); },
                Icon { icon: FaHouse, width: 20, height: 20 }
            }
            NavItem {
                label: "Clientes",
                active: is_active(&path, "/clientes"),
                onclick: move |_| { nav.push(Route::Clients {}); },
                Icon { icon: FaUsers, width: 20, height: 20 }
            }
            NavItem {
                label: "Exercícios",
                active: is_active(&path, "/exercicios"),
                onclick: move |_| { nav.push(Route::Exercises {}); },
                Icon { icon: FaPersonRunning, width: 20, height: 20 }
            }
            NavItem {
                label: "Pacotes",
                active: is_active(&path, "/pacotes"),
                onclick: move |_| { nav.push(Route::Packages {}); },
                Icon { icon: FaBoxesStacked, width: 20, height: 20 }
            }
            NavItem {
                label: "Locais",
                active: is_active(&path, "/locais"),
                onclick: move |_| { nav.push(Route::Locations {}); },
                Icon { icon: FaLocationDot, width: 20, height: 20 }
            }
            NavItem {
                label: "Perfil",
                active: is_active(&path, "/perfil"),
                onclick: move |_| { nav.push(Route::Profile {}); },
                Icon { icon: FaUser, width: 20, height: 20 }
            }
        }
    }
}

#[component]
fn ClientNavbar(path: String) -> Element {
    let nav = use_navigator();
    rsx! {
        NavBar {
            NavItem {
                label: "Início",
                active: is_active(&path, "/cliente/inicio"),
                onclick: move |_| { nav.push(Route::ClientInicio {}); },
                Icon { icon: FaHouse, width: 20, height: 20 }
            }
            NavItem {
                label: "Agenda",
                active: is_active(&path, "/cliente/agenda"),
                onclick: move |_| { nav.push(Route::ClientAgenda {}); },
                Icon { icon: FaCalendarDays, width: 20, height: 20 }
            }
            NavItem {
                label: "Treinos",
                active: is_active(&path, "/cliente/treinos"),
                onclick: move |_| { nav.push(Route::ClientTreinos {}); },
                Icon { icon: FaDumbbell, width: 20, height: 20 }
            }
            NavItem {
                label: "Avaliações",
                active: is_active(&path, "/cliente/avaliacoes"),
                onclick: move |_| { nav.push(Route::ClientAvaliacoes {}); },
                Icon { icon: FaPersonRunning, width: 20, height: 20 }
            }
            NavItem {
                label: "Faturas",
                active: is_active(&path, "/cliente/faturas"),
                onclick: move |_| { nav.push(Route::ClientFaturas {}); },
                Icon { icon: FaFileInvoiceDollar, width: 20, height: 20 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_session_redirects_to_login() {
        assert_eq!(guard_decision(false, false), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn test_loading_blocks_rendering() {
        // While the cache is unread nothing protected renders, and no
        // premature redirect fires either.
        assert_eq!(guard_decision(true, false), GuardDecision::Wait);
        assert_eq!(guard_decision(true, true), GuardDecision::Wait);
    }

    #[test]
    fn test_session_allows() {
        assert_eq!(guard_decision(false, true), GuardDecision::Allow);
    }

    #[test]
    fn test_active_prefix_matching() {
        assert!(is_active("/faturas", "/faturas"));
        assert!(is_active("/faturas/12", "/faturas"));
        assert!(is_active("/faturas/pendentes", "/faturas"));
        assert!(!is_active("/cliente/faturas", "/faturas"));
        assert!(!is_active("/faturasx", "/faturas"));
    }
}
