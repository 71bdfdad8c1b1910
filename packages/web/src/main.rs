use api::Api;
use dioxus::prelude::*;

use ui::{AuthProvider, FeedbackProvider};

use shell::AppShell;
use views::{
    ClientAgenda, ClientAvaliacoes, ClientDetail, ClientFaturas, ClientInicio, ClientInvoices,
    ClientMeasurements, ClientNew, ClientTreinoDetail, ClientTreinos, ClientWorkouts, Clients,
    ExerciseEdit, ExerciseNew, Exercises, Home, InvoiceDetail, InvoiceNew, Invoices, LocationEdit,
    LocationNew, Locations, Login, MeasurementDetail, MeasurementNew, Measurements, NotFound,
    PackageDetail, PackageNew, Packages, PaymentNew, Profile, ScheduleDay, ScheduleEdit,
    ScheduleNew, SubscriptionNew, UnpaidInvoices, WorkoutEdit, WorkoutNew, Workouts,
};

mod shell;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},

    #[layout(AppShell)]
        #[route("/")]
        Root {},
        #[route("/inicio")]
        Home {},

        // clients
        #[route("/clientes")]
        Clients {},
        #[route("/clientes/novo")]
        ClientNew {},
        #[route("/clientes/:id")]
        ClientDetail { id: i64 },

        // schedule
        #[route("/agenda")]
        ScheduleDay {},
        #[route("/agenda/novo")]
        ScheduleNew {},
        #[route("/agenda/:id")]
        ScheduleEdit { id: i64 },

        // physical tests
        #[route("/avaliacoes")]
        Measurements {},
        #[route("/avaliacoes/novo")]
        MeasurementNew {},
        #[route("/avaliacoes/:id")]
        MeasurementDetail { id: i64 },
        #[route("/avaliacoes/cliente/:client_id")]
        ClientMeasurements { client_id: i64 },

        // workout plans
        #[route("/treinos")]
        Workouts {},
        #[route("/treinos/novo")]
        WorkoutNew {},
        #[route("/treinos/:id")]
        WorkoutEdit { id: i64 },
        #[route("/treinos/cliente/:client_id")]
        ClientWorkouts { client_id: i64 },

        // exercise catalogue
        #[route("/exercicios")]
        Exercises {},
        #[route("/exercicios/novo")]
        ExerciseNew {},
        #[route("/exercicios/:id")]
        ExerciseEdit { id: i64 },

        // packages & subscriptions
        #[route("/pacotes")]
        Packages {},
        #[route("/pacotes/novo")]
        PackageNew {},
        #[route("/pacotes/:id")]
        PackageDetail { id: i64 },
        #[route("/pacotes/:package_id/subscrever")]
        SubscriptionNew { package_id: i64 },

        // invoicing
        #[route("/faturas")]
        Invoices {},
        #[route("/faturas/pendentes")]
        UnpaidInvoices {},
        #[route("/faturas/nova")]
        InvoiceNew {},
        #[route("/faturas/:id")]
        InvoiceDetail { id: i64 },
        #[route("/faturas/cliente/:client_id")]
        ClientInvoices { client_id: i64 },
        #[route("/faturas/:invoice_id/pagamento")]
        PaymentNew { invoice_id: i64 },

        // training locations
        #[route("/locais")]
        Locations {},
        #[route("/locais/novo")]
        LocationNew {},
        #[route("/locais/:id")]
        LocationEdit { id: i64 },

        #[route("/perfil")]
        Profile {},

        // client area (read-only views of own data)
        #[route("/cliente/inicio")]
        ClientInicio {},
        #[route("/cliente/agenda")]
        ClientAgenda {},
        #[route("/cliente/treinos")]
        ClientTreinos {},
        #[route("/cliente/treinos/:id")]
        ClientTreinoDetail { id: i64 },
        #[route("/cliente/avaliacoes")]
        ClientAvaliacoes {},
        #[route("/cliente/faturas")]
        ClientFaturas {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Connectivity {
    Checking,
    Up,
    Down,
}

/// App shell: nothing renders until the API answers the health check.
/// A failed check shows the retry screen instead of the router.
#[component]
fn App() -> Element {
    let mut connectivity = use_signal(|| Connectivity::Checking);
    let mut attempt = use_signal(|| 0u32);

    let _check = use_resource(move || {
        let _ = attempt();
        async move {
            connectivity.set(Connectivity::Checking);
            match Api::new(None).check_health().await {
                Ok(()) => connectivity.set(Connectivity::Up),
                Err(err) => {
                    tracing::error!("health check failed: {err}");
                    connectivity.set(Connectivity::Down);
                }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }

        {match connectivity() {
            Connectivity::Checking => rsx! {
                div {
                    class: "boot-screen",
                    p { "A ligar ao servidor..." }
                }
            },
            Connectivity::Down => rsx! {
                div {
                    class: "boot-screen",
                    h1 { "Sem ligação" }
                    p { "Não foi possível contactar o servidor." }
                    button {
                        class: "btn btn--primary",
                        onclick: move |_| attempt += 1,
                        "Tentar novamente"
                    }
                }
            },
            Connectivity::Up => rsx! {
                AuthProvider {
                    FeedbackProvider {
                        Router::<Route> {}
                    }
                }
            },
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn test_route_slugs() {
        assert_eq!(Route::Login {}.to_string(), "/login");
        assert_eq!(Route::Clients {}.to_string(), "/clientes");
        assert_eq!(Route::ClientDetail { id: 7 }.to_string(), "/clientes/7");
        assert_eq!(Route::ScheduleDay {}.to_string(), "/agenda");
        assert_eq!(
            Route::ClientMeasurements { client_id: 3 }.to_string(),
            "/avaliacoes/cliente/3"
        );
        assert_eq!(
            Route::SubscriptionNew { package_id: 2 }.to_string(),
            "/pacotes/2/subscrever"
        );
        assert_eq!(
            Route::PaymentNew { invoice_id: 9 }.to_string(),
            "/faturas/9/pagamento"
        );
        assert_eq!(Route::ClientTreinoDetail { id: 4 }.to_string(), "/cliente/treinos/4");
    }
}

/// Redirect `/` by role: trainers land on the dashboard, clients on their
/// own area.
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if !auth().loading {
        match auth().session.map(|s| s.role) {
            Some(store::Role::Client) => {
                nav.replace(Route::ClientInicio {});
            }
            Some(_) => {
                nav.replace(Route::Home {});
            }
            None => {
                nav.replace(Route::Login {});
            }
        }
    }
    rsx! {}
}
