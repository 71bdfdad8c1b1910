//! Workout plans: listings and the exercise builder.
//!
//! The builder edits an [`ExerciseList`] draft; every structural change
//! (append, remove, move) goes through the draft's operations and the
//! serialized order is whatever the final positions are.

use api::payloads::WorkoutPayload;
use api::{Client, Exercise, Workout};
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, DataTable, EmptyState, Loading, SelectField, TextField, TextareaField,
};
use ui::icons::{FaArrowDown, FaArrowUp, FaTrashCan};
use ui::{use_auth, use_feedback, ExerciseList, Feedback, Icon};
use validator::Validate;

use super::{authed_api, first_validation_message, non_empty};
use crate::Route;

#[component]
pub fn Workouts() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut workouts = use_signal(Vec::<Workout>::new);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        match api.list_workouts().await {
            Ok(list) => workouts.set(list),
            Err(err) => feedback.set(Feedback::error(err)),
        }
        loaded.set(true);
    });

    rsx! {
        div {
            class: "page-header",
            h1 { "Planos de treino" }
            Button {
                onclick: move |_| { nav.push(Route::WorkoutNew {}); },
                "Novo plano"
            }
        }

        if !loaded() {
            Loading {}
        } else if workouts().is_empty() {
            EmptyState { message: "Ainda não há planos de treino." }
        } else {
            WorkoutTable { workouts: workouts() }
        }
    }
}

#[component]
pub fn ClientWorkouts(client_id: i64) -> Element {
    let auth = use_auth();
    let mut feedback = use_feedback();
    let mut workouts = use_signal(Vec::<Workout>::new);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        match api.list_client_workouts(client_id).await {
            Ok(list) => workouts.set(list),
            Err(err) => feedback.set(Feedback::error(err)),
        }
        loaded.set(true);
    });

    rsx! {
        div {
            class: "page-header",
            h1 { "Planos do cliente" }
        }
        if !loaded() {
            Loading {}
        } else if workouts().is_empty() {
            EmptyState { message: "Este cliente não tem planos atribuídos." }
        } else {
            WorkoutTable { workouts: workouts() }
        }
    }
}

#[component]
fn WorkoutTable(workouts: Vec<Workout>) -> Element {
    let nav = use_navigator();
    rsx! {
        DataTable {
            headers: vec!["Nome", "Cliente", "Exercícios"],
            for workout in workouts {
                tr {
                    key: "{workout.id}",
                    onclick: {
                        let id = workout.id;
                        move |_| { nav.push(Route::WorkoutEdit { id }); }
                    },
                    td { "{workout.name}" }
                    td {
                        {
                            workout
                                .client_id
                                .map(|id| format!("Cliente #{id}"))
                                .unwrap_or_else(|| "Modelo".to_string())
                        }
                    }
                    td { {workout.exercises.len().to_string()} }
                }
            }
        }
    }
}

#[component]
pub fn WorkoutNew() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();

    rsx! {
        div {
            class: "page-header",
            h1 { "Novo plano" }
        }
        WorkoutBuilder {
            existing: None,
            on_submit: move |payload: WorkoutPayload| {
                spawn(async move {
                    let api = authed_api(&auth());
                    match api.create_workout(&payload).await {
                        Ok(()) => { nav.push(Route::Workouts {}); }
                        Err(err) => feedback.set(Feedback::error(err)),
                    }
                });
            },
        }
    }
}

#[component]
pub fn WorkoutEdit(id: i64) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut workout = use_signal(|| Option::<Workout>::None);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        match api.get_workout(id).await {
            Ok(record) => workout.set(Some(record)),
            Err(err) => feedback.set(Feedback::error(err)),
        }
        loaded.set(true);
    });

    let handle_delete = move |_| {
        spawn(async move {
            let api = authed_api(&auth());
            match api.delete_workout(id).await {
                Ok(()) => { nav.push(Route::Workouts {}); }
                Err(err) => feedback.set(Feedback::error(err)),
            }
        });
    };

    if !loaded() {
        return rsx! { Loading {} };
    }
    let Some(record) = workout() else {
        return rsx! { EmptyState { message: "Plano não encontrado." } };
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "Editar plano" }
            Button {
                variant: ButtonVariant::Danger,
                onclick: handle_delete,
                "Eliminar"
            }
        }
        WorkoutBuilder {
            existing: Some(record),
            on_submit: move |payload: WorkoutPayload| {
                spawn(async move {
                    let api = authed_api(&auth());
                    match api.update_workout(id, &payload).await {
                        Ok(()) => { nav.push(Route::Workouts {}); }
                        Err(err) => feedback.set(Feedback::error(err)),
                    }
                });
            },
        }
    }
}

#[component]
fn WorkoutBuilder(existing: Option<Workout>, on_submit: EventHandler<WorkoutPayload>) -> Element {
    let auth = use_auth();
    let mut feedback = use_feedback();
    let mut catalogue = use_signal(Vec::<Exercise>::new);
    let mut clients = use_signal(Vec::<Client>::new);
    let mut list = use_signal(ExerciseList::new);
    let mut picked_exercise = use_signal(String::new);

    let mut name = use_signal({
        let initial = existing.as_ref().map(|w| w.name.clone()).unwrap_or_default();
        move || initial
    });
    let mut client_id = use_signal({
        let initial = existing
            .as_ref()
            .and_then(|w| w.client_id)
            .map(|id| id.to_string())
            .unwrap_or_default();
        move || initial
    });
    let mut notes = use_signal({
        let initial = existing.as_ref().and_then(|w| w.notes.clone()).unwrap_or_default();
        move || initial
    });

    // The draft can only be rebuilt once the catalogue is known.
    let existing_for_loader = existing.clone();
    let _loader = use_resource(move || {
        let existing = existing_for_loader.clone();
        async move {
            let api = authed_api(&auth());
            let (exercises, client_list) = futures::join!(api.list_exercises(), api.list_clients());
            match exercises {
                Ok(fetched) => {
                    if let Some(workout) = &existing {
                        list.set(ExerciseList::from_workout(workout, &fetched));
                    }
                    catalogue.set(fetched);
                }
                Err(err) => feedback.set(Feedback::error(err)),
            }
            if let Ok(fetched) = client_list {
                clients.set(fetched);
            }
        }
    });

    let handle_add = move |_| {
        let Ok(id) = picked_exercise().parse::<i64>() else {
            return;
        };
        if let Some(exercise) = catalogue().into_iter().find(|e| e.id == id) {
            list.write().push(exercise);
            picked_exercise.set(String::new());
        }
    };

    let handle_submit = move |_| {
        let payload = list().to_payload(
            name().trim().to_string(),
            client_id().parse().ok(),
            non_empty(notes()),
        );
        if let Err(errors) = payload.validate() {
            feedback.set(Feedback::error(first_validation_message(&errors)));
            return;
        }
        on_submit.call(payload);
    };

    let client_options: Vec<(String, String)> =
        std::iter::once((String::new(), "Modelo (sem cliente)".to_string()))
            .chain(clients().into_iter().map(|c| (c.id.to_string(), c.full_name())))
            .collect();
    let exercise_options: Vec<(String, String)> =
        std::iter::once((String::new(), "Escolher exercício".to_string()))
            .chain(catalogue().into_iter().map(|e| (e.id.to_string(), e.name)))
            .collect();

    rsx! {
        div {
            class: "form-card",
            div {
                class: "form-grid",
                TextField {
                    label: "Nome do plano",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                SelectField {
                    label: "Cliente",
                    value: client_id(),
                    options: client_options,
                    onchange: move |evt: FormEvent| client_id.set(evt.value()),
                }
            }
            TextareaField {
                label: "Notas",
                value: notes(),
                oninput: move |evt: FormEvent| notes.set(evt.value()),
            }
        }

        div {
            class: "builder-add",
            SelectField {
                label: "Adicionar exercício",
                value: picked_exercise(),
                options: exercise_options,
                onchange: move |evt: FormEvent| picked_exercise.set(evt.value()),
            }
            Button {
                variant: ButtonVariant::Secondary,
                onclick: handle_add,
                "Adicionar"
            }
        }

        if list().is_empty() {
            EmptyState { message: "O plano ainda não tem exercícios." }
        }

        for (index, entry) in list().entries.into_iter().enumerate() {
            div {
                key: "{index}-{entry.exercise.id}",
                class: "builder-entry",
                div {
                    class: "builder-entry-header",
                    span { class: "builder-entry-name", "{entry.exercise.name}" }
                    div {
                        class: "builder-entry-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            title: "Subir",
                            onclick: move |_| list.write().move_up(index),
                            Icon { icon: FaArrowUp, width: 14, height: 14 }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            title: "Descer",
                            onclick: move |_| list.write().move_down(index),
                            Icon { icon: FaArrowDown, width: 14, height: 14 }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            title: "Remover exercício",
                            onclick: move |_| list.write().remove(index),
                            Icon { icon: FaTrashCan, width: 14, height: 14 }
                        }
                    }
                }

                table {
                    class: "builder-sets",
                    thead {
                        tr {
                            th { "Série" }
                            for kind in entry.columns() {
                                th { {kind.label()} }
                            }
                            th { "" }
                        }
                    }
                    tbody {
                        for (set_index, set) in entry.sets.iter().enumerate() {
                            tr {
                                key: "{set_index}",
                                td { {(set_index + 1).to_string()} }
                                td {
                                    input {
                                        r#type: "number",
                                        value: "{set.first}",
                                        oninput: move |evt| {
                                            list.write().set_value(index, set_index, 0, evt.value());
                                        },
                                    }
                                }
                                if entry.columns().len() > 1 {
                                    td {
                                        input {
                                            r#type: "number",
                                            value: "{set.second}",
                                            oninput: move |evt| {
                                                list.write().set_value(index, set_index, 1, evt.value());
                                            },
                                        }
                                    }
                                }
                                td {
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Remover série",
                                        onclick: move |_| list.write().remove_set(index, set_index),
                                        Icon { icon: FaTrashCan, width: 12, height: 12 }
                                    }
                                }
                            }
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| list.write().add_set(index),
                    "Adicionar série"
                }
            }
        }

        div {
            class: "form-actions",
            Button {
                variant: ButtonVariant::Primary,
                onclick: handle_submit,
                "Guardar plano"
            }
        }
    }
}
