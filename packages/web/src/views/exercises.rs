//! Exercise catalogue: filterable listing and the configuration form.

use api::payloads::ExercisePayload;
use api::{Bodypart, Equipment, Exercise, MeasurementKind};
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, DataTable, EmptyState, Loading, SelectField, TextField, TextareaField,
};
use ui::filters::by_bodypart;
use ui::{use_auth, use_feedback, Feedback, KindSelection, KindSelector};
use validator::Validate;

use super::{authed_api, first_validation_message, non_empty};
use crate::Route;

#[component]
pub fn Exercises() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut exercises = use_signal(Vec::<Exercise>::new);
    let mut bodyparts = use_signal(Vec::<Bodypart>::new);
    let mut loaded = use_signal(|| false);
    let mut query = use_signal(String::new);
    let mut bodypart_filter = use_signal(String::new);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        let (exercise_list, bodypart_list) =
            futures::join!(api.list_exercises(), api.list_bodyparts());
        match exercise_list {
            Ok(list) => exercises.set(list),
            Err(err) => feedback.set(Feedback::error(err)),
        }
        if let Ok(list) = bodypart_list {
            bodyparts.set(list);
        }
        loaded.set(true);
    });

    let filtered: Vec<Exercise> = by_bodypart(&exercises(), bodypart_filter().parse().ok())
        .into_iter()
        .filter(|e| e.name.to_lowercase().contains(&query().to_lowercase()))
        .collect();

    let bodypart_options: Vec<(String, String)> =
        std::iter::once((String::new(), "Todos os grupos".to_string()))
            .chain(bodyparts().into_iter().map(|b| (b.id.to_string(), b.name)))
            .collect();

    rsx! {
        div {
            class: "page-header",
            h1 { "Exercícios" }
            Button {
                onclick: move |_| { nav.push(Route::ExerciseNew {}); },
                "Novo exercício"
            }
        }

        div {
            class: "form-grid",
            TextField {
                label: "Pesquisar",
                value: query(),
                placeholder: "Nome do exercício",
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }
            SelectField {
                label: "Grupo muscular",
                value: bodypart_filter(),
                options: bodypart_options,
                onchange: move |evt: FormEvent| bodypart_filter.set(evt.value()),
            }
        }

        if !loaded() {
            Loading {}
        } else if filtered.is_empty() {
            EmptyState { message: "Sem exercícios para mostrar." }
        } else {
            DataTable {
                headers: vec!["Nome", "Medições", "Grupos musculares"],
                for exercise in filtered {
                    tr {
                        key: "{exercise.id}",
                        onclick: {
                            let id = exercise.id;
                            move |_| { nav.push(Route::ExerciseEdit { id }); }
                        },
                        td { "{exercise.name}" }
                        td {
                            {
                                exercise
                                    .measurement_kinds()
                                    .iter()
                                    .map(|k| k.label())
                                    .collect::<Vec<_>>()
                                    .join(" + ")
                            }
                        }
                        td {
                            {
                                exercise
                                    .bodyparts
                                    .iter()
                                    .map(|b| b.name.as_str())
                                    .collect::<Vec<_>>()
                                    .join(", ")
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ExerciseNew() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();

    rsx! {
        div {
            class: "page-header",
            h1 { "Novo exercício" }
        }
        ExerciseForm {
            existing: None,
            on_submit: move |payload: ExercisePayload| {
                spawn(async move {
                    let api = authed_api(&auth());
                    match api.create_exercise(&payload).await {
                        Ok(()) => { nav.push(Route::Exercises {}); }
                        Err(err) => feedback.set(Feedback::error(err)),
                    }
                });
            },
        }
    }
}

#[component]
pub fn ExerciseEdit(id: i64) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut feedback = use_feedback();
    let mut exercise = use_signal(|| Option::<Exercise>::None);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let api = authed_api(&auth());
        match api.get_exercise(id).await {
            Ok(record) => exercise.set(Some(record)),
            Err(err) => feedback.set(Feedback::error(err)),
        }
        loaded.set(true);
    });

    if !loaded() {
        return rsx! { Loading {} };
    }
    let Some(record) = exercise() else {
        return rsx! { EmptyState { message: "Exercício não encontrado." } };
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "{record.name}" }
        }
        ExerciseForm {
            existing: Some(record),
            on_submit: move |payload: ExercisePayload| {
                spawn(async move {
                    let api = authed_api(&auth());
                    match api.update_exercise(id, &payload).await {
                        Ok(()) => { nav.push(Route::Exercises {}); }
                        Err(err) => feedback.set(Feedback::error(err)),
                    }
                });
            },
        }
    }
}

#[component]
fn ExerciseForm(existing: Option<Exercise>, on_submit: EventHandler<ExercisePayload>) -> Element {
    let auth = use_auth();
    let mut feedback = use_feedback();
    let mut bodyparts = use_signal(Vec::<Bodypart>::new);
    let mut equipment = use_signal(Vec::<Equipment>::new);

    let mut name = use_signal({
        let initial = existing.as_ref().map(|e| e.name.clone()).unwrap_or_default();
        move || initial
    });
    let mut description = use_signal({
        let initial = existing
            .as_ref()
            .and_then(|e| e.description.clone())
            .unwrap_or_default();
        move || initial
    });
    let mut kinds = use_signal({
        let initial = existing
            .as_ref()
            .map(|e| KindSelection::from_exercise(e.measurement_1, e.measurement_2))
            .unwrap_or_default();
        move || initial
    });
    let mut bodypart_ids = use_signal({
        let initial: Vec<i64> = existing
            .as_ref()
            .map(|e| e.bodyparts.iter().map(|b| b.id).collect())
            .unwrap_or_default();
        move || initial
    });
    let mut equipment_ids = use_signal({
        let initial: Vec<i64> = existing
            .as_ref()
            .map(|e| e.equipment.iter().map(|eq| eq.id).collect())
            .unwrap_or_default();
        move || initial
    });

    let _lookups = use_resource(move || async move {
        let api = authed_api(&auth());
        let (bodypart_list, equipment_list) =
            futures::join!(api.list_bodyparts(), api.list_equipment());
        if let Ok(list) = bodypart_list {
            bodyparts.set(list);
        }
        if let Ok(list) = equipment_list {
            equipment.set(list);
        }
    });

    // A third pick is refused by the selection model; the message goes to
    // the shared dialog and the selection stays as it was.
    let handle_toggle_kind = move |kind: MeasurementKind| {
        let mut selection = kinds();
        match selection.toggle(kind) {
            Ok(()) => kinds.set(selection),
            Err(message) => feedback.set(Feedback::error(message)),
        }
    };

    let handle_submit = move |_| {
        let Some(primary) = kinds().primary() else {
            feedback.set(Feedback::error("escolha pelo menos um tipo de medição"));
            return;
        };
        let payload = ExercisePayload {
            name: name().trim().to_string(),
            description: non_empty(description()),
            measurement_1: primary,
            measurement_2: kinds().secondary(),
            bodypart_ids: bodypart_ids(),
            equipment_ids: equipment_ids(),
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
                class: "form-field",
                label { "Medições por série (máx. 2)" }
                KindSelector {
                    selection: kinds(),
                    on_toggle: handle_toggle_kind,
                }
            }

            div {
                class: "form-field",
                label { "Grupos musculares" }
                div {
                    class: "tag-row",
                    for bodypart in bodyparts() {
                        {
                            let id = bodypart.id;
                            let selected = bodypart_ids().contains(&id);
                            rsx! {
                                button {
                                    key: "{id}",
                                    class: if selected { "tag tag--selected" } else { "tag" },
                                    onclick: move |_| {
                                        let mut ids = bodypart_ids();
                                        match ids.iter().position(|x| *x == id) {
                                            Some(position) => { ids.remove(position); }
                                            None => ids.push(id),
                                        }
                                        bodypart_ids.set(ids);
                                    },
                                    "{bodypart.name}"
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "form-field",
                label { "Equipamento" }
                div {
                    class: "tag-row",
                    for item in equipment() {
                        {
                            let id = item.id;
                            let selected = equipment_ids().contains(&id);
                            rsx! {
                                button {
                                    key: "{id}",
                                    class: if selected { "tag tag--selected" } else { "tag" },
                                    onclick: move |_| {
                                        let mut ids = equipment_ids();
                                        match ids.iter().position(|x| *x == id) {
                                            Some(position) => { ids.remove(position); }
                                            None => ids.push(id),
                                        }
                                        equipment_ids.set(ids);
                                    },
                                    "{item.name}"
                                }
                            }
                        }
                    }
                }
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
