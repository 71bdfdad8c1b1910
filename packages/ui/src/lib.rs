//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{sign_in, sign_out, use_auth, AuthProvider, AuthState};

mod feedback;
pub use feedback::{use_feedback, Feedback, FeedbackProvider, StatusDialog};

mod navbar;
pub use navbar::{NavBar, NavItem};

pub mod filters;

pub mod schedule_grid;
pub use schedule_grid::DayGrid;

pub mod workout_form;
pub use workout_form::{ExerciseEntry, ExerciseList, SetEntry};

pub mod exercise_form;
pub use exercise_form::{KindSelection, KindSelector};

pub const UI_CSS: Asset = asset!("/assets/ui.css");
