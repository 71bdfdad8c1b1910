//! One module per screen family. Every page follows the same lifecycle:
//! fetch what it needs on mount into page-local signals, render a loading
//! row until the data lands, and push operation outcomes into the shared
//! feedback dialog.

use api::Api;
use chrono::{NaiveDate, NaiveTime};
use ui::AuthState;
use validator::{ValidationErrors, ValidationErrorsKind};

mod client_area;
mod clients;
mod exercises;
mod home;
mod invoices;
mod locations;
mod login;
mod measurements;
mod not_found;
mod packages;
mod profile;
mod schedule;
mod workouts;

pub use client_area::{
    ClientAgenda, ClientAvaliacoes, ClientFaturas, ClientInicio, ClientTreinoDetail, ClientTreinos,
};
pub use clients::{ClientDetail, ClientNew, Clients};
pub use exercises::{ExerciseEdit, ExerciseNew, Exercises};
pub use home::Home;
pub use invoices::{
    ClientInvoices, InvoiceDetail, InvoiceNew, Invoices, PaymentNew, UnpaidInvoices,
};
pub use locations::{LocationEdit, LocationNew, Locations};
pub use login::Login;
pub use measurements::{ClientMeasurements, MeasurementDetail, MeasurementNew, Measurements};
pub use not_found::NotFound;
pub use packages::{PackageDetail, PackageNew, Packages, SubscriptionNew};
pub use profile::Profile;
pub use schedule::{ScheduleDay, ScheduleEdit, ScheduleNew};
pub use workouts::{ClientWorkouts, WorkoutEdit, WorkoutNew, Workouts};

/// API client carrying the cached token, if any.
pub(crate) fn authed_api(auth: &AuthState) -> Api {
    Api::new(auth.session.as_ref().map(|s| s.token.clone()))
}

/// `None` for whitespace-only input.
pub(crate) fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Value of an `<input type="date">`, if parseable.
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    value.parse().ok()
}

/// Value of an `<input type="time">`. Browsers send `HH:MM`, some send
/// seconds too.
pub(crate) fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// First human-readable message out of a validation failure, for the
/// feedback dialog.
pub(crate) fn first_validation_message(errors: &ValidationErrors) -> String {
    fn walk(errors: &ValidationErrors) -> Option<String> {
        for kind in errors.errors().values() {
            match kind {
                ValidationErrorsKind::Field(list) => {
                    if let Some(message) = list.iter().find_map(|e| e.message.clone()) {
                        return Some(message.into_owned());
                    }
                }
                ValidationErrorsKind::Struct(nested) => {
                    if let Some(message) = walk(nested) {
                        return Some(message);
                    }
                }
                ValidationErrorsKind::List(map) => {
                    for nested in map.values() {
                        if let Some(message) = walk(nested) {
                            return Some(message);
                        }
                    }
                }
            }
        }
        None
    }
    walk(errors).unwrap_or_else(|| "dados inválidos".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_trims() {
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty(" a ".to_string()), Some("a".to_string()));
    }

    #[test]
    fn test_parse_time_accepts_browser_formats() {
        assert!(parse_time("14:30").is_some());
        assert!(parse_time("14:30:00").is_some());
        assert!(parse_time("14h30").is_none());
    }

    #[test]
    fn test_first_validation_message_reaches_nested_errors() {
        use api::payloads::{WorkoutExercisePayload, WorkoutPayload};
        use validator::Validate;

        let payload = WorkoutPayload {
            name: "Plano".to_string(),
            client_id: None,
            notes: None,
            exercises: vec![WorkoutExercisePayload {
                exercise_id: 1,
                order: 1,
                sets: vec![],
            }],
        };
        let errors = payload.validate().unwrap_err();
        assert_eq!(
            first_validation_message(&errors),
            "cada exercício precisa de pelo menos uma série"
        );
    }
}
