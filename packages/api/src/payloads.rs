//! Request bodies for every form screen, with declarative validation.
//!
//! Pages call `.validate()` before submitting; the rules here mirror what
//! the backend enforces (required names, bounded lengths, numeric ranges).
//! Server-side rejections still come back as [`crate::ApiError::Status`]
//! and are shown verbatim.

use chrono::NaiveDate;
use chrono::NaiveTime;
use serde::Serialize;
use validator::{Validate, ValidationError};

use crate::models::MeasurementKind;

#[derive(Clone, Debug, Serialize, Validate)]
pub struct LoginPayload {
    #[validate(email(message = "email inválido"))]
    pub email: String,
    #[validate(length(min = 6, message = "a palavra-passe tem pelo menos 6 caracteres"))]
    pub password: String,
}

#[derive(Clone, Debug, Default, Serialize, Validate)]
pub struct ClientPayload {
    #[validate(length(min = 1, max = 80, message = "nome próprio é obrigatório (máx. 80)"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 80, message = "apelido é obrigatório (máx. 80)"))]
    pub last_name: String,
    #[validate(email(message = "email inválido"))]
    pub email: Option<String>,
    #[validate(length(max = 30, message = "telefone demasiado longo"))]
    pub phone: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub location_id: Option<i64>,
    pub active: bool,
    #[validate(length(max = 1000, message = "notas até 1000 caracteres"))]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Validate)]
pub struct SchedulePayload {
    #[validate(range(min = 1, message = "escolha um cliente"))]
    pub client_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[validate(range(min = 15, max = 240, message = "duração entre 15 e 240 minutos"))]
    pub duration_min: u32,
    pub location_id: Option<i64>,
    #[validate(length(max = 500, message = "notas até 500 caracteres"))]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Validate)]
pub struct MeasurementPayload {
    #[validate(range(min = 1, message = "escolha um cliente"))]
    pub client_id: i64,
    pub date: NaiveDate,
    #[validate(range(min = 20.0, max = 400.0, message = "peso entre 20 e 400 kg"))]
    pub weight_kg: f64,
    #[validate(range(min = 50.0, max = 250.0, message = "altura entre 50 e 250 cm"))]
    pub height_cm: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0, message = "massa gorda entre 0 e 100%"))]
    pub body_fat_pct: Option<f64>,
    pub chest_cm: Option<f64>,
    pub waist_cm: Option<f64>,
    pub hip_cm: Option<f64>,
    pub arm_cm: Option<f64>,
    pub thigh_cm: Option<f64>,
    #[validate(length(max = 1000, message = "notas até 1000 caracteres"))]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Validate)]
#[validate(schema(function = "validate_exercise_kinds"))]
pub struct ExercisePayload {
    #[validate(length(min = 1, max = 120, message = "nome é obrigatório (máx. 120)"))]
    pub name: String,
    #[validate(length(max = 2000, message = "descrição até 2000 caracteres"))]
    pub description: Option<String>,
    pub measurement_1: MeasurementKind,
    pub measurement_2: Option<MeasurementKind>,
    pub bodypart_ids: Vec<i64>,
    pub equipment_ids: Vec<i64>,
}

/// The two configured kinds must differ; "max 2" is structural here and
/// enforced interactively by the selector widget.
fn validate_exercise_kinds(payload: &ExercisePayload) -> Result<(), ValidationError> {
    if payload.measurement_2 == Some(payload.measurement_1) {
        return Err(ValidationError::new("duplicate_measurement")
            .with_message("os dois tipos de medição têm de ser diferentes".into()));
    }
    Ok(())
}

#[derive(Clone, Debug, Serialize, Validate)]
pub struct WorkoutPayload {
    #[validate(length(min = 1, max = 120, message = "nome é obrigatório (máx. 120)"))]
    pub name: String,
    pub client_id: Option<i64>,
    #[validate(length(max = 1000, message = "notas até 1000 caracteres"))]
    pub notes: Option<String>,
    #[validate(
        length(min = 1, message = "o plano precisa de pelo menos um exercício"),
        nested
    )]
    pub exercises: Vec<WorkoutExercisePayload>,
}

#[derive(Clone, Debug, Serialize, Validate)]
pub struct WorkoutExercisePayload {
    #[validate(range(min = 1, message = "exercício inválido"))]
    pub exercise_id: i64,
    /// 1-based position in the plan; contiguous, assigned at submit time.
    #[validate(range(min = 1))]
    pub order: u32,
    #[validate(length(min = 1, message = "cada exercício precisa de pelo menos uma série"))]
    pub sets: Vec<WorkoutSetPayload>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct WorkoutSetPayload {
    pub set_number: u32,
    pub reps: Option<u32>,
    pub weight_kg: Option<f64>,
    pub time_sec: Option<u32>,
    pub distance_m: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Validate)]
pub struct PackagePayload {
    #[validate(length(min = 1, max = 120, message = "nome é obrigatório (máx. 120)"))]
    pub name: String,
    #[validate(length(max = 1000, message = "descrição até 1000 caracteres"))]
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "preço não pode ser negativo"))]
    pub price: f64,
    #[validate(range(min = 1, max = 14, message = "sessões semanais entre 1 e 14"))]
    pub sessions_per_week: Option<u32>,
    #[validate(range(min = 1, message = "duração em dias tem de ser positiva"))]
    pub duration_days: Option<u32>,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize, Validate)]
pub struct SubscriptionPayload {
    #[validate(range(min = 1, message = "escolha um cliente"))]
    pub client_id: i64,
    #[validate(range(min = 1, message = "escolha um pacote"))]
    pub package_id: i64,
    pub start_date: NaiveDate,
}

#[derive(Clone, Debug, Serialize, Validate)]
pub struct InvoicePayload {
    #[validate(range(min = 1, message = "escolha um cliente"))]
    pub client_id: i64,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    #[validate(range(min = 0.01, message = "o total tem de ser positivo"))]
    pub total: f64,
    #[validate(length(max = 500, message = "notas até 500 caracteres"))]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Validate)]
pub struct PaymentPayload {
    #[validate(range(min = 1, message = "fatura inválida"))]
    pub invoice_id: i64,
    pub date: NaiveDate,
    #[validate(range(min = 0.01, message = "o valor tem de ser positivo"))]
    pub amount: f64,
    #[validate(length(max = 40, message = "método até 40 caracteres"))]
    pub method: Option<String>,
}

#[derive(Clone, Debug, Serialize, Validate)]
pub struct LocationPayload {
    #[validate(length(min = 1, max = 120, message = "nome é obrigatório (máx. 120)"))]
    pub name: String,
    #[validate(length(max = 200, message = "morada até 200 caracteres"))]
    pub address: Option<String>,
    #[validate(length(max = 80, message = "cidade até 80 caracteres"))]
    pub city: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_payload_requires_names() {
        let payload = ClientPayload {
            first_name: String::new(),
            last_name: "Reis".to_string(),
            active: true,
            ..Default::default()
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn test_schedule_duration_bounds() {
        let mut payload = SchedulePayload {
            client_id: 3,
            date: "2026-03-14".parse().unwrap(),
            time: "14:30:00".parse().unwrap(),
            duration_min: 10,
            location_id: None,
            notes: None,
        };
        assert!(payload.validate().is_err());
        payload.duration_min = 60;
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_exercise_rejects_duplicate_kinds() {
        let payload = ExercisePayload {
            name: "Supino".to_string(),
            description: None,
            measurement_1: MeasurementKind::Reps,
            measurement_2: Some(MeasurementKind::Reps),
            bodypart_ids: vec![1],
            equipment_ids: vec![],
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_workout_needs_exercises_and_sets() {
        let empty = WorkoutPayload {
            name: "Plano A".to_string(),
            client_id: None,
            notes: None,
            exercises: vec![],
        };
        assert!(empty.validate().is_err());

        let no_sets = WorkoutPayload {
            name: "Plano A".to_string(),
            client_id: None,
            notes: None,
            exercises: vec![WorkoutExercisePayload {
                exercise_id: 4,
                order: 1,
                sets: vec![],
            }],
        };
        assert!(no_sets.validate().is_err());

        let ok = WorkoutPayload {
            name: "Plano A".to_string(),
            client_id: Some(2),
            notes: None,
            exercises: vec![WorkoutExercisePayload {
                exercise_id: 4,
                order: 1,
                sets: vec![WorkoutSetPayload {
                    set_number: 1,
                    reps: Some(10),
                    ..Default::default()
                }],
            }],
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_payment_amount_positive() {
        let payload = PaymentPayload {
            invoice_id: 1,
            date: "2026-01-10".parse().unwrap(),
            amount: 0.0,
            method: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_login_payload() {
        let bad = LoginPayload {
            email: "not-an-email".to_string(),
            password: "123456".to_string(),
        };
        assert!(bad.validate().is_err());

        let ok = LoginPayload {
            email: "sofia@fit.pt".to_string(),
            password: "123456".to_string(),
        };
        assert!(ok.validate().is_ok());
    }
}
