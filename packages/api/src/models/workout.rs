use serde::{Deserialize, Serialize};

use super::Exercise;

/// A named workout plan: an ordered list of exercises with per-set targets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    pub name: String,
    /// Plans can be templates (no client) or assigned to one client.
    #[serde(default)]
    pub client_id: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
}

/// One exercise inside a plan. `order` is 1-based and contiguous; the
/// backend returns exercises already sorted by it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    #[serde(default)]
    pub id: Option<i64>,
    pub exercise_id: i64,
    pub order: u32,
    #[serde(default)]
    pub exercise: Option<Exercise>,
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

/// Target values for one set. Only the fields matching the exercise's
/// configured measurement kinds are populated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub set_number: u32,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub time_sec: Option<u32>,
    #[serde(default)]
    pub distance_m: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_nested_plan() {
        let json = r#"{
            "id": 5, "name": "Força A",
            "client_id": 3,
            "exercises": [
                {"exercise_id": 11, "order": 1,
                 "sets": [{"set_number": 1, "reps": 8, "weight_kg": 60.0}]},
                {"exercise_id": 12, "order": 2, "sets": []}
            ]
        }"#;
        let w: Workout = serde_json::from_str(json).unwrap();
        assert_eq!(w.exercises.len(), 2);
        assert_eq!(w.exercises[0].sets[0].reps, Some(8));
        assert_eq!(w.exercises[1].order, 2);
    }
}
