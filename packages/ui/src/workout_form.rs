//! Draft model for the workout builder.
//!
//! The plan under edit is an explicit ordered list with move/insert/remove
//! operations. Set values are kept as raw input strings while editing and
//! only parsed when the payload is built; order numbers exist nowhere in
//! the draft and are assigned, contiguous from 1, at the submit boundary.

use api::payloads::{WorkoutExercisePayload, WorkoutPayload, WorkoutSetPayload};
use api::{Exercise, MeasurementKind, Workout};

/// Raw input for one set: one string per configured measurement column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SetEntry {
    pub first: String,
    pub second: String,
}

/// One exercise row in the builder, with its set grid.
#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseEntry {
    pub exercise: Exercise,
    pub sets: Vec<SetEntry>,
}

impl ExerciseEntry {
    fn new(exercise: Exercise) -> Self {
        Self {
            exercise,
            sets: vec![SetEntry::default()],
        }
    }

    /// Column headers for this exercise, from its configured kinds.
    pub fn columns(&self) -> Vec<MeasurementKind> {
        self.exercise.measurement_kinds()
    }
}

/// The ordered list of exercises under edit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExerciseList {
    pub entries: Vec<ExerciseEntry>,
}

impl ExerciseList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an exercise with one empty set.
    pub fn push(&mut self, exercise: Exercise) {
        self.entries.push(ExerciseEntry::new(exercise));
    }

    /// Remove exactly one entry; siblings keep their relative order.
    pub fn remove(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    pub fn move_up(&mut self, index: usize) {
        if index > 0 && index < self.entries.len() {
            self.entries.swap(index - 1, index);
        }
    }

    pub fn move_down(&mut self, index: usize) {
        if index + 1 < self.entries.len() {
            self.entries.swap(index, index + 1);
        }
    }

    pub fn add_set(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.sets.push(SetEntry::default());
        }
    }

    pub fn remove_set(&mut self, index: usize, set_index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            if entry.sets.len() > 1 && set_index < entry.sets.len() {
                entry.sets.remove(set_index);
            }
        }
    }

    pub fn set_value(&mut self, index: usize, set_index: usize, column: usize, value: String) {
        if let Some(set) = self
            .entries
            .get_mut(index)
            .and_then(|e| e.sets.get_mut(set_index))
        {
            match column {
                0 => set.first = value,
                _ => set.second = value,
            }
        }
    }

    /// Rebuild a draft from a fetched plan. Exercise records come from the
    /// embedded expansion when present, otherwise from the catalogue;
    /// entries whose exercise no longer exists anywhere are skipped.
    pub fn from_workout(workout: &Workout, catalogue: &[Exercise]) -> Self {
        let mut ordered = workout.exercises.clone();
        ordered.sort_by_key(|e| e.order);

        let mut list = Self::new();
        for item in &ordered {
            let Some(exercise) = item.exercise.clone().or_else(|| {
                catalogue.iter().find(|e| e.id == item.exercise_id).cloned()
            }) else {
                continue;
            };
            let columns = exercise.measurement_kinds();
            let mut entry = ExerciseEntry {
                exercise,
                sets: Vec::new(),
            };
            for set in &item.sets {
                let mut raw = SetEntry::default();
                for (column, kind) in columns.iter().enumerate() {
                    let value = match kind {
                        MeasurementKind::Reps => set.reps.map(|v| v.to_string()),
                        MeasurementKind::Weight => set.weight_kg.map(|v| v.to_string()),
                        MeasurementKind::Time => set.time_sec.map(|v| v.to_string()),
                        MeasurementKind::Distance => set.distance_m.map(|v| v.to_string()),
                    }
                    .unwrap_or_default();
                    match column {
                        0 => raw.first = value,
                        _ => raw.second = value,
                    }
                }
                entry.sets.push(raw);
            }
            if entry.sets.is_empty() {
                entry.sets.push(SetEntry::default());
            }
            list.entries.push(entry);
        }
        list
    }

    /// Build the request body. Order and set numbers are serialized from
    /// the current positions, contiguous from 1.
    pub fn to_payload(
        &self,
        name: String,
        client_id: Option<i64>,
        notes: Option<String>,
    ) -> WorkoutPayload {
        WorkoutPayload {
            name,
            client_id,
            notes,
            exercises: self
                .entries
                .iter()
                .enumerate()
                .map(|(index, entry)| WorkoutExercisePayload {
                    exercise_id: entry.exercise.id,
                    order: index as u32 + 1,
                    sets: entry
                        .sets
                        .iter()
                        .enumerate()
                        .map(|(set_index, set)| {
                            build_set(set_index as u32 + 1, &entry.columns(), set)
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Route each raw column string into the field matching its kind.
fn build_set(set_number: u32, columns: &[MeasurementKind], entry: &SetEntry) -> WorkoutSetPayload {
    let mut set = WorkoutSetPayload {
        set_number,
        ..Default::default()
    };
    let values = [entry.first.trim(), entry.second.trim()];
    for (kind, raw) in columns.iter().zip(values) {
        if raw.is_empty() {
            continue;
        }
        match kind {
            MeasurementKind::Reps => set.reps = raw.parse().ok(),
            MeasurementKind::Weight => set.weight_kg = raw.parse().ok(),
            MeasurementKind::Time => set.time_sec = raw.parse().ok(),
            MeasurementKind::Distance => set.distance_m = raw.parse().ok(),
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(id: i64, name: &str, first: MeasurementKind, second: Option<MeasurementKind>) -> Exercise {
        Exercise {
            id,
            name: name.to_string(),
            description: None,
            measurement_1: first,
            measurement_2: second,
            bodyparts: Vec::new(),
            equipment: Vec::new(),
            media: Vec::new(),
        }
    }

    fn sample_list() -> ExerciseList {
        let mut list = ExerciseList::new();
        list.push(exercise(10, "Supino", MeasurementKind::Reps, Some(MeasurementKind::Weight)));
        list.push(exercise(11, "Corrida", MeasurementKind::Time, Some(MeasurementKind::Distance)));
        list.push(exercise(12, "Prancha", MeasurementKind::Time, None));
        list
    }

    #[test]
    fn test_remove_keeps_sibling_order_and_contiguous_serialization() {
        let mut list = sample_list();
        list.remove(1);

        assert_eq!(list.entries.len(), 2);
        assert_eq!(list.entries[0].exercise.id, 10);
        assert_eq!(list.entries[1].exercise.id, 12);

        let payload = list.to_payload("Plano A".to_string(), None, None);
        let orders: Vec<u32> = payload.exercises.iter().map(|e| e.order).collect();
        assert_eq!(orders, vec![1, 2]);
        assert_eq!(payload.exercises[1].exercise_id, 12);
    }

    #[test]
    fn test_move_down_swaps_positions() {
        let mut list = sample_list();
        list.move_down(0);
        let ids: Vec<i64> = list.entries.iter().map(|e| e.exercise.id).collect();
        assert_eq!(ids, vec![11, 10, 12]);

        // Order is positional at serialize time, not stored on entries.
        let payload = list.to_payload("Plano A".to_string(), None, None);
        assert_eq!(payload.exercises[0].exercise_id, 11);
        assert_eq!(payload.exercises[0].order, 1);
    }

    #[test]
    fn test_move_up_at_top_is_noop() {
        let mut list = sample_list();
        list.move_up(0);
        assert_eq!(list.entries[0].exercise.id, 10);
    }

    #[test]
    fn test_set_values_route_by_kind() {
        let mut list = sample_list();
        list.set_value(0, 0, 0, "8".to_string());
        list.set_value(0, 0, 1, "62.5".to_string());
        list.add_set(0);
        list.set_value(0, 1, 0, "6".to_string());

        let payload = list.to_payload("Plano A".to_string(), Some(3), None);
        let sets = &payload.exercises[0].sets;
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].set_number, 1);
        assert_eq!(sets[0].reps, Some(8));
        assert_eq!(sets[0].weight_kg, Some(62.5));
        assert_eq!(sets[1].set_number, 2);
        assert_eq!(sets[1].reps, Some(6));
        assert_eq!(sets[1].weight_kg, None);
    }

    #[test]
    fn test_unparseable_input_is_dropped() {
        let mut list = sample_list();
        list.set_value(2, 0, 0, "muito".to_string());
        let payload = list.to_payload("Plano A".to_string(), None, None);
        assert_eq!(payload.exercises[2].sets[0].time_sec, None);
    }

    #[test]
    fn test_from_workout_restores_order_and_values() {
        use api::{Workout, WorkoutExercise, WorkoutSet};

        let catalogue = vec![
            exercise(10, "Supino", MeasurementKind::Reps, Some(MeasurementKind::Weight)),
            exercise(11, "Corrida", MeasurementKind::Time, Some(MeasurementKind::Distance)),
        ];
        let workout = Workout {
            id: 1,
            name: "Plano A".to_string(),
            client_id: None,
            notes: None,
            exercises: vec![
                // Out of order on purpose; the draft sorts by `order`.
                WorkoutExercise {
                    id: None,
                    exercise_id: 11,
                    order: 2,
                    exercise: None,
                    sets: vec![],
                },
                WorkoutExercise {
                    id: None,
                    exercise_id: 10,
                    order: 1,
                    exercise: None,
                    sets: vec![WorkoutSet {
                        set_number: 1,
                        reps: Some(8),
                        weight_kg: Some(60.0),
                        ..Default::default()
                    }],
                },
            ],
        };

        let list = ExerciseList::from_workout(&workout, &catalogue);
        assert_eq!(list.entries.len(), 2);
        assert_eq!(list.entries[0].exercise.id, 10);
        assert_eq!(list.entries[0].sets[0].first, "8");
        assert_eq!(list.entries[0].sets[0].second, "60");
        // Empty sets are padded so the grid always has a row to edit.
        assert_eq!(list.entries[1].sets.len(), 1);
    }

    #[test]
    fn test_last_set_cannot_be_removed() {
        let mut list = sample_list();
        list.remove_set(0, 0);
        assert_eq!(list.entries[0].sets.len(), 1);
    }
}
