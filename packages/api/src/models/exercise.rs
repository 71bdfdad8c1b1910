use serde::{Deserialize, Serialize};

/// What an exercise records per set. Each exercise is configured with one
/// or two of these; the workout builder derives its input columns from them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementKind {
    Reps,
    Weight,
    Time,
    Distance,
}

impl MeasurementKind {
    /// Column label shown in the builder and in the client's workout view.
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementKind::Reps => "Repetições",
            MeasurementKind::Weight => "Peso (kg)",
            MeasurementKind::Time => "Tempo (s)",
            MeasurementKind::Distance => "Distância (m)",
        }
    }

    pub const ALL: [MeasurementKind; 4] = [
        MeasurementKind::Reps,
        MeasurementKind::Weight,
        MeasurementKind::Time,
        MeasurementKind::Distance,
    ];
}

/// A muscle group an exercise targets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bodypart {
    pub id: i64,
    pub name: String,
}

/// Equipment an exercise needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i64,
    pub name: String,
}

/// An image or video demonstrating the exercise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub id: i64,
    pub url: String,
    #[serde(default)]
    pub kind: Option<String>,
}

/// An exercise in the trainer's catalogue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Primary recorded measurement.
    pub measurement_1: MeasurementKind,
    /// Optional second measurement (at most two per exercise).
    #[serde(default)]
    pub measurement_2: Option<MeasurementKind>,
    #[serde(default)]
    pub bodyparts: Vec<Bodypart>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub media: Vec<Media>,
}

impl Exercise {
    /// The configured measurement kinds, in column order.
    pub fn measurement_kinds(&self) -> Vec<MeasurementKind> {
        let mut kinds = vec![self.measurement_1];
        if let Some(second) = self.measurement_2 {
            kinds.push(second);
        }
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MeasurementKind::Reps).unwrap(),
            r#""reps""#
        );
        let kind: MeasurementKind = serde_json::from_str(r#""distance""#).unwrap();
        assert_eq!(kind, MeasurementKind::Distance);
    }

    #[test]
    fn test_measurement_kinds_column_order() {
        let json = r#"{
            "id": 1, "name": "Supino",
            "measurement_1": "reps", "measurement_2": "weight"
        }"#;
        let ex: Exercise = serde_json::from_str(json).unwrap();
        assert_eq!(
            ex.measurement_kinds(),
            vec![MeasurementKind::Reps, MeasurementKind::Weight]
        );

        let json = r#"{"id": 2, "name": "Corrida", "measurement_1": "time"}"#;
        let ex: Exercise = serde_json::from_str(json).unwrap();
        assert_eq!(ex.measurement_kinds(), vec![MeasurementKind::Time]);
    }
}
