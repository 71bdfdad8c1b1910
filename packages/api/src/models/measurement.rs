use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An anthropometric physical-test record for a client.
///
/// Weight is the only mandatory measurement; the rest depend on what the
/// trainer actually measured that day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: i64,
    pub client_id: i64,
    pub date: NaiveDate,
    pub weight_kg: f64,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub body_fat_pct: Option<f64>,
    #[serde(default)]
    pub chest_cm: Option<f64>,
    #[serde(default)]
    pub waist_cm: Option<f64>,
    #[serde(default)]
    pub hip_cm: Option<f64>,
    #[serde(default)]
    pub arm_cm: Option<f64>,
    #[serde(default)]
    pub thigh_cm: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_sparse_record() {
        let json = r#"{"id":1,"client_id":2,"date":"2026-01-05","weight_kg":82.4}"#;
        let m: Measurement = serde_json::from_str(json).unwrap();
        assert_eq!(m.weight_kg, 82.4);
        assert!(m.body_fat_pct.is_none());
    }
}
