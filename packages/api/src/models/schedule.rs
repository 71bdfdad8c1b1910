use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::Client;

/// An appointment on the trainer's calendar.
///
/// `date` and `time` come as separate fields from the API (`"2026-03-14"`,
/// `"14:30:00"`); duration is minutes. Overlapping appointments are allowed —
/// the day view draws them as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: i64,
    pub client_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_min: u32,
    #[serde(default)]
    pub location_id: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Embedded client record, when the backend expands it.
    #[serde(default)]
    pub client: Option<Client>,
}

impl Schedule {
    /// Appointments on a given day, in start-time order.
    pub fn for_day(all: &[Schedule], day: NaiveDate) -> Vec<Schedule> {
        let mut day_items: Vec<Schedule> =
            all.iter().filter(|s| s.date == day).cloned().collect();
        day_items.sort_by(by_date_time);
        day_items
    }
}

/// Listing sort: by date, then start time.
pub fn by_date_time(a: &Schedule, b: &Schedule) -> std::cmp::Ordering {
    a.date.cmp(&b.date).then(a.time.cmp(&b.time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appt(id: i64, date: &str, time: &str) -> Schedule {
        Schedule {
            id,
            client_id: 1,
            date: date.parse().unwrap(),
            time: time.parse().unwrap(),
            duration_min: 60,
            location_id: None,
            notes: None,
            client: None,
        }
    }

    #[test]
    fn test_sorts_by_date_then_time() {
        let mut items = vec![
            appt(1, "2026-03-15", "09:00"),
            appt(2, "2026-03-14", "18:00"),
            appt(3, "2026-03-14", "07:30"),
        ];
        items.sort_by(by_date_time);
        assert_eq!(items.iter().map(|s| s.id).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_for_day_filters_and_orders() {
        let all = vec![
            appt(1, "2026-03-15", "09:00"),
            appt(2, "2026-03-14", "18:00"),
            appt(3, "2026-03-14", "07:30"),
        ];
        let day = Schedule::for_day(&all, "2026-03-14".parse().unwrap());
        assert_eq!(day.iter().map(|s| s.id).collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn test_decodes_api_shape() {
        let json = r#"{
            "id": 3, "client_id": 9,
            "date": "2026-03-14", "time": "14:30:00",
            "duration_min": 45
        }"#;
        let s: Schedule = serde_json::from_str(json).unwrap();
        assert_eq!(s.time.format("%H:%M").to_string(), "14:30");
        assert!(s.client.is_none());
    }
}
