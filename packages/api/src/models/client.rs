use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ClientLocation;

/// A client of the personal-training business.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub location_id: Option<i64>,
    /// Embedded training location. Newer backend payloads include it, older
    /// ones only send `location_id`.
    #[serde(default)]
    pub client_locations: Option<ClientLocation>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Client {
    /// First and last name joined with a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match of `query` against the full name.
    /// An empty query matches everyone.
    pub fn matches_query(&self, query: &str) -> bool {
        self.full_name()
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// Listing sort: active clients first, then alphabetically by full name.
pub fn by_active_then_name(a: &Client, b: &Client) -> std::cmp::Ordering {
    b.active
        .cmp(&a.active)
        .then_with(|| a.full_name().to_lowercase().cmp(&b.full_name().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: i64, first: &str, last: &str, active: bool) -> Client {
        Client {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: None,
            phone: None,
            birthdate: None,
            active,
            location_id: None,
            client_locations: None,
            notes: None,
        }
    }

    #[test]
    fn test_matches_query_over_full_name() {
        let c = client(1, "Maria", "Fonseca", true);
        assert!(c.matches_query("maria f"));
        assert!(c.matches_query("A FON"));
        assert!(c.matches_query(""));
        assert!(!c.matches_query("joão"));
    }

    #[test]
    fn test_filter_returns_exactly_matching_rows() {
        let clients = vec![
            client(1, "Maria", "Fonseca", true),
            client(2, "João", "Maria", true),
            client(3, "Rui", "Costa", true),
        ];
        let hits: Vec<_> = clients.iter().filter(|c| c.matches_query("maria")).collect();
        assert_eq!(hits.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_sort_active_first_then_name() {
        let mut clients = vec![
            client(1, "Zé", "Alves", false),
            client(2, "Bruno", "Melo", true),
            client(3, "Ana", "Reis", true),
        ];
        clients.sort_by(by_active_then_name);
        assert_eq!(
            clients.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn test_decodes_minimal_payload() {
        let json = r#"{"id": 7, "first_name": "Rita", "last_name": "Pinto"}"#;
        let c: Client = serde_json::from_str(json).unwrap();
        assert!(c.active);
        assert!(c.client_locations.is_none());
    }
}
