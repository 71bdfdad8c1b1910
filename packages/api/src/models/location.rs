use serde::{Deserialize, Serialize};

/// A place where training sessions happen (gym, park, client's home).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientLocation {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}
