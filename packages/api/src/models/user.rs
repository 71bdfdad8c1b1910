use serde::{Deserialize, Serialize};

/// An account that can sign in: a trainer, a client, or an admin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    /// For client accounts, the client record the account belongs to.
    #[serde(default)]
    pub client_id: Option<i64>,
}

/// Response of `POST /login`: the opaque token plus the account it belongs
/// to. The client caches `token`, `user.id` and `user.role` and nothing else.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_decodes() {
        let json = r#"{
            "token": "opaque-token",
            "user": {"id": 4, "name": "Sofia", "email": "sofia@fit.pt", "role": "trainer"}
        }"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token, "opaque-token");
        assert_eq!(resp.user.role, "trainer");
        assert!(resp.user.client_id.is_none());
    }
}
