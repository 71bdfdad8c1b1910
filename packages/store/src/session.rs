use crate::SessionStore;

pub const KEY_TOKEN: &str = "token";
pub const KEY_USER: &str = "user";
pub const KEY_ROLE: &str = "role";

/// Role of the logged-in user, as cached under the `role` key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Trainer,
    Client,
    Admin,
}

impl Role {
    /// Parse the stored role string. Unknown values yield `None`; callers
    /// treat the whole session as absent rather than guessing a role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "trainer" => Some(Role::Trainer),
            "client" => Some(Role::Client),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Trainer => "trainer",
            Role::Client => "client",
            Role::Admin => "admin",
        }
    }
}

/// The cached identity: token, user id and role.
///
/// A session only exists when all three values are present and the role
/// string is recognised. There is no expiry or refresh; the cache lives
/// until [`Session::clear`] removes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub role: Role,
}

impl Session {
    pub fn new(token: impl Into<String>, user_id: impl Into<String>, role: Role) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
            role,
        }
    }

    /// Read the cached identity. Any missing or unrecognised value means
    /// there is no session.
    pub fn load(store: &impl SessionStore) -> Option<Self> {
        let token = store.get(KEY_TOKEN)?;
        let user_id = store.get(KEY_USER)?;
        let role = Role::parse(&store.get(KEY_ROLE)?)?;
        if token.is_empty() || user_id.is_empty() {
            return None;
        }
        Some(Self {
            token,
            user_id,
            role,
        })
    }

    /// Persist the identity under the three well-known keys.
    pub fn save(&self, store: &impl SessionStore) {
        store.set(KEY_TOKEN, &self.token);
        store.set(KEY_USER, &self.user_id);
        store.set(KEY_ROLE, self.role.as_str());
    }

    /// Drop the cached identity (logout).
    pub fn clear(store: &impl SessionStore) {
        store.remove(KEY_TOKEN);
        store.remove(KEY_USER);
        store.remove(KEY_ROLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_load_empty_store() {
        let store = MemoryStore::new();
        assert!(Session::load(&store).is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = MemoryStore::new();
        let session = Session::new("abc123", "42", Role::Trainer);
        session.save(&store);

        let loaded = Session::load(&store).unwrap();
        assert_eq!(loaded, session);
        assert_eq!(store.get(KEY_TOKEN).as_deref(), Some("abc123"));
        assert_eq!(store.get(KEY_ROLE).as_deref(), Some("trainer"));
    }

    #[test]
    fn test_partial_cache_is_no_session() {
        let store = MemoryStore::new();
        store.set(KEY_TOKEN, "abc123");
        // user and role missing
        assert!(Session::load(&store).is_none());

        store.set(KEY_USER, "42");
        assert!(Session::load(&store).is_none());
    }

    #[test]
    fn test_unknown_role_is_no_session() {
        let store = MemoryStore::new();
        Session::new("abc123", "42", Role::Client).save(&store);
        store.set(KEY_ROLE, "superuser");
        assert!(Session::load(&store).is_none());
    }

    #[test]
    fn test_empty_token_is_no_session() {
        let store = MemoryStore::new();
        store.set(KEY_TOKEN, "");
        store.set(KEY_USER, "42");
        store.set(KEY_ROLE, "client");
        assert!(Session::load(&store).is_none());
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let store = MemoryStore::new();
        Session::new("abc123", "42", Role::Admin).save(&store);
        Session::clear(&store);

        assert!(store.get(KEY_TOKEN).is_none());
        assert!(store.get(KEY_USER).is_none());
        assert!(store.get(KEY_ROLE).is_none());
        assert!(Session::load(&store).is_none());
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("trainer"), Some(Role::Trainer));
        assert_eq!(Role::parse("client"), Some(Role::Client));
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("Trainer"), None);
        assert_eq!(Role::parse(""), None);
    }
}
