//! localStorage-backed SessionStore for the web platform.
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). A blocked or unavailable localStorage degrades
//! to "not logged in" rather than crashing; the API remains the source of
//! truth for identity.

use crate::SessionStore;

/// Browser localStorage store. Zero-size; the handle is fetched per call
/// because `web_sys::Storage` is not `Send` and the window owns it anyway.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
