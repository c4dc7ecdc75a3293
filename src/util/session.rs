//! Durable per-browser session storage.
//!
//! DESIGN
//! ======
//! The session lives under two localStorage keys: the raw credential token
//! and the JSON-serialized owner profile. The two are always written and
//! removed together; clearing precedes writing so a token is never paired
//! with a stale profile. `SessionStore` is a trait so session transitions
//! and the HTTP layer can run against `MemorySession` in native tests.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort browser-only behavior; outside hydrate the
//! browser impl reads empty and writes nowhere, keeping native builds inert.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::net::types::OwnerUser;

/// localStorage key holding the raw credential token.
pub const TOKEN_KEY: &str = "auth_token";
/// localStorage key holding the JSON-serialized owner profile.
pub const USER_KEY: &str = "auth_user";

/// Durable key-value store for the `(token, profile)` session pair.
///
/// Pure storage: no token validation, no expiry. `get_user` treats
/// undecodable stored JSON as absent.
pub trait SessionStore {
    /// Raw value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, overwriting any prior value.
    fn set_item(&self, key: &str, value: &str);
    /// Remove whatever is stored under `key`.
    fn remove_item(&self, key: &str);

    /// The stored credential token, if any.
    fn get_token(&self) -> Option<String> {
        self.get_item(TOKEN_KEY)
    }

    /// The stored owner profile, if present and decodable.
    fn get_user(&self) -> Option<OwnerUser> {
        let raw = self.get_item(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Durably store the session pair, overwriting any prior session.
    fn set_auth(&self, token: &str, user: &OwnerUser) {
        self.set_item(TOKEN_KEY, token);
        if let Ok(raw) = serde_json::to_string(user) {
            self.set_item(USER_KEY, &raw);
        }
    }

    /// Remove both session entries.
    fn clear_auth(&self) {
        self.remove_item(TOKEN_KEY);
        self.remove_item(USER_KEY);
    }

    /// Whether a credential token is currently stored.
    fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }
}

/// `SessionStore` over browser localStorage. Reads empty and writes nowhere
/// outside the hydrate build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory `SessionStore` for native tests and non-browser callers.
#[derive(Debug, Default)]
pub struct MemorySession {
    items: RefCell<HashMap<String, String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
