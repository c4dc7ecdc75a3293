//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware pages to coordinate login
//! redirects and identity-dependent rendering. The in-memory state is
//! derived from the durable session store at startup and mutated only
//! through the transition functions below, which keep the store and the
//! signal in step.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::OwnerUser;
use crate::util::session::SessionStore;

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true only during startup rehydration; the route guard
/// renders nothing (rather than redirecting) while it is set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<OwnerUser>,
    pub loading: bool,
}

impl AuthState {
    /// Startup state before the durable store has been consulted.
    pub fn restoring() -> Self {
        Self { user: None, loading: true }
    }

    /// Whether a user is present (loading state is never authenticated).
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Rehydrate session state from the durable store at startup.
pub fn restore_session(store: &dyn SessionStore) -> AuthState {
    AuthState { user: store.get_user(), loading: false }
}

/// Establish a new session: clear any prior durable data, then write the
/// new pair. The unconditional clear guards against residual entries from
/// a previous, different user.
pub fn login_session(store: &dyn SessionStore, token: &str, user: &OwnerUser) -> AuthState {
    store.clear_auth();
    store.set_auth(token, user);
    AuthState { user: Some(user.clone()), loading: false }
}

/// End the current session and clear the durable store.
pub fn logout_session(store: &dyn SessionStore) -> AuthState {
    store.clear_auth();
    AuthState { user: None, loading: false }
}
