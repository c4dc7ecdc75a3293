//! Shared wire-protocol DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! Every auth endpoint answers with the same `AuthResponse` envelope; only
//! password login populates `token`/`user`. Keeping one envelope type lets
//! response interpretation stay schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The only account role this portal serves.
pub const ROLE_OWNER: &str = "owner";

/// An authenticated owner account as returned by password login and as
/// persisted in the durable session store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerUser {
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Account role (`"owner"` for this flow).
    pub role: String,
}

/// Uniform response envelope for all `/api/auth/*` endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Whether the operation succeeded; `false` is the server's primary
    /// failure-signaling channel.
    pub success: bool,
    /// Optional human-readable outcome message.
    #[serde(default)]
    pub message: Option<String>,
    /// Credential token, present on successful password login only.
    #[serde(default)]
    pub token: Option<String>,
    /// Account profile, present on successful password login only.
    #[serde(default)]
    pub user: Option<OwnerUser>,
}

impl AuthResponse {
    /// The server message, or `fallback` when none was supplied.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_owned())
    }

    /// Extract the `(token, user)` session pair from a login response.
    /// Returns `None` unless the response succeeded with both present.
    pub fn session(&self) -> Option<(String, OwnerUser)> {
        if !self.success {
            return None;
        }
        match (&self.token, &self.user) {
            (Some(token), Some(user)) => Some((token.clone(), user.clone())),
            _ => None,
        }
    }
}
