//! REST API helpers for the owner-portal auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Natively the
//! operations stub out with an error since they are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every request attaches `Authorization: Bearer <token>` when the durable
//! store holds a token. A 401 on any endpoint invalidates the session
//! globally: the store is cleared, the browser is forced to `/login`, and
//! the error still re-raises to the caller. All other failures pass through
//! for view-level inline handling.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use serde_json::json;

use super::types::{AuthResponse, ROLE_OWNER};
#[cfg(any(test, feature = "hydrate"))]
use crate::util::session::SessionStore;

const DEFAULT_API_URL: &str = "http://localhost:8001";

/// API base address, resolved once at compile time from `COURTSIDE_API_URL`
/// with a local-development fallback.
pub fn api_base_url() -> &'static str {
    option_env!("COURTSIDE_API_URL").unwrap_or(DEFAULT_API_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base_url())
}

/// A failed auth request, after response interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the credential token (HTTP 401). The session has
    /// already been invalidated by the time callers see this.
    Unauthorized,
    /// Any other non-2xx response, with the server message when available.
    Http { status: u16, message: String },
    /// The request never produced a usable response (network failure,
    /// undecodable body, or a native build without a browser).
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "session expired"),
            Self::Http { message, .. } => write!(f, "{message}"),
            Self::Transport(message) => write!(f, "{message}"),
        }
    }
}

fn signup_payload(email: &str, password: &str, name: &str) -> serde_json::Value {
    json!({ "email": email, "password": password, "name": name, "role": ROLE_OWNER })
}

fn verify_code_payload(email: &str, code: &str) -> serde_json::Value {
    json!({ "email": email, "code": code })
}

fn login_password_payload(email: &str, password: &str) -> serde_json::Value {
    json!({ "email": email, "password": password })
}

fn request_code_payload(email: &str) -> serde_json::Value {
    json!({ "email": email })
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Turn a raw `(status, body)` response into the caller-facing result,
/// applying the global 401 invalidation against `store`.
#[cfg(any(test, feature = "hydrate"))]
fn interpret_response(status: u16, body: &str, store: &dyn SessionStore) -> Result<AuthResponse, ApiError> {
    if status == 401 {
        store.clear_auth();
        return Err(ApiError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<AuthResponse>(body)
            .map(|resp| resp.message_or(&request_failed_message(status)))
            .unwrap_or_else(|_| request_failed_message(status));
        return Err(ApiError::Http { status, message });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Transport(e.to_string()))
}

/// Force the browser to the login view after a session invalidation.
#[cfg(feature = "hydrate")]
fn force_login_redirect() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

async fn post_auth(path: &str, payload: serde_json::Value) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::session::BrowserSession;

        let url = endpoint(path);
        let mut builder = gloo_net::http::Request::post(&url);
        if let Some(token) = BrowserSession.get_token() {
            builder = builder.header("Authorization", &bearer_value(&token));
        }
        let resp = builder
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        let result = interpret_response(status, &body, &BrowserSession);
        if let Err(err) = &result {
            leptos::logging::warn!("auth request failed: path={path} error={err}");
            if *err == ApiError::Unauthorized {
                force_login_redirect();
            }
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, payload);
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}

/// Create an owner account via `POST /api/auth/signup`. The role is fixed
/// to `"owner"` server-side payload-wise; the caller never chooses it.
///
/// # Errors
///
/// Transport and HTTP failures re-raise; business failures arrive as
/// `success: false` in the envelope.
pub async fn signup(email: &str, password: &str, name: &str) -> Result<AuthResponse, ApiError> {
    post_auth("/api/auth/signup", signup_payload(email, password, name)).await
}

/// Verify an emailed one-time code via `POST /api/auth/verify-code`.
///
/// # Errors
///
/// See [`signup`].
pub async fn verify_code(email: &str, code: &str) -> Result<AuthResponse, ApiError> {
    post_auth("/api/auth/verify-code", verify_code_payload(email, code)).await
}

/// Password login via `POST /api/auth/login/password`. On success the
/// envelope carries the credential token and owner profile.
///
/// # Errors
///
/// See [`signup`].
pub async fn login_password(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    post_auth("/api/auth/login/password", login_password_payload(email, password)).await
}

/// Re-trigger one-time-code delivery via `POST /api/auth/request-code`.
///
/// # Errors
///
/// See [`signup`].
pub async fn request_code(email: &str) -> Result<AuthResponse, ApiError> {
    post_auth("/api/auth/request-code", request_code_payload(email)).await
}
