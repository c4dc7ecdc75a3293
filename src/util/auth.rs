//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Role-restricted routes should apply identical redirect behavior: never
//! redirect while the session is still rehydrating, and treat a role
//! mismatch exactly like being unauthenticated.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Outcome of evaluating a protected route against the session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still rehydrating; render nothing and wait.
    Wait,
    /// Not authenticated, or authenticated with the wrong role.
    RedirectLogin,
    /// Authenticated with the required role; render the protected view.
    Allow,
}

/// Decide what a route requiring `required_role` should do for `state`.
pub fn guard_decision(state: &AuthState, required_role: &str) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    match &state.user {
        Some(user) if user.role == required_role => GuardDecision::Allow,
        _ => GuardDecision::RedirectLogin,
    }
}

/// Redirect to `/login` whenever auth has resolved and the required role is
/// not satisfied. The navigation callback is injected so the guard logic
/// stays independent of the router.
pub fn install_role_redirect<F>(auth: RwSignal<AuthState>, required_role: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if guard_decision(&auth.get(), required_role) == GuardDecision::RedirectLogin {
            navigate("/login", NavigateOptions::default());
        }
    });
}
