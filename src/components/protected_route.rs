//! Role-gated wrapper for protected routes.
//!
//! DESIGN
//! ======
//! Renders nothing while the session is rehydrating, redirects to `/login`
//! once auth resolves without the required role, and renders its children
//! otherwise. The decision logic lives in `util::auth` where it is tested
//! across every state/role combination.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, guard_decision, install_role_redirect};

/// Wrap a protected view, requiring an authenticated user whose role equals
/// `required_role`.
#[component]
pub fn RequireRole(required_role: &'static str, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_role_redirect(auth, required_role, navigate);

    view! {
        <Show when=move || guard_decision(&auth.get(), required_role) == GuardDecision::Allow>
            {children()}
        </Show>
    }
}
