//! Password login page for owner accounts.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{AuthResponse, OwnerUser};
use crate::state::auth::AuthState;

/// Trim the email and require both fields before any request goes out.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Extract the session pair from a login response, or the inline message to
/// show instead.
#[cfg(any(test, feature = "hydrate"))]
fn login_outcome(resp: &AuthResponse) -> Result<(String, OwnerUser), String> {
    resp.session().ok_or_else(|| resp.message_or("Login failed"))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Leave for the dashboard whenever a session is established, including
    // an already-authenticated owner landing back on /login.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.is_authenticated() {
            navigate("/owner/dashboard", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login_password(&email_value, &password_value).await {
                Ok(resp) => match login_outcome(&resp) {
                    Ok((token, user)) => {
                        let state = crate::state::auth::login_session(
                            &crate::util::session::BrowserSession,
                            &token,
                            &user,
                        );
                        // The redirect effect above picks this up.
                        auth.set(state);
                    }
                    Err(msg) => error.set(msg),
                },
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, auth);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <h1>"Owner Login"</h1>
                <p class="auth-subtitle">"Sign in to manage your properties"</p>

                <Show when=move || !error.get().is_empty()>
                    <div class="error-message">{move || error.get()}</div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing In..." } else { "Login" }}
                    </button>
                </form>

                <div class="auth-footer">
                    <p>"Don't have an account? " <a href="/owner/signup">"Sign Up"</a></p>
                </div>
            </div>
        </div>
    }
}
