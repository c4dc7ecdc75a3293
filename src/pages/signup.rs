//! Two-step owner signup: account form, then email-code verification.
//!
//! DESIGN
//! ======
//! The visible screen is driven by an explicit `SignupStep` value rather
//! than ad hoc flags. Signup success is the only transition into `Verify`;
//! resending a code stays in `Verify`; successful verification leaves the
//! page entirely for `/login`. Failures keep the current step and surface
//! an inline message.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Which screen of the signup flow is displayed. Not persisted; a reload
/// restarts the flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignupStep {
    #[default]
    Signup,
    Verify,
}

/// The signup screen advances to verification only on a successful request.
#[cfg(any(test, feature = "hydrate"))]
fn next_step_after_signup(success: bool) -> SignupStep {
    if success { SignupStep::Verify } else { SignupStep::Signup }
}

/// A validated signup submission.
#[derive(Clone, Debug, PartialEq, Eq)]
struct SignupForm {
    name: String,
    email: String,
    password: String,
}

/// Client-side guards applied before any request: all fields present, the
/// passwords match, and the password is at least 6 characters.
fn validate_signup_form(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<SignupForm, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("All fields are required.");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters");
    }
    Ok(SignupForm {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

fn validate_code_input(code: &str) -> Result<String, &'static str> {
    let code = code.trim();
    if code.is_empty() {
        return Err("Enter the verification code.");
    }
    Ok(code.to_owned())
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let step = RwSignal::new(SignupStep::default());
    let verified = RwSignal::new(false);

    // Verified accounts log in from the login screen.
    Effect::new(move || {
        if verified.get() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let on_signup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let form = match validate_signup_form(&name.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(form) => form,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&form.email, &form.password, &form.name).await {
                Ok(resp) if resp.success => {
                    info.set(format!("Enter the code sent to {}", form.email));
                    step.set(next_step_after_signup(true));
                }
                Ok(resp) => error.set(resp.message_or("Signup failed")),
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
            busy.set(false);
        }
    };

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let code_value = match validate_code_input(&code.get()) {
            Ok(code_value) => code_value,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        let email_value = email.get().trim().to_owned();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_code(&email_value, &code_value).await {
                Ok(resp) if resp.success => {
                    // The redirect effect above leaves for /login.
                    verified.set(true);
                }
                Ok(resp) => {
                    error.set(resp.message_or("Verification failed"));
                    busy.set(false);
                }
                Err(e) => {
                    error.set(e.to_string());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, code_value);
            busy.set(false);
        }
    };

    let on_resend = move |_ev: leptos::ev::MouseEvent| {
        if busy.get() {
            return;
        }
        error.set(String::new());
        let email_value = email.get().trim().to_owned();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_code(&email_value).await {
                Ok(resp) if resp.success => {
                    info.set("Verification code resent to your email".to_owned());
                }
                Ok(resp) => error.set(resp.message_or("Failed to resend code")),
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
            busy.set(false);
        }
    };

    let render_step = move || match step.get() {
        SignupStep::Signup => {
            let on_signup = on_signup.clone();
            view! {
                <h1>"Owner Signup"</h1>
                <p class="auth-subtitle">"Create an account to manage your properties"</p>

                <form on:submit=on_signup>
                    <div class="form-group">
                        <label for="name">"Full Name"</label>
                        <input
                            type="text"
                            id="name"
                            placeholder="Enter your full name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>

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

                    <div class="form-group">
                        <label for="confirm-password">"Confirm Password"</label>
                        <input
                            type="password"
                            id="confirm-password"
                            placeholder="Confirm your password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Sign Up" }}
                    </button>
                </form>

                <div class="auth-footer">
                    <p>"Already have an account? " <a href="/login">"Login"</a></p>
                </div>
            }
            .into_any()
        }
        SignupStep::Verify => {
            let on_verify = on_verify.clone();
            let on_resend = on_resend.clone();
            view! {
                <h1>"Verify Email"</h1>
                <p class="auth-subtitle">
                    {move || format!("Enter the code sent to {}", email.get().trim())}
                </p>

                <form on:submit=on_verify>
                    <div class="form-group">
                        <label for="code">"Verification Code"</label>
                        <input
                            type="text"
                            id="code"
                            maxlength="6"
                            placeholder="Enter 6-digit code"
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Verifying..." } else { "Verify Email" }}
                    </button>
                </form>

                <div class="auth-footer">
                    <button class="btn-link" on:click=on_resend disabled=move || busy.get()>
                        "Resend Code"
                    </button>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <Show when=move || !error.get().is_empty()>
                    <div class="error-message">{move || error.get()}</div>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <div class="info-message">{move || info.get()}</div>
                </Show>
                {render_step}
            </div>
        </div>
    }
}
