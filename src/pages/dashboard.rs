//! Owner dashboard: welcome card, placeholder metrics, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route, reached only through the
//! `RequireRole` guard. Metrics are zeroed placeholders until property and
//! booking management ship; logout clears the durable session and the
//! guard's redirect effect returns the browser to `/login`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::state::auth::{AuthState, logout_session};
use crate::util::session::BrowserSession;

/// The placeholder metric grid: `(title, value, caption)` per card.
fn zeroed_metrics() -> [(&'static str, &'static str, &'static str); 4] {
    [
        ("Properties", "0", "Total Properties"),
        ("Courts", "0", "Total Courts"),
        ("Bookings", "0", "Total Bookings"),
        ("Revenue", "₹0", "Total Revenue"),
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_ev: leptos::ev::MouseEvent| {
        auth.set(logout_session(&BrowserSession));
    };

    let name = move || auth.get().user.map(|u| u.name).unwrap_or_default();
    let email = move || auth.get().user.map(|u| u.email).unwrap_or_default();
    let role = move || auth.get().user.map(|u| u.role).unwrap_or_default();

    view! {
        <div class="dashboard-container">
            <header class="dashboard-header">
                <h1>"Owner Dashboard"</h1>
                <button class="btn-logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>

            <div class="dashboard-content">
                <div class="welcome-card">
                    <h2>{move || format!("Welcome, {}!", name())}</h2>
                    <p>{move || format!("Email: {}", email())}</p>
                    <p>{move || format!("Role: {}", role())}</p>
                </div>

                <div class="dashboard-grid">
                    {zeroed_metrics()
                        .into_iter()
                        .map(|(title, value, label)| {
                            view! { <StatCard title=title value=value.to_owned() label=label/> }
                        })
                        .collect_view()}
                </div>

                <div class="info-section">
                    <h3>"Getting Started"</h3>
                    <ul>
                        <li>"Add your first property"</li>
                        <li>"Create courts for your property"</li>
                        <li>"Set pricing and availability"</li>
                        <li>"Start receiving bookings"</li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
