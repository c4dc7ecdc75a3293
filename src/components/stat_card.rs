//! Metric card for the dashboard grid.

use leptos::prelude::*;

/// A single dashboard metric: heading, headline number, caption.
#[component]
pub fn StatCard(title: &'static str, value: String, label: &'static str) -> impl IntoView {
    view! {
        <div class="dashboard-card">
            <h3>{title}</h3>
            <p class="card-number">{value}</p>
            <p class="card-label">{label}</p>
        </div>
    }
}
