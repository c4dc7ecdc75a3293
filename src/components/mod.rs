//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers; pages own
//! route-scoped orchestration.

pub mod protected_route;
pub mod stat_card;
