//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, requests,
//! navigation) and delegates shared rendering details to `components`.

pub mod dashboard;
pub mod login;
pub mod signup;
