//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in `RwSignal`s provided via context from `app`; the models
//! here stay plain data so transitions can be tested natively.

pub mod auth;
