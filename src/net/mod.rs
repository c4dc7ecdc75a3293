//! Networking modules for the owner-portal REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls (bearer attach, 401 invalidation) and `types`
//! defines the shared wire schema for the auth endpoints.

pub mod api;
pub mod types;
