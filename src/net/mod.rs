//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the auth HTTP calls and `types` defines the request,
//! response, and session-user schema shared with the backend.

pub mod api;
pub mod types;
