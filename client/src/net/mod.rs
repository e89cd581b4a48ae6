//! Networking for the design REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements `persistence::DesignBackend` over HTTP and `types`
//! defines the JSON bodies.

pub mod api;
pub mod types;
