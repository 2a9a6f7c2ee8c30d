//! Networking modules for the calculation endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the POST and interprets the reply, `types` defines the
//! request/response wire schema shared with the backend.

pub mod api;
pub mod types;
