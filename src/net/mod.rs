//! Networking modules for the portal backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;
