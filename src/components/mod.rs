//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components provide portal chrome and route wrappers shared by the pages.

pub mod require_auth;
pub mod sidebar;
