//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates decisions to
//! `state`.

pub mod login;
pub mod portal;
pub mod profile;
