//! Wire DTOs for the portal backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON; Rust-side names stay
//! snake_case through `serde(rename_all)`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Successful `POST /register` response. Only `jwt` is read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RegistrationResponse {
    #[serde(default)]
    pub jwt: Option<String>,
}

impl RegistrationResponse {
    /// Issued token, ignoring an empty string.
    pub fn token(&self) -> Option<&str> {
        self.jwt.as_deref().filter(|jwt| !jwt.is_empty())
    }
}

/// Backend verdict on a stored session token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Rejected,
}

impl SessionStatus {
    /// Map a `GET /user-session` status code. Codes other than 2xx, 401 and
    /// 403 carry no verdict.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => Some(SessionStatus::Active),
            401 | 403 => Some(SessionStatus::Rejected),
            _ => None,
        }
    }
}
