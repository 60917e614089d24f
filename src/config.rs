//! Build-time configuration for the browser client.
//!
//! A WASM bundle has no process environment, so overrides are captured with
//! `option_env!` when the crate is compiled:
//! - `COURSE_PORTAL_API_URL`: backend base URL (default `http://localhost:8080`)
//! - `COURSE_PORTAL_LOG`: console log level (default `info`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const REGISTER_PATH: &str = "/register";
pub const SESSION_PATH: &str = "/user-session";

/// Backend endpoint configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub register_path: String,
    pub session_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Config baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("COURSE_PORTAL_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self {
            base_url: base_url.to_owned(),
            register_path: REGISTER_PATH.to_owned(),
            session_path: SESSION_PATH.to_owned(),
        }
    }

    pub fn register_url(&self) -> String {
        format!("{}{}", self.base_url, self.register_path)
    }

    pub fn session_url(&self) -> String {
        format!("{}{}", self.base_url, self.session_path)
    }
}

/// Console log level baked in at compile time.
pub fn build_log_level() -> log::Level {
    log_level(option_env!("COURSE_PORTAL_LOG"))
}

/// Parse a level name; unknown or missing values fall back to `Info`.
pub fn log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| v.trim().parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info)
}
