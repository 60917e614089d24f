//! REST API helpers for communicating with the portal backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: every call returns `ApiError::Unavailable`, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `ApiError`s instead of panics so a dead backend degrades
//! to a message on the page rather than a crashed app.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{RegistrationRequest, RegistrationResponse, SessionStatus};
use crate::config::ApiConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("backend not reachable from this host")]
    Unavailable,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Backend calls used by the auth flows. Implemented over HTTP in the
/// browser and by recording fakes in tests.
pub trait AuthApi {
    /// `POST /register`.
    fn register(&self, request: &RegistrationRequest) -> impl Future<Output = Result<RegistrationResponse, ApiError>>;

    /// `GET /user-session`, presenting `token` as a bearer credential.
    fn check_session(&self, token: &str) -> impl Future<Output = Result<SessionStatus, ApiError>>;
}

/// `gloo-net` implementation of [`AuthApi`].
#[derive(Clone, Debug, Default)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[cfg(test)]
    pub(crate) fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

impl AuthApi for HttpAuthApi {
    async fn register(&self, request: &RegistrationRequest) -> Result<RegistrationResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.register_url();
            log::debug!("POST {url}");
            let resp = gloo_net::http::Request::post(&url)
                .json(request)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<RegistrationResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn check_session(&self, token: &str) -> Result<SessionStatus, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.session_url();
            log::debug!("GET {url}");
            let resp = gloo_net::http::Request::get(&url)
                .header("Authorization", &bearer_header(token))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            SessionStatus::from_status(resp.status()).ok_or(ApiError::Status(resp.status()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }
}
