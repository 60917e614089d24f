//! Route guard and session lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RequireAuth` asks `AuthGuard` before rendering a guarded page, then runs
//! `verify_session` once the page is shown. The decision itself only reads
//! the token store; the backend check can revoke a session afterwards but
//! never gates the first render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::SessionStatus;
use crate::routes::AppRoute;
use crate::util::storage::TokenStore;

/// Result of evaluating the guard for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Admit,
    Deny { redirect: AppRoute },
}

#[cfg(test)]
impl GuardDecision {
    pub(crate) fn is_admitted(self) -> bool {
        matches!(self, GuardDecision::Admit)
    }
}

/// Token-presence guard for routes marked `requires_auth`.
#[derive(Clone, Debug)]
pub struct AuthGuard<S> {
    store: S,
}

impl<S: TokenStore> AuthGuard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Admit unguarded routes unconditionally; admit guarded routes only
    /// while a non-empty token is stored.
    pub fn can_activate(&self, route: AppRoute) -> GuardDecision {
        if !route.requires_auth() || self.store.has_token() {
            return GuardDecision::Admit;
        }
        log::info!("guard denied /{}: no session token", route.path());
        GuardDecision::Deny { redirect: AppRoute::Login }
    }
}

/// Ask the backend whether the stored token is still accepted.
///
/// A rejected token is cleared from the store. Transport failures leave the
/// store untouched and are returned for the caller to log.
///
/// # Errors
///
/// Returns the `ApiError` from the session check; `Status(401)` is never
/// returned, since rejection maps to `Ok(SessionStatus::Rejected)`.
pub async fn verify_session<A, S>(api: &A, store: &S) -> Result<SessionStatus, ApiError>
where
    A: AuthApi,
    S: TokenStore,
{
    let Some(token) = store.token() else {
        return Ok(SessionStatus::Rejected);
    };
    let status = api.check_session(&token).await?;
    if status == SessionStatus::Rejected {
        log::info!("backend rejected stored session; clearing token");
        store.clear_token();
    }
    Ok(status)
}

/// Drop the stored session and return the route to show next.
pub fn logout<S: TokenStore>(store: &S) -> AppRoute {
    store.clear_token();
    log::info!("signed out");
    AppRoute::Login
}
