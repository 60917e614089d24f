//! Login and registration form flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginPage` binds its inputs to a `LoginForm` and delegates each button to
//! one of `student`, `teacher`, or `register`. Each returns the route to
//! navigate to (or an error to show) and never touches the router itself.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::RegistrationRequest;
use crate::routes::AppRoute;
use crate::util::storage::TokenStore;

/// Shared access code for the student and teacher entry buttons.
pub const ADMIN_CODE: &str = "admin";
pub const PLACEHOLDER_FIRST_NAME: &str = "Test_F";
pub const PLACEHOLDER_LAST_NAME: &str = "Test_L";

/// Transient form contents. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub course_id: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Registration succeeded but no session token was returned.")]
    MissingToken,
    #[error("Registration failed: {0}")]
    Api(#[from] ApiError),
}

/// Reason a registration submit was not started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("A registration is already in progress.")]
    InFlight,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Gate a registration submit: at most one request in flight, and none at
/// all while the passwords differ.
///
/// # Errors
///
/// `InFlight` when `busy` is set, otherwise `PasswordMismatch` when the
/// confirmation differs.
pub fn begin_submit(busy: bool, form: &LoginForm) -> Result<(), SubmitBlocked> {
    if busy {
        return Err(SubmitBlocked::InFlight);
    }
    if form.password != form.confirm_password {
        return Err(SubmitBlocked::PasswordMismatch);
    }
    Ok(())
}

/// Student entry: requires the course ID to be exactly the admin code.
pub fn student(form: &LoginForm) -> Option<AppRoute> {
    (form.course_id == ADMIN_CODE).then_some(AppRoute::StudentView)
}

/// Teacher entry: requires the username to be exactly the admin code.
pub fn teacher(form: &LoginForm) -> Option<AppRoute> {
    (form.username == ADMIN_CODE).then_some(AppRoute::TeacherView)
}

/// Build the registration body. Blank name fields fall back to placeholders
/// and a blank email falls back to the username.
pub fn registration_request(form: &LoginForm) -> RegistrationRequest {
    RegistrationRequest {
        first_name: or_default(&form.first_name, PLACEHOLDER_FIRST_NAME),
        last_name: or_default(&form.last_name, PLACEHOLDER_LAST_NAME),
        email: or_default(&form.email, &form.username),
        password: form.password.clone(),
    }
}

fn or_default(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() { fallback.to_owned() } else { trimmed.to_owned() }
}

/// Register a new account and persist the issued session token.
///
/// No request is sent when the passwords differ.
///
/// # Errors
///
/// `PasswordMismatch` before any request, `Api` when the call fails, and
/// `MissingToken` when the backend answers without a `jwt`.
pub async fn register<A, S>(form: &LoginForm, api: &A, store: &S) -> Result<AppRoute, RegisterError>
where
    A: AuthApi,
    S: TokenStore,
{
    if form.password != form.confirm_password {
        return Err(RegisterError::PasswordMismatch);
    }
    let request = registration_request(form);
    log::info!("registering {}", request.email);
    let response = api.register(&request).await?;
    let token = response.token().ok_or(RegisterError::MissingToken)?;
    store.set_token(token);
    Ok(AppRoute::Profile)
}
