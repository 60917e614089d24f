//! Recording `AuthApi` double for flow tests.

use std::cell::RefCell;

use super::api::{ApiError, AuthApi};
use super::types::{RegistrationRequest, RegistrationResponse, SessionStatus};

pub(crate) struct RecordingApi {
    pub register_reply: Result<RegistrationResponse, ApiError>,
    pub session_reply: Result<SessionStatus, ApiError>,
    pub registrations: RefCell<Vec<RegistrationRequest>>,
    pub session_tokens: RefCell<Vec<String>>,
}

impl RecordingApi {
    pub fn issuing(jwt: &str) -> Self {
        Self::replying(Ok(RegistrationResponse { jwt: Some(jwt.to_owned()) }))
    }

    pub fn replying(register_reply: Result<RegistrationResponse, ApiError>) -> Self {
        Self {
            register_reply,
            session_reply: Ok(SessionStatus::Active),
            registrations: RefCell::new(Vec::new()),
            session_tokens: RefCell::new(Vec::new()),
        }
    }

    pub fn with_session(mut self, reply: Result<SessionStatus, ApiError>) -> Self {
        self.session_reply = reply;
        self
    }
}

impl AuthApi for RecordingApi {
    async fn register(&self, request: &RegistrationRequest) -> Result<RegistrationResponse, ApiError> {
        self.registrations.borrow_mut().push(request.clone());
        self.register_reply.clone()
    }

    async fn check_session(&self, token: &str) -> Result<SessionStatus, ApiError> {
        self.session_tokens.borrow_mut().push(token.to_owned());
        self.session_reply.clone()
    }
}
