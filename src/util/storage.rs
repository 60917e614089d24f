//! Persisted session token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The registration flow writes the token and the route guard reads it. Both
//! go through `TokenStore` so the browser `localStorage` glue stays here and
//! the decision logic can be exercised against `MemoryTokenStore`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(test)]
use std::cell::RefCell;

/// `localStorage` key holding the session token.
pub const TOKEN_KEY: &str = "token";

/// Key-value persistence for the session token.
pub trait TokenStore {
    /// Stored token, or `None` when absent or empty.
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear_token(&self);

    fn has_token(&self) -> bool {
        self.token().is_some()
    }
}

/// Browser `localStorage` backed store. Outside the browser every read is
/// empty and every write is dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if storage.is_none() {
        log::warn!("localStorage unavailable; session token not persisted");
    }
    storage
}

impl TokenStore for LocalTokenStore {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage()?.get_item(TOKEN_KEY).ok().flatten()?;
            non_empty(raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set_token(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.set_item(TOKEN_KEY, token).is_err() {
                log::warn!("failed to write session token");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear_token(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(TOKEN_KEY).is_err() {
                    log::warn!("failed to clear session token");
                }
            }
        }
    }
}

/// In-process store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub(crate) fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())) }
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone().and_then(non_empty)
    }

    fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear_token(&self) {
        self.token.borrow_mut().take();
    }
}

#[cfg(any(test, feature = "csr"))]
fn non_empty(raw: String) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw) }
}
