//! Durable home of the authentication token.
//!
//! Only the token is persisted. The profile is always re-fetched on
//! bootstrap, so a stale role can never outlive a server-side change.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Persists a single token string across restarts.
///
/// Implementations swallow their own IO failures (logging them): a token
/// that cannot be saved simply means the next start is signed out.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Process-local store, used by tests and short-lived tools.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore(Arc<Mutex<Option<String>>>);

impl MemoryTokenStore {
    /// A store that already holds `token`.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self(Arc::new(Mutex::new(Some(token.to_owned()))))
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, token: &str) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).take();
    }
}

impl<S: TokenStore + ?Sized> TokenStore for &S {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, token: &str) {
        (**self).save(token);
    }

    fn clear(&self) {
        (**self).clear();
    }
}
