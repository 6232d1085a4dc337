//! Session state and the auth context that owns every mutation of it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives in a [`SessionSlot`] supplied by the owner: a
//! `SharedSession` for the CLI and tests, a Leptos signal in the browser.
//! [`AuthContext`] is the single writer; guards and views only read.
//!
//! LIFECYCLE
//! =========
//! bootstrapping (`loading`) -> `bootstrap()` -> signed out | authenticated.
//! `login` and `logout` move between the two settled states at any time, and
//! a bootstrap that finishes after one of them leaves their result alone.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{info, warn};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::model::{Credentials, UserProfile};
use crate::role::Role;
use crate::storage::TokenStore;
use crate::transport::Transport;

/// Current authentication state. Token and user are set together or not at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<UserProfile>,
    loading: bool,
}

impl Session {
    /// Startup state: nothing known yet.
    #[must_use]
    pub fn bootstrapping() -> Self {
        Self { token: None, user: None, loading: true }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { token: None, user: None, loading: false }
    }

    #[must_use]
    pub fn authenticated(token: String, user: UserProfile) -> Self {
        Self { token: Some(token), user: Some(user), loading: false }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// The cell that holds the in-memory session.
pub trait SessionSlot {
    fn get(&self) -> Session;
    fn set(&self, session: Session);
}

/// Thread-safe slot for native callers.
#[derive(Clone, Debug)]
pub struct SharedSession(Arc<Mutex<Session>>);

impl Default for SharedSession {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(Session::bootstrapping())))
    }
}

impl SessionSlot for SharedSession {
    fn get(&self) -> Session {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, session: Session) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = session;
    }
}

/// Login, logout, and bootstrap over an API client and a session slot.
///
/// Clones share the slot, the token store, and the bootstrap-once flag.
#[derive(Clone, Debug)]
pub struct AuthContext<T, S, C> {
    api: ApiClient<T, S>,
    slot: C,
    bootstrapped: Arc<AtomicBool>,
}

impl<T: Transport, S: TokenStore, C: SessionSlot> AuthContext<T, S, C> {
    pub fn new(api: ApiClient<T, S>, slot: C) -> Self {
        Self { api, slot, bootstrapped: Arc::new(AtomicBool::new(false)) }
    }

    pub fn api(&self) -> &ApiClient<T, S> {
        &self.api
    }

    pub fn session(&self) -> Session {
        self.slot.get()
    }

    /// Authenticate and, on success, persist the token and fill the session.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] from validation or the backend; the session
    /// is left exactly as it was.
    pub async fn login(&self, credentials: &Credentials) -> Result<UserProfile, ApiError> {
        let grant = match self.api.login(credentials).await {
            Ok(grant) => grant,
            Err(err) => {
                info!(username = %credentials.username, error = %err, "login rejected");
                return Err(err);
            }
        };
        self.api.tokens().save(&grant.token);
        self.slot.set(Session::authenticated(grant.token, grant.user.clone()));
        info!(username = %grant.user.username, role = %grant.user.role, "login succeeded");
        Ok(grant.user)
    }

    /// Forget the token and the profile. Does not contact the backend.
    pub fn logout(&self) {
        self.api.tokens().clear();
        self.slot.set(Session::signed_out());
        info!("logged out");
    }

    /// Restore the session from the persisted token, once.
    ///
    /// Later calls return the current session without doing anything. A
    /// token the backend rejects with 401 is discarded silently; any other
    /// failure leaves the session signed out but keeps the stored token.
    pub async fn bootstrap(&self) -> Session {
        if self.bootstrapped.swap(true, Ordering::SeqCst) {
            return self.slot.get();
        }

        let Some(token) = self.api.tokens().load() else {
            self.settle(Session::signed_out());
            info!("bootstrap: no stored token");
            return self.slot.get();
        };

        match self.api.profile().await {
            Ok(user) => {
                info!(username = %user.username, role = %user.role, "bootstrap: session restored");
                self.settle(Session::authenticated(token, user));
            }
            Err(err) if err.is_auth_rejection() => {
                warn!(error = %err, "bootstrap: stored token rejected");
                if self.slot.get().is_loading() {
                    self.api.tokens().clear();
                }
                self.settle(Session::signed_out());
            }
            Err(err) => {
                // Token stays stored; the next start retries it.
                warn!(error = %err, "bootstrap: profile unavailable");
                self.settle(Session::signed_out());
            }
        }
        self.slot.get()
    }

    /// Drop the session when the backend stops accepting its token.
    ///
    /// Returns whether the session was cleared.
    pub fn observe(&self, err: &ApiError) -> bool {
        if !err.is_auth_rejection() || !self.slot.get().is_authenticated() {
            return false;
        }
        warn!(error = %err, "session rejected by backend; signing out");
        self.logout();
        true
    }

    /// Apply a bootstrap result unless login or logout already settled the session.
    fn settle(&self, session: Session) {
        if self.slot.get().is_loading() {
            self.slot.set(session);
        }
    }
}
