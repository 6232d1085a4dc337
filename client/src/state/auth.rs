//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`App`](crate::app::App) creates one [`WebAuth`] and provides it via
//! context. The guard component, the layout, and every page read the
//! session through it; only login, logout, bootstrap, and rejected requests
//! write to it.

use console_core::{ApiClient, AuthContext, Session, SessionSlot};
use leptos::prelude::*;

use crate::net::transport::GlooTransport;
use crate::util::token_storage::LocalStorageTokenStore;

/// Session slot backed by a Leptos signal, so views re-render on change.
#[derive(Clone, Copy, Debug)]
pub struct SignalSession(RwSignal<Session>);

impl SignalSession {
    pub fn new() -> Self {
        Self(RwSignal::new(Session::bootstrapping()))
    }

    /// Tracked read for use inside reactive closures.
    pub fn read(&self) -> Session {
        self.0.get()
    }
}

impl Default for SignalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionSlot for SignalSession {
    fn get(&self) -> Session {
        self.0.get_untracked()
    }

    fn set(&self, session: Session) {
        self.0.set(session);
    }
}

pub type WebApi = ApiClient<GlooTransport, LocalStorageTokenStore>;
pub type WebAuth = AuthContext<GlooTransport, LocalStorageTokenStore, SignalSession>;

/// Build the browser auth context over a fresh signal.
pub fn new_web_auth() -> (WebAuth, SignalSession) {
    let slot = SignalSession::new();
    let api = ApiClient::new(GlooTransport::default(), LocalStorageTokenStore);
    (AuthContext::new(api, slot), slot)
}

/// The auth context and session signal provided by the app root.
pub fn use_auth() -> (WebAuth, SignalSession) {
    (expect_context::<WebAuth>(), expect_context::<SignalSession>())
}
