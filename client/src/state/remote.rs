//! Fetch state owned by one mounted view.
//!
//! DESIGN
//! ======
//! Each view fetches on mount through [`Remote::load`]. The spawned task
//! holds an alive flag that `on_cleanup` clears, so a response arriving after
//! the view unmounted is dropped instead of written into disposed signals.
//! An authentication rejection is reported to the auth context, which signs
//! the session out; the guard then redirects to the login screen.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use console_core::ApiError;
use leptos::prelude::*;

use crate::state::auth::{WebAuth, use_auth};

/// Handle for spawning requests whose results only land while mounted.
#[derive(Clone, Copy)]
pub struct Mounted {
    alive: StoredValue<Arc<AtomicBool>>,
    auth: StoredValue<WebAuth>,
}

impl Mounted {
    /// Must be called inside a component so the cleanup hook attaches to it.
    pub fn new() -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        let flag = alive.clone();
        on_cleanup(move || flag.store(false, Ordering::Relaxed));
        Self { alive: StoredValue::new(alive), auth: StoredValue::new(use_auth().0) }
    }

    pub fn auth(&self) -> WebAuth {
        self.auth.get_value()
    }

    /// Run `call` against the auth context and hand the result to `done`,
    /// unless the view is gone by then.
    pub fn spawn<T, F, Fut, D>(&self, call: F, done: D)
    where
        T: 'static,
        F: FnOnce(WebAuth) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
        D: FnOnce(Result<T, ApiError>) + 'static,
    {
        let alive = self.alive.get_value();
        let auth = self.auth();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = call(auth.clone()).await;
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            if let Err(err) = &result {
                auth.observe(err);
            }
            done(result);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (alive, auth, call, done);
        }
    }
}

impl Default for Mounted {
    fn default() -> Self {
        Self::new()
    }
}

/// Data, error, and loading signals for one fetched resource.
pub struct Remote<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<T>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    mounted: Mounted,
}

impl<T: Send + Sync + 'static> Clone for Remote<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Remote<T> {}

impl<T: Send + Sync + 'static> Remote<T> {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            mounted: Mounted::new(),
        }
    }

    pub fn mounted(&self) -> Mounted {
        self.mounted
    }

    /// Start a fetch; earlier data stays visible until the new result lands.
    pub fn load<F, Fut>(self, fetch: F)
    where
        F: FnOnce(WebAuth) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        self.loading.set(true);
        self.error.set(None);
        self.mounted.spawn(fetch, move |result| {
            match result {
                Ok(value) => self.data.set(Some(value)),
                Err(err) => self.error.set(Some(err.to_string())),
            }
            self.loading.set(false);
        });
    }
}

impl<T: Send + Sync + 'static> Default for Remote<T> {
    fn default() -> Self {
        Self::new()
    }
}
