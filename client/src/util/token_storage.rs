//! `localStorage` persistence for the session token.
//!
//! Hydrate-only: during server rendering there is no storage, so the store
//! reads as empty and writes are dropped.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

use console_core::TokenStore;

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "chaos_console_token";

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = storage()?.get_item(TOKEN_KEY).ok().flatten()?;
            let token = raw.trim();
            (!token.is_empty()).then(|| token.to_owned())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = storage() else {
                log::warn!("localStorage unavailable; session will not survive a reload");
                return;
            };
            if storage.set_item(TOKEN_KEY, token).is_err() {
                log::warn!("failed to persist session token");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = storage() else {
                return;
            };
            if storage.remove_item(TOKEN_KEY).is_err() {
                log::warn!("failed to remove session token");
            }
        }
    }
}
