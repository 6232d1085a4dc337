//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into the proxy handler via the `State` extractor.
//! The console keeps no data of its own; the state is only the upstream
//! HTTP client and where the backend lives.

use reqwest::Client;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: Client,
    /// Backend origin; request paths (including `/api`) are appended as-is.
    pub backend_url: String,
}

impl AppState {
    /// # Errors
    ///
    /// Returns the `reqwest` builder error if the TLS backend cannot start.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.proxy_timeout).build()?;
        Ok(Self { http, backend_url: config.backend_url.clone() })
    }
}
