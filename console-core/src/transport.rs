//! Pluggable HTTP layer beneath [`crate::ApiClient`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build implements [`Transport`] over `gloo-net`, the CLI uses
//! [`ReqwestTransport`] (feature `native`), and tests use canned in-memory
//! transports. The client never sees a concrete HTTP library.
//!
//! TRADE-OFFS
//! ==========
//! The trait uses `async fn` without a `Send` bound: browser futures are
//! `!Send`, and both front ends drive requests from a single task.

#[cfg(all(test, feature = "native"))]
#[path = "transport_test.rs"]
mod transport_test;

use std::fmt;
use std::time::Duration;

/// HTTP verbs used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        })
    }
}

/// A request relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Path plus optional query string, starting with `/` (e.g. `/users?role=daemon`).
    pub path: String,
    /// Bearer token for the `Authorization` header, if any.
    pub bearer: Option<String>,
    /// JSON body, if any.
    pub body: Option<serde_json::Value>,
}

/// Raw status and body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure to complete an HTTP exchange at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// No response arrived within the configured request timeout.
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Connection, TLS, or body-read failure.
    #[error("network error: {0}")]
    Network(String),
}

/// Sends one request and returns the raw response.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Perform a single round trip. Non-2xx statuses are returned as `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no HTTP response could be obtained.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[cfg(feature = "native")]
pub use native::ReqwestTransport;

#[cfg(feature = "native")]
mod native {
    use std::time::Duration;

    use super::{HttpRequest, HttpResponse, Method, Transport, TransportError};
    use crate::config::ClientConfig;

    /// `reqwest`-backed transport with request and connect timeouts.
    #[derive(Clone, Debug)]
    pub struct ReqwestTransport {
        http: reqwest::Client,
        base_url: String,
        timeout: Duration,
    }

    impl ReqwestTransport {
        /// Build a transport from client configuration.
        ///
        /// # Errors
        ///
        /// Returns [`TransportError::Network`] if the HTTP client cannot be built.
        pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
            let http = reqwest::Client::builder()
                .timeout(config.request_timeout)
                .connect_timeout(config.connect_timeout)
                .build()
                .map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(Self {
                http,
                base_url: config.base_url.trim_end_matches('/').to_owned(),
                timeout: config.request_timeout,
            })
        }

        fn map_error(&self, err: reqwest::Error) -> TransportError {
            if err.is_timeout() {
                TransportError::Timeout(self.timeout)
            } else {
                TransportError::Network(err.to_string())
            }
        }
    }

    impl Transport for ReqwestTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let url = format!("{}{}", self.base_url, request.path);
            let mut builder = match request.method {
                Method::Get => self.http.get(&url),
                Method::Post => self.http.post(&url),
                Method::Put => self.http.put(&url),
            };
            if let Some(token) = &request.bearer {
                builder = builder.bearer_auth(token);
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            let response = builder.send().await.map_err(|e| self.map_error(e))?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(|e| self.map_error(e))?;
            Ok(HttpResponse { status, body })
        }
    }
}
