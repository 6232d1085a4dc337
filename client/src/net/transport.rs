//! `gloo-net` implementation of the console transport.
//!
//! Client-side (hydrate): real HTTP via `fetch`, raced against a
//! `gloo-timers` sleep so a hung request surfaces as a timeout.
//! Server-side (SSR): every request fails, since API calls only make sense
//! once the page is running in the browser.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use console_core::config::DEFAULT_REQUEST_TIMEOUT_SECS;
use console_core::transport::{HttpRequest, HttpResponse, Transport, TransportError};

/// Same-origin API prefix; the host server proxies it to the backend.
pub const API_BASE: &str = "/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlooTransport {
    base_url: String,
    timeout: Duration,
}

impl Default for GlooTransport {
    fn default() -> Self {
        Self::new(API_BASE, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
    }
}

impl GlooTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), timeout }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};
            use gloo_net::http::RequestBuilder;

            let url = self.url(&request.path);
            let mut builder = RequestBuilder::new(&url).method(method(request.method));
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::Network(e.to_string()))?;

            let exchange = Box::pin(async move {
                let response = prepared.send().await.map_err(|e| TransportError::Network(e.to_string()))?;
                let status = response.status();
                let body = response.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
                Ok(HttpResponse { status, body })
            });
            let deadline = Box::pin(gloo_timers::future::sleep(self.timeout));
            match select(exchange, deadline).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(TransportError::Timeout(self.timeout)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.url(&request.path);
            Err(TransportError::Network("not available during server rendering".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
fn method(method: console_core::transport::Method) -> gloo_net::http::Method {
    use console_core::transport::Method;
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
    }
}
