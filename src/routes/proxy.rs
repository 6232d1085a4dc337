//! Same-origin relay for `/api/*`.
//!
//! The browser bundle targets `/api` on whatever host served the page. This
//! handler forwards method, path, query, body, and the `Authorization` and
//! `Content-Type` headers to the backend and hands the upstream status and
//! body back untouched, so the client's envelope handling sees exactly what
//! the backend said. Only a failure to reach the backend is answered here,
//! as a 502 carrying a `{success: false, message}` envelope.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use console_core::envelope::Envelope;
use tracing::{debug, warn};

use crate::state::AppState;

pub const UPSTREAM_UNAVAILABLE: &str = "Backend unavailable";

/// Upstream URL for an incoming request URI.
pub(crate) fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{backend_url}{path}")
}

pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&state.backend_url, &uri);
    debug!(%method, %url, "relaying api request");

    let mut request = state.http.request(method.clone(), &url);
    for name in [AUTHORIZATION, CONTENT_TYPE] {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = match request.send().await {
        Ok(response) => response,
        Err(e) => return unavailable(&method, &url, &e),
    };

    let status = upstream.status();
    let mut out_headers = HeaderMap::new();
    if let Some(content_type) = upstream.headers().get(CONTENT_TYPE) {
        out_headers.insert(CONTENT_TYPE, content_type.clone());
    }
    match upstream.bytes().await {
        Ok(bytes) => (status, out_headers, bytes).into_response(),
        Err(e) => unavailable(&method, &url, &e),
    }
}

fn unavailable(method: &Method, url: &str, error: &reqwest::Error) -> Response {
    warn!(%method, %url, error = %error, "backend request failed");
    (StatusCode::BAD_GATEWAY, Json(Envelope::<()>::failure(UPSTREAM_UNAVAILABLE))).into_response()
}
