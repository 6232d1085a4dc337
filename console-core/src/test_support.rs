//! Canned in-memory transport shared by the unit tests.

use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;
use tokio::sync::Notify;

use crate::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

struct Route {
    method: Method,
    path: String,
    reply: Result<HttpResponse, TransportError>,
    gate: Option<Arc<Notify>>,
}

#[derive(Default)]
struct Canned {
    routes: Vec<Route>,
    requests: Vec<HttpRequest>,
}

/// Replies from a fixed route table and records every request.
///
/// Unmatched requests get a 404 envelope.
#[derive(Clone, Default)]
pub(crate) struct CannedTransport(Arc<Mutex<Canned>>);

impl CannedTransport {
    pub(crate) fn respond(self, method: Method, path: &str, status: u16, body: Value) -> Self {
        self.route(method, path, Ok(HttpResponse { status, body: body.to_string() }), None)
    }

    pub(crate) fn respond_raw(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.route(method, path, Ok(HttpResponse { status, body: body.to_owned() }), None)
    }

    pub(crate) fn fail(self, method: Method, path: &str, err: TransportError) -> Self {
        self.route(method, path, Err(err), None)
    }

    /// Like [`Self::respond`], but the reply waits until `gate` is notified.
    pub(crate) fn respond_after(self, gate: Arc<Notify>, method: Method, path: &str, status: u16, body: Value) -> Self {
        self.route(method, path, Ok(HttpResponse { status, body: body.to_string() }), Some(gate))
    }

    fn route(self, method: Method, path: &str, reply: Result<HttpResponse, TransportError>, gate: Option<Arc<Notify>>) -> Self {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .routes
            .push(Route { method, path: path.to_owned(), reply, gate });
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).requests.clone()
    }
}

impl Transport for CannedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let (reply, gate) = {
            let mut canned = self.0.lock().unwrap_or_else(PoisonError::into_inner);
            canned.requests.push(request.clone());
            canned
                .routes
                .iter()
                .find(|r| r.method == request.method && r.path == request.path)
                .map_or_else(
                    || {
                        let body = serde_json::json!({"success": false, "message": "not found"}).to_string();
                        (Ok(HttpResponse { status: 404, body }), None)
                    },
                    |r| (r.reply.clone(), r.gate.clone()),
                )
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }
        reply
    }
}

pub(crate) fn andrei_json() -> Value {
    serde_json::json!({
        "id": 1, "username": "andrei", "email": "andrei@chaos.dev", "role": "andrei", "status": "active"
    })
}

pub(crate) fn login_ok(token: &str, user: Value) -> Value {
    serde_json::json!({"success": true, "message": "Login successful", "data": {"token": token, "user": user}})
}

pub(crate) fn ok(data: Value) -> Value {
    serde_json::json!({"success": true, "message": "ok", "data": data})
}
