use std::sync::Arc;

use serde_json::json;
use tokio::sync::Notify;

use super::*;
use crate::guard::{GuardState, evaluate};
use crate::navigation::{Access, Screen};
use crate::storage::MemoryTokenStore;
use crate::test_support::{CannedTransport, andrei_json, login_ok, ok};
use crate::transport::{Method, TransportError};

type TestAuth = AuthContext<CannedTransport, MemoryTokenStore, SharedSession>;

fn auth(transport: CannedTransport, store: MemoryTokenStore) -> TestAuth {
    AuthContext::new(ApiClient::new(transport, store), SharedSession::default())
}

#[test]
fn session_constructors_keep_token_and_user_together() {
    let boot = Session::bootstrapping();
    assert!(boot.is_loading());
    assert_eq!((boot.token(), boot.user()), (None, None));

    let user: UserProfile = serde_json::from_value(andrei_json()).unwrap();
    let session = Session::authenticated("t1".to_owned(), user);
    assert_eq!(session.token(), Some("t1"));
    assert_eq!(session.role(), Some(Role::Andrei));
    assert!(!session.is_loading());
}

#[tokio::test]
async fn failed_login_leaves_session_untouched() {
    let transport = CannedTransport::default().respond(
        Method::Post,
        "/auth/login",
        200,
        json!({"success": false, "message": "LOGIN FAILED"}),
    );
    let store = MemoryTokenStore::default();
    let ctx = auth(transport, store.clone());
    ctx.bootstrap().await;

    let err = ctx.login(&Credentials::new("andrei", "wrong")).await.unwrap_err();
    assert_eq!(err.to_string(), "LOGIN FAILED");
    let session = ctx.session();
    assert_eq!((session.token(), session.user()), (None, None));
    assert_eq!(store.load(), None);
}

#[tokio::test]
async fn successful_login_persists_token_and_authorizes_andrei() {
    let transport =
        CannedTransport::default().respond(Method::Post, "/auth/login", 200, login_ok("t1", andrei_json()));
    let store = MemoryTokenStore::default();
    let ctx = auth(transport, store.clone());
    ctx.bootstrap().await;

    let user = ctx.login(&Credentials::new("andrei", "AndreI2024!")).await.unwrap();
    assert_eq!(user.role, Role::Andrei);
    assert_eq!(store.load().as_deref(), Some("t1"));
    assert_eq!(evaluate(&ctx.session(), Access::Only(&[Role::Andrei])), GuardState::Authorized);
}

#[tokio::test]
async fn bootstrap_restores_session_from_stored_token() {
    let transport = CannedTransport::default().respond(Method::Get, "/auth/me", 200, ok(andrei_json()));
    let ctx = auth(transport.clone(), MemoryTokenStore::with_token("t1"));

    let session = ctx.bootstrap().await;
    assert!(!session.is_loading());
    assert_eq!(session.token(), Some("t1"));
    assert_eq!(transport.requests()[0].bearer.as_deref(), Some("t1"));
}

#[tokio::test]
async fn bootstrap_discards_rejected_token_silently() {
    let transport =
        CannedTransport::default().respond(Method::Get, "/auth/me", 401, json!({"success": false, "message": "expired"}));
    let store = MemoryTokenStore::with_token("stale");
    let ctx = auth(transport, store.clone());

    let session = ctx.bootstrap().await;
    assert_eq!(session, Session::signed_out());
    assert_eq!(store.load(), None);
}

#[tokio::test]
async fn bootstrap_keeps_token_when_backend_unreachable() {
    let transport = CannedTransport::default().fail(
        Method::Get,
        "/auth/me",
        TransportError::Network("connection refused".to_owned()),
    );
    let store = MemoryTokenStore::with_token("valid");
    let ctx = auth(transport, store.clone());

    let session = ctx.bootstrap().await;
    assert_eq!(session, Session::signed_out());
    assert_eq!(store.load().as_deref(), Some("valid"));
}

#[tokio::test]
async fn bootstrap_keeps_token_on_server_error() {
    let transport = CannedTransport::default().respond_raw(Method::Get, "/auth/me", 503, "maintenance");
    let store = MemoryTokenStore::with_token("valid");
    let ctx = auth(transport, store.clone());

    assert_eq!(ctx.bootstrap().await, Session::signed_out());
    assert_eq!(store.load().as_deref(), Some("valid"));
}

#[tokio::test]
async fn bootstrap_runs_once() {
    let transport = CannedTransport::default().respond(Method::Get, "/auth/me", 200, ok(andrei_json()));
    let ctx = auth(transport.clone(), MemoryTokenStore::with_token("t1"));
    ctx.bootstrap().await;
    ctx.clone().bootstrap().await;
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn bootstrap_without_token_makes_no_request() {
    let transport = CannedTransport::default();
    let ctx = auth(transport.clone(), MemoryTokenStore::default());
    assert_eq!(ctx.bootstrap().await, Session::signed_out());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn late_bootstrap_does_not_overwrite_concurrent_login() {
    let gate = Arc::new(Notify::new());
    let daemon = json!({"id": 2, "username": "daemon_alpha", "email": "a@chaos.dev", "role": "daemon"});
    let transport = CannedTransport::default()
        .respond_after(gate.clone(), Method::Get, "/auth/me", 401, json!({"success": false}))
        .respond(Method::Post, "/auth/login", 200, login_ok("fresh", daemon));
    let store = MemoryTokenStore::with_token("stale");
    let ctx = auth(transport, store.clone());

    let login = async {
        let user = ctx.login(&Credentials::new("daemon_alpha", "DaemonAlpha123!")).await;
        gate.notify_one();
        user
    };
    let (session, user) = tokio::join!(ctx.bootstrap(), login);

    assert_eq!(user.unwrap().role, Role::Daemon);
    assert_eq!(session.token(), Some("fresh"));
    assert_eq!(store.load().as_deref(), Some("fresh"));
}

#[tokio::test]
async fn logout_then_fresh_bootstrap_is_unauthenticated() {
    let transport = CannedTransport::default()
        .respond(Method::Post, "/auth/login", 200, login_ok("t1", andrei_json()))
        .respond(Method::Get, "/auth/me", 200, ok(andrei_json()));
    let store = MemoryTokenStore::default();
    let ctx = auth(transport.clone(), store.clone());
    ctx.bootstrap().await;
    ctx.login(&Credentials::new("andrei", "AndreI2024!")).await.unwrap();

    ctx.logout();
    assert_eq!(store.load(), None);
    assert_eq!(ctx.session(), Session::signed_out());

    let fresh = auth(transport, store);
    let session = fresh.bootstrap().await;
    assert_eq!(evaluate(&session, Screen::Dashboard.access()), GuardState::Unauthenticated);
}

#[tokio::test]
async fn observing_auth_rejection_signs_out() {
    let transport = CannedTransport::default().respond(Method::Get, "/auth/me", 200, ok(andrei_json()));
    let store = MemoryTokenStore::with_token("t1");
    let ctx = auth(transport, store.clone());
    ctx.bootstrap().await;

    assert!(!ctx.observe(&ApiError::Forbidden("nope".to_owned())));
    assert!(ctx.session().is_authenticated());

    assert!(ctx.observe(&ApiError::AuthenticationFailed("expired".to_owned())));
    assert!(!ctx.session().is_authenticated());
    assert_eq!(store.load(), None);
}
