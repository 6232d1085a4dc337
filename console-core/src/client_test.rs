use std::time::Duration;

use serde_json::json;

use super::*;
use crate::model::{PunishmentKind, ReportKind, UserStatus};
use crate::storage::MemoryTokenStore;
use crate::test_support::{CannedTransport, andrei_json, login_ok, ok};
use crate::transport::TransportError;

fn client(transport: CannedTransport) -> ApiClient<CannedTransport, MemoryTokenStore> {
    ApiClient::new(transport, MemoryTokenStore::with_token("t1"))
}

#[tokio::test]
async fn login_success_returns_grant_without_sending_bearer() {
    let transport = CannedTransport::default().respond(Method::Post, "/auth/login", 200, login_ok("t9", andrei_json()));
    let api = client(transport.clone());

    let grant = api.login(&Credentials::new("andrei", "AndreI2024!")).await.unwrap();
    assert_eq!(grant.token, "t9");
    assert_eq!(grant.user.role, Role::Andrei);

    let sent = &transport.requests()[0];
    assert_eq!(sent.bearer, None);
    assert_eq!(sent.body, Some(json!({"username": "andrei", "password": "AndreI2024!"})));
}

#[tokio::test]
async fn login_envelope_rejection_is_authentication_failure() {
    let transport = CannedTransport::default().respond(
        Method::Post,
        "/auth/login",
        200,
        json!({"success": false, "message": "LOGIN FAILED"}),
    );
    let err = client(transport).login(&Credentials::new("andrei", "wrong")).await.unwrap_err();
    assert_eq!(err, ApiError::AuthenticationFailed("LOGIN FAILED".to_owned()));
}

#[tokio::test]
async fn login_401_keeps_backend_message() {
    let transport = CannedTransport::default().respond(
        Method::Post,
        "/auth/login",
        401,
        json!({"success": false, "message": "Authentication failed", "error": "invalid credentials"}),
    );
    let err = client(transport).login(&Credentials::new("andrei", "wrong")).await.unwrap_err();
    assert_eq!(err.to_string(), "Authentication failed");
    assert!(err.is_auth_rejection());
}

#[tokio::test]
async fn login_bad_request_is_authentication_failure() {
    let transport = CannedTransport::default().respond(
        Method::Post,
        "/auth/login",
        400,
        json!({"success": false, "message": "Username and password required"}),
    );
    let err = client(transport).login(&Credentials::new("andrei", "x")).await.unwrap_err();
    assert_eq!(err, ApiError::AuthenticationFailed("Username and password required".to_owned()));
}

#[tokio::test]
async fn login_missing_route_stays_request_failure() {
    let err = client(CannedTransport::default()).login(&Credentials::new("andrei", "x")).await.unwrap_err();
    assert_eq!(err, ApiError::RequestFailed { status: Some(404), message: "not found".to_owned() });
    assert!(!err.is_auth_rejection());
}

#[tokio::test]
async fn login_validation_sends_nothing() {
    let transport = CannedTransport::default();
    let err = client(transport.clone()).login(&Credentials::new("", "")).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn login_server_error_stays_request_failure() {
    let transport = CannedTransport::default().respond_raw(Method::Post, "/auth/login", 500, "upstream exploded");
    let err = client(transport).login(&Credentials::new("andrei", "x")).await.unwrap_err();
    assert_eq!(err, ApiError::RequestFailed { status: Some(500), message: "login failed".to_owned() });
}

#[tokio::test]
async fn bearer_token_is_attached_to_other_calls() {
    let transport = CannedTransport::default().respond(Method::Get, "/auth/me", 200, ok(andrei_json()));
    let profile = client(transport.clone()).profile().await.unwrap();
    assert_eq!(profile.name, "andrei");
    assert_eq!(transport.requests()[0].bearer.as_deref(), Some("t1"));
}

#[tokio::test]
async fn no_token_means_no_bearer() {
    let transport = CannedTransport::default().respond(Method::Get, "/auth/me", 401, json!({"success": false}));
    let api = ApiClient::new(transport.clone(), MemoryTokenStore::default());
    let err = api.profile().await.unwrap_err();
    assert_eq!(err, ApiError::AuthenticationFailed("authentication required".to_owned()));
    assert_eq!(transport.requests()[0].bearer, None);
}

#[tokio::test]
async fn forbidden_user_list_is_an_error_but_capture_targets_degrade() {
    let denied = json!({"success": false, "message": "Access denied", "error": "only Andrei can list users"});
    let transport = CannedTransport::default().respond(Method::Get, "/users?role=network_admin", 403, denied);
    let api = client(transport);

    let err = api.users(Some(Role::NetworkAdmin)).await.unwrap_err();
    assert_eq!(err, ApiError::Forbidden("Access denied".to_owned()));
    assert_eq!(api.capture_targets().await, Ok(Vec::new()));
}

#[tokio::test]
async fn capture_targets_propagate_other_failures() {
    let transport = CannedTransport::default().respond(Method::Get, "/users?role=network_admin", 500, json!({}));
    let err = client(transport).capture_targets().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "failed to load users");
}

#[tokio::test]
async fn paginated_user_list_is_unwrapped() {
    let body = json!({
        "success": true, "message": "", "page": 1, "limit": 10, "total_items": 2, "total_pages": 1,
        "data": [
            andrei_json(),
            {"id": 2, "username": "daemon_alpha", "email": "a@chaos.dev", "role": "daemon", "status": "captured"}
        ]
    });
    let transport = CannedTransport::default().respond(Method::Get, "/users", 200, body);
    let users = client(transport).users(None).await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].status, UserStatus::Captured);
}

#[tokio::test]
async fn unknown_role_in_payload_is_malformed() {
    let body = ok(json!({"id": 9, "username": "x", "email": "x@y", "role": "overlord"}));
    let transport = CannedTransport::default().respond(Method::Get, "/auth/me", 200, body);
    let err = client(transport).profile().await.unwrap_err();
    assert_eq!(err.status(), Some(200));
    assert!(err.to_string().starts_with("failed to load profile: malformed response"));
}

#[tokio::test]
async fn success_without_data_fails_with_message() {
    let transport = CannedTransport::default().respond(Method::Get, "/reports", 200, json!({"success": true, "message": "nothing"}));
    let err = client(transport).reports().await.unwrap_err();
    assert_eq!(err, ApiError::RequestFailed { status: Some(200), message: "nothing".to_owned() });
}

#[tokio::test]
async fn transport_failure_has_no_status() {
    let transport =
        CannedTransport::default().fail(Method::Get, "/reports", TransportError::Timeout(Duration::from_secs(15)));
    let err = client(transport).reports().await.unwrap_err();
    assert_eq!(err.status(), None);
    assert_eq!(err.to_string(), "request timed out after 15s");
}

#[tokio::test]
async fn updates_accept_envelopes_without_data() {
    let transport = CannedTransport::default()
        .respond(Method::Put, "/users/2", 200, json!({"success": true, "message": "User updated successfully"}))
        .respond(Method::Put, "/reports/3/status", 200, json!({"success": true, "message": "updated"}))
        .respond(Method::Put, "/punishments/4", 200, json!({"success": false, "message": "Punishment not found"}));
    let api = client(transport.clone());

    let update = UserUpdate { status: Some(UserStatus::Punished), ..UserUpdate::default() };
    assert_eq!(api.update_user(2, &update).await, Ok(()));
    assert_eq!(api.update_report_status(3, ReportStatus::Approved).await, Ok(()));
    assert_eq!(transport.requests()[1].body, Some(json!({"status": "approved"})));

    let err = api.update_punishment(4, &PunishmentUpdate::completed()).await.unwrap_err();
    assert_eq!(err.to_string(), "Punishment not found");
}

#[tokio::test]
async fn write_validation_happens_before_the_network() {
    let transport = CannedTransport::default();
    let api = client(transport.clone());
    assert!(api.create_report(&NewReport::new("", "", ReportKind::Capture)).await.is_err());
    assert!(api.update_user(1, &UserUpdate::default()).await.is_err());
    assert!(api.update_report_status(1, ReportStatus::Unknown).await.is_err());
    let bad = NewPunishment { target_id: 0, kind: PunishmentKind::Timeout, description: "x".to_owned(), expires_at: None };
    assert!(api.create_punishment(&bad).await.is_err());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn capture_reads_points_beside_success() {
    let body = json!({"success": true, "message": "Network admin captured successfully", "points_given": 10});
    let transport = CannedTransport::default().respond(Method::Post, "/users/7/capture", 200, body);
    let receipt = client(transport).capture(7).await.unwrap();
    assert_eq!(receipt, CaptureReceipt { message: "Network admin captured successfully".to_owned(), points_awarded: 10 });
}

#[tokio::test]
async fn capture_rejection_carries_message() {
    let body = json!({"success": false, "message": "Target already captured"});
    let transport = CannedTransport::default().respond(Method::Post, "/users/7/capture", 400, body);
    let err = client(transport).capture(7).await.unwrap_err();
    assert_eq!(err, ApiError::RequestFailed { status: Some(400), message: "Target already captured".to_owned() });
}

#[tokio::test]
async fn create_report_posts_type_and_returns_report() {
    let created = ok(json!({
        "id": 11, "title": "Rogue cron", "description": "d", "type": "capture", "status": "pending",
        "author": {"id": 2, "username": "daemon_alpha"}
    }));
    let transport = CannedTransport::default().respond(Method::Post, "/reports", 201, created);
    let api = client(transport.clone());
    let report = api.create_report(&NewReport::for_author(Role::Daemon, "Rogue cron", "d")).await.unwrap();
    assert_eq!(report.id, 11);
    assert_eq!(transport.requests()[0].body.as_ref().unwrap()["type"], "capture");
}

#[tokio::test]
async fn leaderboard_fills_positions_and_is_stable_across_fetches() {
    let body = ok(json!([
        {"username": "daemon_alpha", "points": 500, "captures_count": 5, "reports_count": 1},
        {"username": "daemon_beta", "points": 300, "captures": 3, "reports": 0}
    ]));
    let transport = CannedTransport::default().respond(Method::Get, "/statistics/leaderboard", 200, body);
    let api = client(transport);
    let first = api.leaderboard().await.unwrap();
    let second = api.leaderboard().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.iter().map(|e| e.position).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(first[0].captures, 5);
}

#[tokio::test]
async fn punishment_by_id() {
    let body = ok(json!({
        "id": 4, "target": {"id": 2, "username": "daemon_alpha"}, "assigner": {"id": 1, "username": "andrei"},
        "type": "demotion", "status": "active"
    }));
    let transport = CannedTransport::default().respond(Method::Get, "/punishments/4", 200, body);
    let punishment = client(transport).punishment(4).await.unwrap();
    assert_eq!(punishment.kind, PunishmentKind::Demotion);
}
