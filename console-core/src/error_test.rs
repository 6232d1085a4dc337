use std::time::Duration;

use super::*;

#[test]
fn display_is_the_bare_message() {
    assert_eq!(ApiError::AuthenticationFailed("LOGIN FAILED".to_owned()).to_string(), "LOGIN FAILED");
    assert_eq!(ApiError::request_failed(Some(500), "boom").to_string(), "boom");
}

#[test]
fn status_reflects_variant() {
    assert_eq!(ApiError::Validation("x".to_owned()).status(), None);
    assert_eq!(ApiError::AuthenticationFailed("x".to_owned()).status(), Some(401));
    assert_eq!(ApiError::Forbidden("x".to_owned()).status(), Some(403));
    assert_eq!(ApiError::request_failed(Some(502), "x").status(), Some(502));
}

#[test]
fn only_authentication_failures_reject_the_session() {
    assert!(ApiError::AuthenticationFailed("expired".to_owned()).is_auth_rejection());
    assert!(!ApiError::Forbidden("nope".to_owned()).is_auth_rejection());
    assert!(!ApiError::request_failed(Some(500), "x").is_auth_rejection());
}

#[test]
fn transport_errors_become_request_failures_without_status() {
    let err: ApiError = TransportError::Timeout(Duration::from_secs(3)).into();
    assert_eq!(err.status(), None);
    assert_eq!(err.kind(), "request_failed");
    assert!(err.to_string().contains("timed out"));
}
