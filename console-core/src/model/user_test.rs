use serde_json::json;

use super::*;

#[test]
fn name_falls_back_to_username() {
    let user: UserProfile = serde_json::from_value(json!({
        "id": 1, "username": "andrei", "email": "andrei@chaos.dev", "role": "andrei", "status": "active"
    }))
    .unwrap();
    assert_eq!(user.name, "andrei");
    assert_eq!(user.role, Role::Andrei);
}

#[test]
fn explicit_name_wins_and_camel_case_created_at_is_accepted() {
    let user: UserProfile = serde_json::from_value(json!({
        "id": 2, "username": "daemon_alpha", "name": "Alpha", "email": "a@chaos.dev",
        "role": "daemon", "createdAt": "2025-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(user.name, "Alpha");
    assert_eq!(user.status, UserStatus::Active);
    assert_eq!(user.created_at.as_deref(), Some("2025-01-01T00:00:00Z"));
}

#[test]
fn unknown_role_fails_to_decode() {
    let result = serde_json::from_value::<UserProfile>(json!({
        "id": 3, "username": "x", "email": "x@y", "role": "overlord"
    }));
    assert!(result.is_err());
}

#[test]
fn unknown_status_does_not_fail_the_payload() {
    let user: UserProfile = serde_json::from_value(json!({
        "id": 4, "username": "netadmin_alice", "email": "alice@resistance.net",
        "role": "network_admin", "status": "hiding"
    }))
    .unwrap();
    assert_eq!(user.status, UserStatus::Unknown);
}

#[test]
fn canonical_profile_reads_back_unchanged() {
    let user: UserProfile = serde_json::from_value(json!({
        "id": 5, "username": "daemon_beta", "email": "b@chaos.dev", "role": "daemon", "status": "punished"
    }))
    .unwrap();
    let again: UserProfile = serde_json::from_value(serde_json::to_value(&user).unwrap()).unwrap();
    assert_eq!(again, user);
}

#[test]
fn credentials_require_both_fields() {
    assert!(Credentials::new("andrei", "AndreI2024!").validate().is_ok());
    assert_eq!(
        Credentials::new("", " ").validate(),
        Err(ApiError::Validation("username and password are required".to_owned()))
    );
    assert_eq!(
        Credentials::new("andrei", "").validate(),
        Err(ApiError::Validation("password is required".to_owned()))
    );
}

#[test]
fn credentials_debug_hides_password() {
    let rendered = format!("{:?}", Credentials::new("andrei", "AndreI2024!"));
    assert!(rendered.contains("andrei"));
    assert!(!rendered.contains("AndreI2024!"));
}

#[test]
fn new_user_checks_email_and_password_length() {
    let mut user = NewUser {
        username: "daemon_gamma".to_owned(),
        email: "gamma.chaos.dev".to_owned(),
        password: "Gamma123!".to_owned(),
        role: Role::Daemon,
    };
    assert!(user.validate().unwrap_err().to_string().contains("email"));
    user.email = "gamma@chaos.dev".to_owned();
    user.password = "abc".to_owned();
    assert!(user.validate().unwrap_err().to_string().contains("at least 6"));
    user.password = "Gamma123!".to_owned();
    assert!(user.validate().is_ok());
}

#[test]
fn user_update_serializes_only_present_fields() {
    let update = UserUpdate { status: Some(UserStatus::Captured), ..UserUpdate::default() };
    assert!(update.validate().is_ok());
    assert_eq!(serde_json::to_value(&update).unwrap(), json!({"status": "captured"}));
    assert!(UserUpdate::default().validate().is_err());
}

#[test]
fn status_parsing_lists_expected_values() {
    assert_eq!("captured".parse::<UserStatus>(), Ok(UserStatus::Captured));
    let err = "hiding".parse::<UserStatus>().unwrap_err().to_string();
    assert!(err.contains("active, captured, punished"));
}
