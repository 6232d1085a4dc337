use super::*;

#[test]
fn blank_backend_message_falls_back_to_generic_text() {
    assert_eq!(login_error_text("  "), LOGIN_FAILED);
}

#[test]
fn backend_message_is_shown_as_is() {
    assert_eq!(login_error_text("Authentication failed"), "Authentication failed");
}

#[test]
fn quick_access_covers_each_role() {
    let users: Vec<_> = QUICK_ACCESS.iter().map(|(_, user, _)| *user).collect();
    assert_eq!(users, ["andrei", "daemon_alpha", "netadmin_alice"]);
}
