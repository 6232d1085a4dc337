use super::*;

#[test]
fn default_targets_same_origin_api() {
    let transport = GlooTransport::default();
    assert_eq!(transport.url("/auth/me"), "/api/auth/me");
}

#[test]
fn trailing_slash_is_trimmed() {
    let transport = GlooTransport::new("https://chaos.example/api/", Duration::from_secs(1));
    assert_eq!(transport.url("/users?role=daemon"), "https://chaos.example/api/users?role=daemon");
}
