use super::*;

fn user(id: u64, role: &str) -> UserProfile {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "username": format!("user{id}"),
        "email": format!("user{id}@chaos.dev"),
        "role": role,
    }))
    .unwrap()
}

#[test]
fn counts_follow_role_order() {
    let users = [user(1, "andrei"), user(2, "daemon"), user(3, "daemon"), user(4, "network_admin")];
    assert_eq!(role_counts(&users), [1, 2, 1]);
}

#[test]
fn empty_directory_counts_zero() {
    assert_eq!(role_counts(&[]), [0, 0, 0]);
}
