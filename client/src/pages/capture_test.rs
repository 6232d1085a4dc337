use super::*;

fn admin(id: u64, status: &str) -> UserProfile {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "username": format!("admin{id}"),
        "email": "a@chaos.dev",
        "role": "network_admin",
        "status": status,
    }))
    .unwrap()
}

#[test]
fn captured_admins_are_not_targets() {
    let admins = [admin(1, "active"), admin(2, "captured"), admin(3, "punished")];
    let ids: Vec<u64> = capturable(&admins).iter().map(|a| a.id).collect();
    assert_eq!(ids, [1, 3]);
}

#[test]
fn receipt_line_includes_points() {
    let receipt = CaptureReceipt { message: "Network admin captured".to_owned(), points_awarded: 50 };
    assert_eq!(receipt_line(&receipt), "Network admin captured (+50 PTS)");
}

#[test]
fn blank_receipt_message_uses_default_text() {
    let receipt = CaptureReceipt { message: String::new(), points_awarded: 0 };
    assert_eq!(receipt_line(&receipt), "TARGET CAPTURED SUCCESSFULLY! (+0 PTS)");
}
