use super::*;

#[test]
fn short_date_drops_time() {
    assert_eq!(short_date("2025-01-02T10:11:12Z"), "2025-01-02");
    assert_eq!(short_date("yesterday"), "yesterday");
    assert_eq!(short_date_or_dash(None), "-");
}

#[test]
fn shout_upper_cases_wire_values() {
    assert_eq!(shout("network_admin"), "NETWORK ADMIN");
    assert_eq!(shout("extra_tasks"), "EXTRA TASKS");
}

#[test]
fn status_classes() {
    assert_eq!(status_class("approved"), "badge badge--ok");
    assert_eq!(status_class("pending"), "badge badge--warn");
    assert_eq!(status_class("captured"), "badge badge--danger");
    assert_eq!(status_class("mystery"), "badge");
}
