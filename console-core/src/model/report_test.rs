use serde_json::json;

use super::*;

#[test]
fn author_object_is_kept() {
    let report: Report = serde_json::from_value(json!({
        "id": 1, "title": "Rogue cron job", "description": "found it", "type": "capture",
        "status": "pending", "author": {"id": 2, "username": "daemon_alpha", "role": "daemon"},
        "created_at": "2025-01-02T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(report.kind, ReportKind::Capture);
    assert_eq!(report.author, Some(PersonRef { id: Some(2), username: "daemon_alpha".to_owned() }));
    assert_eq!(report.author_name(), "daemon_alpha");
}

#[test]
fn author_string_with_separate_id_is_normalized() {
    let report: Report = serde_json::from_value(json!({
        "id": 7, "title": "Leak", "type": "resistance", "status": "approved",
        "author_id": 9, "author": "netadmin_alice", "createdAt": "2025-01-03"
    }))
    .unwrap();
    assert_eq!(report.author, Some(PersonRef { id: Some(9), username: "netadmin_alice".to_owned() }));
    assert_eq!(report.description, "");
    assert_eq!(report.created_at.as_deref(), Some("2025-01-03"));
}

#[test]
fn missing_author_renders_unknown() {
    let report: Report =
        serde_json::from_value(json!({"id": 3, "title": "Anon", "type": "anonymous", "author": null})).unwrap();
    assert_eq!(report.author, None);
    assert_eq!(report.author_name(), "UNKNOWN");
    assert_eq!(report.status, ReportStatus::Pending);
}

#[test]
fn canonical_report_reads_back_unchanged() {
    let report: Report = serde_json::from_value(json!({
        "id": 4, "title": "t", "description": "d", "type": "capture", "status": "rejected", "author": "x"
    }))
    .unwrap();
    let again: Report = serde_json::from_value(serde_json::to_value(&report).unwrap()).unwrap();
    assert_eq!(again, report);
}

#[test]
fn kind_follows_author_role() {
    assert_eq!(ReportKind::for_author(Role::NetworkAdmin), ReportKind::Resistance);
    assert_eq!(ReportKind::for_author(Role::Daemon), ReportKind::Capture);
    assert_eq!(ReportKind::for_author(Role::Andrei), ReportKind::Anonymous);
}

#[test]
fn new_report_serializes_kind_as_type() {
    let report = NewReport::for_author(Role::Daemon, "Captured bob", "details");
    assert!(report.validate().is_ok());
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({"title": "Captured bob", "description": "details", "type": "capture"})
    );
}

#[test]
fn new_report_requires_text() {
    let err = NewReport::new(" ", "", ReportKind::Anonymous).validate().unwrap_err();
    assert_eq!(err.to_string(), "title and description are required");
    assert!(NewReport::new("a", "b", ReportKind::Unknown).validate().is_err());
}

#[test]
fn status_filter_keeps_matching_rows() {
    let reports: Vec<Report> = serde_json::from_value(json!([
        {"id": 1, "title": "a", "status": "pending"},
        {"id": 2, "title": "b", "status": "approved"},
        {"id": 3, "title": "c", "status": "pending"}
    ]))
    .unwrap();
    let pending = with_status(&reports, Some(ReportStatus::Pending));
    assert_eq!(pending.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(with_status(&reports, None).len(), 3);
}
