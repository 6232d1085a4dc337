use super::*;

#[test]
fn success_with_data_resolves() {
    let env: Envelope<u32> = serde_json::from_str(r#"{"success":true,"message":"ok","data":7}"#).unwrap();
    assert_eq!(env.into_data(200, "fallback"), Ok(7));
}

#[test]
fn failure_carries_backend_message() {
    let env: Envelope<u32> = serde_json::from_str(r#"{"success":false,"message":"LOGIN FAILED"}"#).unwrap();
    let err = env.into_data(200, "fallback").unwrap_err();
    assert_eq!(err.to_string(), "LOGIN FAILED");
    assert_eq!(err.status(), Some(200));
}

#[test]
fn success_without_data_is_an_error() {
    let env: Envelope<u32> = serde_json::from_str(r#"{"success":true,"message":"done"}"#).unwrap();
    assert_eq!(env.into_data(200, "fallback").unwrap_err().to_string(), "done");
}

#[test]
fn blank_message_falls_back() {
    let env: Envelope<u32> = serde_json::from_str(r#"{"success":false,"message":"  "}"#).unwrap();
    assert_eq!(env.message_or("failed to load users"), "failed to load users");
    assert_eq!(env.into_data(500, "failed to load users").unwrap_err().to_string(), "failed to load users");
}

#[test]
fn null_data_counts_as_absent() {
    let env: Envelope<Vec<u32>> = serde_json::from_str(r#"{"success":true,"message":"","data":null}"#).unwrap();
    assert!(env.data.is_none());
}

#[test]
fn extra_fields_are_ignored() {
    let raw = r#"{"success":true,"message":"","data":[1,2],"page":1,"limit":10,"total_items":2,"total_pages":1}"#;
    let env: Envelope<Vec<u32>> = serde_json::from_str(raw).unwrap();
    assert_eq!(env.data, Some(vec![1, 2]));
}

#[test]
fn error_detail_is_captured() {
    let raw = r#"{"success":false,"message":"Access denied","error":"only Andrei can list users"}"#;
    let env: Envelope<()> = serde_json::from_str(raw).unwrap();
    assert_eq!(env.error.as_deref(), Some("only Andrei can list users"));
}

#[test]
fn constructors_serialize_without_empty_fields() {
    let json = serde_json::to_value(Envelope::<u8>::failure("bad gateway")).unwrap();
    assert_eq!(json, serde_json::json!({"success": false, "message": "bad gateway"}));
    let json = serde_json::to_value(Envelope::ok("", 3_u8)).unwrap();
    assert_eq!(json["data"], 3);
}
