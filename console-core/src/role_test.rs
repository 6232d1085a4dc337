use super::*;

#[test]
fn wire_values_round_trip_through_from_str() {
    for role in Role::ALL {
        assert_eq!(role.as_str().parse::<Role>(), Ok(role));
    }
}

#[test]
fn serde_uses_snake_case_wire_names() {
    assert_eq!(serde_json::to_string(&Role::NetworkAdmin).unwrap(), "\"network_admin\"");
    let role: Role = serde_json::from_str("\"daemon\"").unwrap();
    assert_eq!(role, Role::Daemon);
}

#[test]
fn unknown_role_is_rejected() {
    assert_eq!("overlord".parse::<Role>(), Err(UnknownRole("overlord".to_owned())));
    assert!(serde_json::from_str::<Role>("\"overlord\"").is_err());
}

#[test]
fn display_matches_wire_value() {
    assert_eq!(Role::Andrei.to_string(), "andrei");
}

#[test]
fn console_titles_differ_per_role() {
    assert_eq!(Role::Andrei.console_title(), "ANDREI SUPREME COMMAND");
    assert_eq!(Role::Daemon.console_title(), "DAEMON OPERATIONS");
    assert_eq!(Role::NetworkAdmin.console_title(), "RESISTANCE NETWORK");
}
