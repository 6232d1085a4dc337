use super::*;
use crate::model::UserProfile;

fn session_for(role: Role) -> Session {
    let user: UserProfile = serde_json::from_value(serde_json::json!({
        "id": 1, "username": format!("{role}_user"), "email": "u@chaos.dev", "role": role.as_str()
    }))
    .unwrap();
    Session::authenticated("t1".to_owned(), user)
}

#[test]
fn loading_session_makes_no_decision() {
    for screen in Screen::ALL {
        if screen.access() != Access::Public {
            assert_eq!(evaluate(&Session::bootstrapping(), screen.access()), GuardState::Loading);
        }
    }
}

#[test]
fn signed_out_session_is_never_authorized_on_protected_screens() {
    for screen in Screen::ALL.into_iter().filter(|s| s.access() != Access::Public) {
        assert_eq!(evaluate(&Session::signed_out(), screen.access()), GuardState::Unauthenticated, "{screen:?}");
    }
}

#[test]
fn roles_outside_allow_list_are_forbidden() {
    let allow: &'static [Role] = &[Role::Andrei];
    for role in [Role::Daemon, Role::NetworkAdmin] {
        assert_eq!(
            evaluate(&session_for(role), Access::Only(allow)),
            GuardState::Forbidden { role, required: allow }
        );
    }
    assert_eq!(evaluate(&session_for(Role::Andrei), Access::Only(allow)), GuardState::Authorized);
}

#[test]
fn any_role_admits_every_role() {
    for role in Role::ALL {
        assert_eq!(evaluate(&session_for(role), Access::AnyRole), GuardState::Authorized);
    }
}

#[test]
fn public_screens_are_always_open() {
    assert_eq!(evaluate(&Session::bootstrapping(), Access::Public), GuardState::Authorized);
    assert_eq!(evaluate(&Session::signed_out(), Access::Public), GuardState::Authorized);
}

#[test]
fn denial_lines_name_role_and_clearance() {
    let state = GuardState::Forbidden { role: Role::Daemon, required: &[Role::Andrei, Role::NetworkAdmin] };
    let (first, second) = state.denial_lines().unwrap();
    assert_eq!(first, "INSUFFICIENT PRIVILEGES. YOUR ROLE: DAEMON");
    assert_eq!(second, "REQUIRED CLEARANCE: ANDREI OR NETWORK_ADMIN");
    assert_eq!(GuardState::Authorized.denial_lines(), None);
}

#[test]
fn reachable_screens_per_role() {
    let andrei = reachable_screens(&session_for(Role::Andrei));
    assert!(andrei.contains(&Screen::Users));
    assert!(!andrei.contains(&Screen::Capture));

    let admin = reachable_screens(&session_for(Role::NetworkAdmin));
    assert!(admin.contains(&Screen::Guide) && admin.contains(&Screen::Contacts));
    assert!(!admin.contains(&Screen::Users));

    assert_eq!(reachable_screens(&Session::signed_out()), vec![Screen::Login]);
}
