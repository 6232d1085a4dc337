//! Route guard: what a session may see of a screen.
//!
//! The guard is a pure function of the session and the screen's
//! [`Access`]; it keeps no state between evaluations.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::navigation::{Access, Screen};
use crate::role::Role;
use crate::session::Session;

/// Outcome of guarding a screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Bootstrap still running; show a neutral indicator.
    Loading,
    /// No session; redirect to the login screen.
    Unauthenticated,
    /// Render the screen.
    Authorized,
    /// Signed in with a role outside the allow-list; show the denial panel.
    Forbidden { role: Role, required: &'static [Role] },
}

/// Decide whether `session` may see a screen declared with `access`.
#[must_use]
pub fn evaluate(session: &Session, access: Access) -> GuardState {
    if access == Access::Public {
        return GuardState::Authorized;
    }
    if session.is_loading() {
        return GuardState::Loading;
    }
    let Some(role) = session.role() else {
        return GuardState::Unauthenticated;
    };
    match access {
        Access::Only(required) if !required.contains(&role) => GuardState::Forbidden { role, required },
        _ => GuardState::Authorized,
    }
}

/// Screens `session` may currently open.
#[must_use]
pub fn reachable_screens(session: &Session) -> Vec<Screen> {
    Screen::ALL
        .into_iter()
        .filter(|s| evaluate(session, s.access()) == GuardState::Authorized)
        .collect()
}

impl GuardState {
    /// The two lines of the access-denied panel, for `Forbidden` only.
    #[must_use]
    pub fn denial_lines(&self) -> Option<(String, String)> {
        let Self::Forbidden { role, required } = self else {
            return None;
        };
        let required: Vec<String> = required.iter().map(|r| r.as_str().to_uppercase()).collect();
        Some((
            format!("INSUFFICIENT PRIVILEGES. YOUR ROLE: {}", role.as_str().to_uppercase()),
            format!("REQUIRED CLEARANCE: {}", required.join(" OR ")),
        ))
    }
}
