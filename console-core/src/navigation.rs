//! Screens, their access rules, and the per-role sidebar menu.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use crate::role::Role;
use crate::session::Session;

/// Who may open a screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Rendered without a session.
    Public,
    /// Any signed-in user.
    AnyRole,
    /// Signed-in users whose role is in the list.
    Only(&'static [Role]),
}

/// Every routed screen of the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Login,
    Dashboard,
    Users,
    Reports,
    Punishments,
    Leaderboard,
    Capture,
    Contacts,
    Guide,
}

impl Screen {
    pub const ALL: [Screen; 9] = [
        Screen::Login,
        Screen::Dashboard,
        Screen::Users,
        Screen::Reports,
        Screen::Punishments,
        Screen::Leaderboard,
        Screen::Capture,
        Screen::Contacts,
        Screen::Guide,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Users => "/users",
            Self::Reports => "/reports",
            Self::Punishments => "/punishments",
            Self::Leaderboard => "/leaderboard",
            Self::Capture => "/capture",
            Self::Contacts => "/contacts",
            Self::Guide => "/guide",
        }
    }

    /// Screen routed at `path`; trailing slashes and query strings are ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        Self::ALL.into_iter().find(|s| s.path() == path)
    }

    #[must_use]
    pub fn access(self) -> Access {
        match self {
            Self::Login => Access::Public,
            Self::Dashboard | Self::Reports | Self::Punishments | Self::Leaderboard => Access::AnyRole,
            Self::Users => Access::Only(&[Role::Andrei]),
            Self::Capture => Access::Only(&[Role::Daemon]),
            Self::Contacts | Self::Guide => Access::Only(&[Role::NetworkAdmin]),
        }
    }
}

/// Where a request for `path` ends up before any guard runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Show(Screen),
    Redirect(Screen),
    NotFound,
}

/// Resolve `path` for `session`.
///
/// `/` goes to the dashboard, and a signed-in user asking for the login
/// page is sent to the dashboard instead.
#[must_use]
pub fn resolve(path: &str, session: &Session) -> Route {
    if path.trim_end_matches('/').is_empty() {
        return Route::Redirect(Screen::Dashboard);
    }
    match Screen::from_path(path) {
        Some(Screen::Login) if session.is_authenticated() => Route::Redirect(Screen::Dashboard),
        Some(screen) => Route::Show(screen),
        None => Route::NotFound,
    }
}

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub screen: Screen,
}

const fn item(label: &'static str, screen: Screen) -> MenuItem {
    MenuItem { label, screen }
}

const ANDREI_MENU: &[MenuItem] = &[
    item("Command Center", Screen::Dashboard),
    item("Manage Users", Screen::Users),
    item("View Reports", Screen::Reports),
    item("Punishments", Screen::Punishments),
    item("Leaderboard", Screen::Leaderboard),
];

const DAEMON_MENU: &[MenuItem] = &[
    item("Daemon Terminal", Screen::Dashboard),
    item("Capture Mission", Screen::Capture),
    item("File Report", Screen::Reports),
    item("Leaderboard", Screen::Leaderboard),
    item("My Punishments", Screen::Punishments),
];

const RESISTANCE_MENU: &[MenuItem] = &[
    item("Resistance Hub", Screen::Dashboard),
    item("File Intel Report", Screen::Reports),
];

/// Sidebar entries for `role`, in display order.
#[must_use]
pub fn menu(role: Role) -> &'static [MenuItem] {
    match role {
        Role::Andrei => ANDREI_MENU,
        Role::Daemon => DAEMON_MENU,
        Role::NetworkAdmin => RESISTANCE_MENU,
    }
}

/// Which dashboard the `/dashboard` screen renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardView {
    CommandCenter,
    DaemonTerminal,
    ResistanceHub,
}

impl DashboardView {
    #[must_use]
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Andrei => Self::CommandCenter,
            Role::Daemon => Self::DaemonTerminal,
            Role::NetworkAdmin => Self::ResistanceHub,
        }
    }
}
