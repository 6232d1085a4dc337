//! Role dashboards, the leaderboard, and capture records.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use serde::{Deserialize, Serialize};

use super::{Punishment, Report, UserStatus, nullable};

/// One row of `GET /statistics/leaderboard` or a dashboard ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based rank; filled from list order when the backend omits it.
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub id: Option<u64>,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub points: i64,
    #[serde(default, alias = "captures_count")]
    pub captures: u64,
    #[serde(default, alias = "reports_count")]
    pub reports: u64,
    #[serde(default)]
    pub status: Option<UserStatus>,
}

impl LeaderboardEntry {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.username)
    }
}

/// A completed or attempted capture of a network admin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    pub id: u64,
    #[serde(default)]
    pub daemon_name: Option<String>,
    #[serde(default)]
    pub target_name: String,
    #[serde(default, alias = "capture_date")]
    pub captured_at: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
}

/// Result of `POST /users/{id}/capture`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureReceipt {
    pub message: String,
    #[serde(default, alias = "points_given")]
    pub points_awarded: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemStats {
    #[serde(alias = "totalUsers")]
    pub total_users: u64,
    #[serde(alias = "totalDaemons")]
    pub total_daemons: u64,
    #[serde(alias = "totalNetworkAdmins")]
    pub total_network_admins: u64,
    #[serde(alias = "capturedNetworkAdmins")]
    pub captured_admins: u64,
    #[serde(alias = "punishedDaemons")]
    pub punished_daemons: u64,
    #[serde(alias = "pendingReports")]
    pub pending_reports: u64,
    #[serde(alias = "totalReports")]
    pub total_reports: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaemonStats {
    #[serde(alias = "captures_count")]
    pub captures: u64,
    #[serde(alias = "reports_count")]
    pub reports: u64,
    pub points: i64,
    pub ranking: u32,
    pub status: Option<UserStatus>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResistanceStats {
    #[serde(alias = "totalAdmins")]
    pub total_network_admins: u64,
    #[serde(alias = "capturedAdmins")]
    pub captured_admins: u64,
    #[serde(alias = "freeAdmins")]
    pub free_admins: u64,
    #[serde(alias = "anonymousReports")]
    pub anonymous_reports_today: u64,
}

/// Entry in Andrei's activity feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub status: String,
}

/// Something a daemon did recently.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaosEvent {
    pub id: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub points: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurvivalTip {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResistanceMeme {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub upvotes: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub description: String,
}

/// `GET /dashboard/andrei`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndreiDashboard {
    #[serde(default)]
    pub welcome_message: String,
    #[serde(default, alias = "system_stats")]
    pub stats: SystemStats,
    #[serde(default, deserialize_with = "nullable")]
    pub recent_reports: Vec<Report>,
    #[serde(default, deserialize_with = "nullable")]
    pub top_daemons: Vec<LeaderboardEntry>,
    #[serde(default, deserialize_with = "nullable")]
    pub recent_activity: Vec<Activity>,
    #[serde(default, alias = "all_captures", deserialize_with = "nullable")]
    pub captures: Vec<Capture>,
}

/// `GET /dashboard/daemon`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonDashboard {
    #[serde(default)]
    pub welcome_message: String,
    #[serde(default, alias = "user_stats")]
    pub stats: DaemonStats,
    #[serde(default, alias = "active_missions", deserialize_with = "nullable")]
    pub missions: Vec<Mission>,
    #[serde(default, deserialize_with = "nullable")]
    pub leaderboard: Vec<LeaderboardEntry>,
    #[serde(default, deserialize_with = "nullable")]
    pub recent_chaos: Vec<ChaosEvent>,
    #[serde(default, deserialize_with = "nullable")]
    pub active_punishments: Vec<Punishment>,
    #[serde(default, deserialize_with = "nullable")]
    pub recent_captures: Vec<Capture>,
}

/// `GET /resistance`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResistanceOverview {
    #[serde(default)]
    pub welcome_message: String,
    #[serde(default)]
    pub user_status: Option<UserStatus>,
    #[serde(default, deserialize_with = "nullable")]
    pub survival_tips: Vec<SurvivalTip>,
    #[serde(default, alias = "resistance_memes", deserialize_with = "nullable")]
    pub memes: Vec<ResistanceMeme>,
    #[serde(default)]
    pub anonymous_reports_sent: u64,
    #[serde(default, alias = "resistance_stats")]
    pub stats: ResistanceStats,
    #[serde(default, deserialize_with = "nullable")]
    pub emergency_contacts: Vec<EmergencyContact>,
}

/// Fill missing 1-based positions from list order.
pub(crate) fn number_positions(entries: &mut [LeaderboardEntry]) {
    for (index, entry) in entries.iter_mut().enumerate() {
        if entry.position == 0 {
            entry.position = u32::try_from(index + 1).unwrap_or(u32::MAX);
        }
    }
}
