//! Canonical entity shapes used by every view and command.
//!
//! DESIGN
//! ======
//! The backend is inconsistent about field names (`captures` vs
//! `captures_count`, `createdAt` vs `created_at`, authors as strings or
//! objects). Each entity here has exactly one shape; the differences are
//! absorbed while deserializing, through serde aliases or a private wire
//! struct in `crate::wire`. Serializing a canonical value and reading it back
//! yields the same value, so the CLI can print these types directly.

pub mod dashboard;
pub mod punishment;
pub mod report;
pub mod user;

pub use dashboard::{
    Activity, AndreiDashboard, Capture, CaptureReceipt, ChaosEvent, DaemonDashboard, DaemonStats,
    EmergencyContact, LeaderboardEntry, Mission, ResistanceMeme, ResistanceOverview, ResistanceStats,
    SurvivalTip, SystemStats,
};
pub use punishment::{NewPunishment, Punishment, PunishmentKind, PunishmentStatus, PunishmentUpdate};
pub use report::{NewReport, Report, ReportKind, ReportStatus};
pub use user::{Credentials, LoginGrant, NewUser, PersonRef, UserProfile, UserStatus, UserUpdate};

use serde::{Deserialize, Deserializer};

use crate::error::ApiError;

/// Reject blank required text fields with a [`ApiError::Validation`].
pub(crate) fn require(fields: &[(&str, &str)]) -> Result<(), ApiError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    match missing.as_slice() {
        [] => Ok(()),
        [one] => Err(ApiError::Validation(format!("{one} is required"))),
        many => Err(ApiError::Validation(format!("{} are required", many.join(" and ")))),
    }
}

/// Parse one of a closed set of wire values.
pub(crate) fn parse_wire_value<T: Copy>(raw: &str, all: &[T], as_str: fn(T) -> &'static str, what: &str) -> Result<T, ApiError> {
    let raw = raw.trim();
    all.iter().copied().find(|v| as_str(*v) == raw).ok_or_else(|| {
        let expected: Vec<&str> = all.iter().map(|v| as_str(*v)).collect();
        ApiError::Validation(format!("unknown {what} '{raw}' (expected one of: {})", expected.join(", ")))
    })
}

/// Treat an explicit `null` like a missing field.
pub(crate) fn nullable<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}
