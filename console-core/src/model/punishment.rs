//! Punishments assigned by Andrei to daemons and captured admins.

#[cfg(test)]
#[path = "punishment_test.rs"]
mod punishment_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{PersonRef, parse_wire_value, require};
use crate::error::ApiError;
use crate::wire;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunishmentKind {
    Timeout,
    Demotion,
    ExtraTasks,
    Reward,
    #[serde(other)]
    Unknown,
}

impl PunishmentKind {
    pub const ALL: [PunishmentKind; 4] = [
        PunishmentKind::Timeout,
        PunishmentKind::Demotion,
        PunishmentKind::ExtraTasks,
        PunishmentKind::Reward,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Demotion => "demotion",
            Self::ExtraTasks => "extra_tasks",
            Self::Reward => "reward",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PunishmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PunishmentKind {
    type Err = ApiError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_wire_value(raw, &Self::ALL, Self::as_str, "punishment type")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunishmentStatus {
    Active,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl PunishmentStatus {
    pub const ALL: [PunishmentStatus; 3] =
        [PunishmentStatus::Active, PunishmentStatus::Completed, PunishmentStatus::Cancelled];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PunishmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PunishmentStatus {
    type Err = ApiError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_wire_value(raw, &Self::ALL, Self::as_str, "punishment status")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "wire::PunishmentWire")]
pub struct Punishment {
    pub id: u64,
    pub target: PersonRef,
    pub assigner: Option<PersonRef>,
    pub kind: PunishmentKind,
    pub description: Option<String>,
    pub status: PunishmentStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub expires_at: Option<String>,
}

impl Punishment {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == PunishmentStatus::Active
    }
}

/// Keep only punishments in `status`; `None` keeps everything.
#[must_use]
pub fn with_status(punishments: &[Punishment], status: Option<PunishmentStatus>) -> Vec<Punishment> {
    punishments
        .iter()
        .filter(|p| status.is_none_or(|s| p.status == s))
        .cloned()
        .collect()
}

/// Body of `POST /punishments`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPunishment {
    pub target_id: u64,
    #[serde(rename = "type")]
    pub kind: PunishmentKind,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl NewPunishment {
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing target, a blank
    /// description, or an unknown kind.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.target_id == 0 {
            return Err(ApiError::Validation("target is required".to_owned()));
        }
        require(&[("description", &self.description)])?;
        if self.kind == PunishmentKind::Unknown {
            return Err(ApiError::Validation("unknown punishment type".to_owned()));
        }
        Ok(())
    }
}

/// Body of `PUT /punishments/{id}`; absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PunishmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PunishmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl PunishmentUpdate {
    /// Mark the punishment as served.
    #[must_use]
    pub fn completed() -> Self {
        Self { status: Some(PunishmentStatus::Completed), ..Self::default() }
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when nothing would change or the
    /// status is unknown.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.status.is_none() && self.description.is_none() && self.expires_at.is_none() {
            return Err(ApiError::Validation("nothing to update".to_owned()));
        }
        if self.status == Some(PunishmentStatus::Unknown) {
            return Err(ApiError::Validation("unknown punishment status".to_owned()));
        }
        Ok(())
    }
}
