//! Intelligence reports filed by any role and reviewed by Andrei.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{PersonRef, parse_wire_value, require};
use crate::error::ApiError;
use crate::role::Role;
use crate::wire;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Resistance,
    Capture,
    Anonymous,
    #[serde(other)]
    Unknown,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::Resistance, ReportKind::Capture, ReportKind::Anonymous];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Resistance => "resistance",
            Self::Capture => "capture",
            Self::Anonymous => "anonymous",
            Self::Unknown => "unknown",
        }
    }

    /// Kind stamped on reports filed from the generic report form.
    ///
    /// Network admins file resistance intel, daemons file capture reports,
    /// and Andrei's own reports are anonymous.
    #[must_use]
    pub fn for_author(role: Role) -> Self {
        match role {
            Role::NetworkAdmin => Self::Resistance,
            Role::Daemon => Self::Capture,
            Role::Andrei => Self::Anonymous,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = ApiError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_wire_value(raw, &Self::ALL, Self::as_str, "report type")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 3] = [ReportStatus::Pending, ReportStatus::Approved, ReportStatus::Rejected];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = ApiError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_wire_value(raw, &Self::ALL, Self::as_str, "report status")
    }
}

/// A report as listed on `/reports` and on the Andrei dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "wire::ReportWire")]
pub struct Report {
    pub id: u64,
    pub title: String,
    /// Empty on dashboard rows, which omit the body.
    pub description: String,
    pub kind: ReportKind,
    pub status: ReportStatus,
    pub author: Option<PersonRef>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Report {
    /// Author username for display.
    #[must_use]
    pub fn author_name(&self) -> &str {
        self.author.as_ref().map_or("UNKNOWN", PersonRef::display_name)
    }
}

/// Keep only reports in `status`; `None` keeps everything.
#[must_use]
pub fn with_status(reports: &[Report], status: Option<ReportStatus>) -> Vec<Report> {
    reports
        .iter()
        .filter(|r| status.is_none_or(|s| r.status == s))
        .cloned()
        .collect()
}

/// Body of `POST /reports`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewReport {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ReportKind,
}

impl NewReport {
    pub fn new(title: impl Into<String>, description: impl Into<String>, kind: ReportKind) -> Self {
        Self { title: title.into(), description: description.into(), kind }
    }

    /// A report whose kind follows the author's role.
    pub fn for_author(role: Role, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, ReportKind::for_author(role))
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a blank title or description, or
    /// an unknown kind.
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&[("title", &self.title), ("description", &self.description)])?;
        if self.kind == ReportKind::Unknown {
            return Err(ApiError::Validation("unknown report type".to_owned()));
        }
        Ok(())
    }
}
