//! Leaderboard ordering and performance tiers.

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

use std::fmt;
use std::str::FromStr;

use crate::model::LeaderboardEntry;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Points,
    Captures,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "points" => Ok(Self::Points),
            "captures" => Ok(Self::Captures),
            other => Err(format!("unknown sort key '{other}' (expected points or captures)")),
        }
    }
}

/// Entries ordered by `key`, highest first. Ties keep their backend order.
#[must_use]
pub fn sorted(entries: &[LeaderboardEntry], key: SortKey) -> Vec<LeaderboardEntry> {
    let mut out = entries.to_vec();
    match key {
        SortKey::Points => out.sort_by(|a, b| b.points.cmp(&a.points)),
        SortKey::Captures => out.sort_by(|a, b| b.captures.cmp(&a.captures)),
    }
    out
}

/// Badge shown next to a daemon's score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PerformanceRating {
    Recruit,
    Experienced,
    Veteran,
    Elite,
    Legendary,
}

impl PerformanceRating {
    #[must_use]
    pub fn for_points(points: i64) -> Self {
        match points {
            1000.. => Self::Legendary,
            500..=999 => Self::Elite,
            250..=499 => Self::Veteran,
            100..=249 => Self::Experienced,
            _ => Self::Recruit,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Recruit => "RECRUIT",
            Self::Experienced => "EXPERIENCED",
            Self::Veteran => "VETERAN",
            Self::Elite => "ELITE",
            Self::Legendary => "LEGENDARY",
        }
    }
}

impl fmt::Display for PerformanceRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
