//! Emergency contact directory.

#[cfg(test)]
#[path = "contacts_test.rs"]
mod contacts_test;

use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactStatus {
    Online,
    Offline,
    Compromised,
    Unknown,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 4] =
        [ContactStatus::Online, ContactStatus::Offline, ContactStatus::Compromised, ContactStatus::Unknown];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Compromised => "compromised",
            Self::Unknown => "unknown",
        }
    }
}

impl FromStr for ContactStatus {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw).ok_or(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecurityLevel {
    Low,
    Medium,
    High,
}

impl SecurityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contact {
    pub id: u32,
    pub name: &'static str,
    pub code: &'static str,
    pub frequency: &'static str,
    pub status: ContactStatus,
    pub location: &'static str,
    pub last_contact: &'static str,
    pub description: &'static str,
    pub security: SecurityLevel,
}

pub const CONTACTS: [Contact; 6] = [
    Contact {
        id: 1,
        name: "Safe House Alpha",
        code: "SH-001",
        frequency: "147.420 MHz",
        status: ContactStatus::Online,
        location: "Sector 7-G",
        last_contact: "2 minutes ago",
        description: "Primary safe house with advanced encryption and secure communications. Medical supplies and emergency shelter available.",
        security: SecurityLevel::High,
    },
    Contact {
        id: 2,
        name: "Encrypted Relay",
        code: "ER-789",
        frequency: "446.125 MHz",
        status: ContactStatus::Online,
        location: "Mobile Unit",
        last_contact: "15 minutes ago",
        description: "Mobile relay station for secure communications. Provides encrypted message forwarding and emergency broadcasts.",
        security: SecurityLevel::High,
    },
    Contact {
        id: 3,
        name: "Emergency Beacon",
        code: "EB-999",
        frequency: "Emergency Only",
        status: ContactStatus::Offline,
        location: "Classified",
        last_contact: "3 hours ago",
        description: "Last resort emergency contact. Use only in extreme situations. Automatic distress signal activation.",
        security: SecurityLevel::High,
    },
    Contact {
        id: 4,
        name: "Resistance Cell Beta",
        code: "RC-B42",
        frequency: "243.700 MHz",
        status: ContactStatus::Online,
        location: "Underground Network",
        last_contact: "1 hour ago",
        description: "Secondary resistance cell with escape routes and counter-surveillance capabilities.",
        security: SecurityLevel::Medium,
    },
    Contact {
        id: 5,
        name: "Supply Cache Delta",
        code: "SC-D01",
        frequency: "162.550 MHz",
        status: ContactStatus::Unknown,
        location: "Coordinates: 34.052235, -118.243685",
        last_contact: "6 hours ago",
        description: "Emergency supply cache with equipment and survival gear. Access requires authentication.",
        security: SecurityLevel::Medium,
    },
    Contact {
        id: 6,
        name: "Ghost Protocol",
        code: "GP-000",
        frequency: "CLASSIFIED",
        status: ContactStatus::Compromised,
        location: "BURN NOTICE",
        last_contact: "2 days ago",
        description: "COMPROMISED - DO NOT USE. Former high-level contact now under daemon surveillance.",
        security: SecurityLevel::Low,
    },
];

/// Contacts whose name or code contains `search` (case-insensitive) and,
/// when given, whose status matches.
pub fn matching(search: &str, status: Option<ContactStatus>) -> Vec<Contact> {
    let needle = search.trim().to_lowercase();
    CONTACTS
        .into_iter()
        .filter(|c| c.name.to_lowercase().contains(&needle) || c.code.to_lowercase().contains(&needle))
        .filter(|c| status.is_none_or(|s| c.status == s))
        .collect()
}
