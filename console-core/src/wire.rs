//! Lenient backend shapes, converted into the canonical model on decode.
//!
//! Only types whose variation cannot be expressed with a serde alias live
//! here: optional display names, authors sent as either a string or an
//! object, and punishment parties sent as objects, names, or bare ids.

use serde::Deserialize;

use crate::model::{
    PersonRef, Punishment, PunishmentKind, PunishmentStatus, Report, ReportKind, ReportStatus, UserProfile,
    UserStatus,
};
use crate::role::Role;

#[derive(Deserialize)]
pub(crate) struct UserWire {
    id: u64,
    username: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    role: Role,
    #[serde(default)]
    status: Option<UserStatus>,
    #[serde(default, alias = "createdAt")]
    created_at: Option<String>,
}

impl From<UserWire> for UserProfile {
    fn from(wire: UserWire) -> Self {
        let name = wire
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| wire.username.clone());
        Self {
            id: wire.id,
            username: wire.username,
            name,
            email: wire.email.unwrap_or_default(),
            role: wire.role,
            status: wire.status.unwrap_or_default(),
            created_at: wire.created_at,
        }
    }
}

/// Authors arrive as a bare username on dashboard rows and as an object
/// on the report endpoints.
#[derive(Deserialize)]
#[serde(untagged)]
enum AuthorWire {
    Name(String),
    Person(PersonRef),
}

#[derive(Deserialize)]
pub(crate) struct ReportWire {
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, rename = "type", alias = "kind")]
    kind: Option<ReportKind>,
    #[serde(default)]
    status: Option<ReportStatus>,
    #[serde(default)]
    author: Option<AuthorWire>,
    #[serde(default)]
    author_id: Option<u64>,
    #[serde(default, alias = "createdAt")]
    created_at: Option<String>,
    #[serde(default, alias = "updatedAt")]
    updated_at: Option<String>,
}

impl From<ReportWire> for Report {
    fn from(wire: ReportWire) -> Self {
        let author = match wire.author {
            Some(AuthorWire::Person(mut person)) => {
                person.id = person.id.or(wire.author_id);
                Some(person)
            }
            Some(AuthorWire::Name(username)) => Some(PersonRef { id: wire.author_id, username }),
            None => wire.author_id.map(|id| PersonRef { id: Some(id), username: String::new() }),
        };
        Self {
            id: wire.id,
            title: wire.title,
            description: wire.description.unwrap_or_default(),
            kind: wire.kind.unwrap_or(ReportKind::Unknown),
            status: wire.status.unwrap_or(ReportStatus::Pending),
            author,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct PunishmentWire {
    id: u64,
    #[serde(default)]
    target: Option<PersonRef>,
    #[serde(default)]
    target_name: Option<String>,
    #[serde(default)]
    target_id: Option<u64>,
    #[serde(default)]
    assigner: Option<PersonRef>,
    #[serde(default)]
    assigner_name: Option<String>,
    #[serde(default, alias = "assigner_id")]
    assigned_by: Option<u64>,
    #[serde(default, rename = "type", alias = "kind")]
    kind: Option<PunishmentKind>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    status: Option<PunishmentStatus>,
    #[serde(default, alias = "createdAt")]
    created_at: Option<String>,
    #[serde(default, alias = "updatedAt")]
    updated_at: Option<String>,
    #[serde(default, alias = "expiresAt")]
    expires_at: Option<String>,
}

fn party(object: Option<PersonRef>, name: Option<String>, id: Option<u64>) -> Option<PersonRef> {
    match (object, name) {
        (Some(mut person), _) => {
            person.id = person.id.or(id);
            Some(person)
        }
        (None, Some(username)) => Some(PersonRef { id, username }),
        (None, None) => id.map(|id| PersonRef { id: Some(id), username: String::new() }),
    }
}

impl From<PunishmentWire> for Punishment {
    fn from(wire: PunishmentWire) -> Self {
        Self {
            id: wire.id,
            target: party(wire.target, wire.target_name, wire.target_id).unwrap_or_default(),
            assigner: party(wire.assigner, wire.assigner_name, wire.assigned_by),
            kind: wire.kind.unwrap_or(PunishmentKind::Unknown),
            description: wire.description.filter(|d| !d.is_empty()),
            status: wire.status.unwrap_or(PunishmentStatus::Active),
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            expires_at: wire.expires_at,
        }
    }
}
