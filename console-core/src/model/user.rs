//! Users, credentials, and login grants.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{parse_wire_value, require};
use crate::error::ApiError;
use crate::role::Role;
use crate::wire;

/// Account state as tracked by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
    Captured,
    Punished,
    /// A value this client does not know about.
    #[serde(other)]
    Unknown,
}

impl UserStatus {
    pub const ALL: [UserStatus; 3] = [UserStatus::Active, UserStatus::Captured, UserStatus::Punished];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Captured => "captured",
            Self::Punished => "punished",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = ApiError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_wire_value(raw, &Self::ALL, Self::as_str, "user status")
    }
}

/// The one user shape: session profile and user-list rows alike.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "wire::UserWire")]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    /// Display name; the username when the backend has none.
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub created_at: Option<String>,
}

/// A reference to another user embedded in a report or punishment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub username: String,
}

impl PersonRef {
    /// Username for display, `"UNKNOWN"` when the backend sent none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() { "UNKNOWN" } else { &self.username }
    }
}

/// Username and password submitted by the login form.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// Both fields are required.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] naming the blank fields.
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&[("username", &self.username), ("password", &self.password)])
    }
}

/// Successful `POST /auth/login` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginGrant {
    pub token: String,
    pub user: UserProfile,
}

/// Body of `POST /auth/register` (andrei only).
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// The backend rejects shorter passwords.
pub const MIN_PASSWORD_LEN: usize = 6;

impl NewUser {
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for blank fields, an email without
    /// `@`, or a password shorter than [`MIN_PASSWORD_LEN`].
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&[("username", &self.username), ("email", &self.email), ("password", &self.password)])?;
        if !self.email.contains('@') {
            return Err(ApiError::Validation("email must be a valid address".to_owned()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        Ok(())
    }
}

/// Partial update for `PUT /users/{id}`; absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

impl UserUpdate {
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when nothing would change or the
    /// status is not one the backend accepts.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.username.is_none() && self.email.is_none() && self.role.is_none() && self.status.is_none() {
            return Err(ApiError::Validation("nothing to update".to_owned()));
        }
        if self.status == Some(UserStatus::Unknown) {
            return Err(ApiError::Validation("unknown user status".to_owned()));
        }
        Ok(())
    }
}
