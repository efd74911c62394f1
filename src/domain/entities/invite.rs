//! Invite (guest record) entity and repository trait.
//!
//! Maps to the `invites` table in the database schema.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Attendance status of a guest.
///
/// Stored as VARCHAR with a CHECK constraint on the three values below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Presence {
    Present,
    Absent,
    Unregistered,
}

impl Presence {
    /// Every accepted wire/database value, in declaration order.
    pub const VALUES: &'static [&'static str] = &["PRESENT", "ABSENT", "UNREGISTERED"];

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "PRESENT",
            Self::Absent => "ABSENT",
            Self::Unregistered => "UNREGISTERED",
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of [`Presence::VALUES`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown presence value: {0}")]
pub struct ParsePresenceError(pub String);

impl FromStr for Presence {
    type Err = ParsePresenceError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRESENT" => Ok(Self::Present),
            "ABSENT" => Ok(Self::Absent),
            "UNREGISTERED" => Ok(Self::Unregistered),
            other => Err(ParsePresenceError(other.to_string())),
        }
    }
}

/// Represents one guest on the list.
///
/// Maps to the `invites` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - first_name: VARCHAR(255) NOT NULL
/// - last_name: VARCHAR(255) NOT NULL
/// - description: TEXT NOT NULL
/// - phone: VARCHAR(10) NULL
/// - presence: VARCHAR(16) NOT NULL DEFAULT 'UNREGISTERED'
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invite {
    /// Store-assigned identity
    pub id: i64,

    /// Guest first name (up to 255 characters)
    pub first_name: String,

    /// Guest last name (up to 255 characters)
    pub last_name: String,

    /// Free-form note about the guest
    pub description: String,

    /// Contact number (up to 10 characters)
    pub phone: Option<String>,

    /// Attendance status
    pub presence: Presence,

    /// Record creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Invite {
    /// Merge the supplied fields into this record.
    ///
    /// Fields that are `None` in `changes` keep their current value.
    pub fn apply(&mut self, changes: &InviteChanges) {
        if let Some(first_name) = &changes.first_name {
            self.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &changes.last_name {
            self.last_name.clone_from(last_name);
        }
        if let Some(description) = &changes.description {
            self.description.clone_from(description);
        }
        if let Some(phone) = &changes.phone {
            self.phone = Some(phone.clone());
        }
    }
}

/// Validated fields for a new guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvite {
    pub first_name: String,
    pub last_name: String,
    pub description: String,
    pub phone: String,
    pub presence: Presence,
}

/// Validated subset of fields for a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InviteChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
}

impl InviteChanges {
    /// Number of fields that will be written.
    pub fn len(&self) -> usize {
        [
            self.first_name.is_some(),
            self.last_name.is_some(),
            self.description.is_some(),
            self.phone.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// True when nothing would change.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Repository trait for Invite data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InviteRepository: Send + Sync {
    /// List every invite in ascending id order.
    async fn list(&self) -> Result<Vec<Invite>, AppError>;

    /// Find an invite by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Invite>, AppError>;

    /// Insert a new invite and return it with store-assigned fields.
    async fn create(&self, invite: &NewInvite) -> Result<Invite, AppError>;

    /// Apply `changes` atomically and return the reloaded record.
    ///
    /// Returns `None` if the invite no longer exists.
    async fn update_fields(
        &self,
        id: i64,
        changes: &InviteChanges,
    ) -> Result<Option<Invite>, AppError>;

    /// Set the presence of an invite. Returns `None` if it does not exist.
    async fn set_presence(&self, id: i64, presence: Presence) -> Result<Option<Invite>, AppError>;

    /// Delete an invite. Returns `false` if nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
