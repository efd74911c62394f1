//! Invite Repository Implementation
//!
//! PostgreSQL implementation of guest list storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Invite, InviteChanges, InviteRepository, NewInvite, Presence};
use crate::shared::error::AppError;

/// Raw `invites` row; presence is kept as text until parsed.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InviteRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub description: String,
    pub phone: Option<String>,
    pub presence: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InviteRow {
    /// Convert to the domain entity, rejecting presence values outside the enumeration.
    pub fn into_invite(self) -> Result<Invite, AppError> {
        let presence = self
            .presence
            .parse::<Presence>()
            .map_err(|e| AppError::Internal(format!("invite {}: {}", self.id, e)))?;

        Ok(Invite {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            description: self.description,
            phone: self.phone,
            presence,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const INVITE_COLUMNS: &str =
    "id, first_name, last_name, description, phone, presence, created_at, updated_at";

/// PostgreSQL implementation of the InviteRepository.
#[derive(Clone)]
pub struct PgInviteRepository {
    pool: PgPool,
}

impl PgInviteRepository {
    /// Creates a new PgInviteRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InviteRepository for PgInviteRepository {
    async fn list(&self) -> Result<Vec<Invite>, AppError> {
        let rows = sqlx::query_as::<_, InviteRow>(&format!(
            "SELECT {INVITE_COLUMNS} FROM invites ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(InviteRow::into_invite).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Invite>, AppError> {
        let row = sqlx::query_as::<_, InviteRow>(&format!(
            "SELECT {INVITE_COLUMNS} FROM invites WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(InviteRow::into_invite).transpose()
    }

    async fn create(&self, invite: &NewInvite) -> Result<Invite, AppError> {
        let row = sqlx::query_as::<_, InviteRow>(&format!(
            r#"
            INSERT INTO invites (first_name, last_name, description, phone, presence)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {INVITE_COLUMNS}
            "#
        ))
        .bind(&invite.first_name)
        .bind(&invite.last_name)
        .bind(&invite.description)
        .bind(&invite.phone)
        .bind(invite.presence.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.into_invite()
    }

    /// Locks the row, merges `changes` and writes it back in one transaction.
    async fn update_fields(
        &self,
        id: i64,
        changes: &InviteChanges,
    ) -> Result<Option<Invite>, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, InviteRow>(&format!(
            "SELECT {INVITE_COLUMNS} FROM invites WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(current) = current else {
            return Ok(None);
        };
        let mut invite = current.into_invite()?;
        invite.apply(changes);

        let row = sqlx::query_as::<_, InviteRow>(&format!(
            r#"
            UPDATE invites
            SET first_name = $2, last_name = $3, description = $4, phone = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {INVITE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&invite.first_name)
        .bind(&invite.last_name)
        .bind(&invite.description)
        .bind(&invite.phone)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        row.into_invite().map(Some)
    }

    async fn set_presence(&self, id: i64, presence: Presence) -> Result<Option<Invite>, AppError> {
        let row = sqlx::query_as::<_, InviteRow>(&format!(
            r#"
            UPDATE invites
            SET presence = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {INVITE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(presence.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(InviteRow::into_invite).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM invites WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
