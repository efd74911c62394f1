//! Invite Service
//!
//! Handles guest list operations: listing, creation, lookup, partial update,
//! presence transitions and removal.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use validator::ValidationErrors;

use crate::domain::services::{InvitePayload, InviteValidator, RuleValidator};
use crate::domain::{Invite, InviteRepository, NewInvite, Presence};
use crate::infrastructure::repositories::PgInviteRepository;
use crate::shared::error::AppError;

/// Invite service trait defining guest list operations.
#[async_trait]
pub trait InviteService: Send + Sync {
    /// List every invite.
    async fn list_invites(&self) -> Result<Vec<InviteDto>, InviteError>;

    /// Validate and store a new invite. Presence always starts as UNREGISTERED.
    async fn create_invite(&self, payload: &InvitePayload) -> Result<InviteDto, InviteError>;

    /// Get an invite by its ID.
    async fn get_invite(&self, id: i64) -> Result<InviteDto, InviteError>;

    /// Apply the supplied fields to an existing invite.
    async fn update_invite(
        &self,
        id: i64,
        payload: &InvitePayload,
    ) -> Result<InviteDto, InviteError>;

    /// Change only the presence of an invite.
    async fn update_presence(
        &self,
        id: i64,
        payload: &InvitePayload,
    ) -> Result<InviteDto, InviteError>;

    /// Remove an invite permanently.
    async fn delete_invite(&self, id: i64) -> Result<(), InviteError>;
}

/// Invite data transfer object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InviteDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub description: String,
    pub phone: Option<String>,
    pub presence: Presence,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 last update timestamp.
    pub updated_at: String,
}

impl InviteDto {
    /// Create DTO from domain Invite entity.
    pub fn from_invite(invite: Invite) -> Self {
        Self {
            id: invite.id,
            first_name: invite.first_name,
            last_name: invite.last_name,
            description: invite.description,
            phone: invite.phone,
            presence: invite.presence,
            created_at: invite.created_at.to_rfc3339(),
            updated_at: invite.updated_at.to_rfc3339(),
        }
    }
}

/// Invite service errors.
#[derive(Debug, thiserror::Error)]
pub enum InviteError {
    #[error("Invite not found")]
    NotFound,

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("No fields to update")]
    EmptyUpdate,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for InviteError {
    fn from(err: AppError) -> Self {
        InviteError::Internal(err.to_string())
    }
}

/// Invite service implementation.
pub struct InviteServiceImpl<R, V>
where
    R: InviteRepository,
    V: InviteValidator,
{
    invite_repo: Arc<R>,
    validator: Arc<V>,
}

impl<R, V> InviteServiceImpl<R, V>
where
    R: InviteRepository,
    V: InviteValidator,
{
    /// Create a new InviteServiceImpl.
    pub fn new(invite_repo: Arc<R>, validator: Arc<V>) -> Self {
        Self {
            invite_repo,
            validator,
        }
    }
}

#[async_trait]
impl<R, V> InviteService for InviteServiceImpl<R, V>
where
    R: InviteRepository + 'static,
    V: InviteValidator + 'static,
{
    async fn list_invites(&self) -> Result<Vec<InviteDto>, InviteError> {
        let invites = self.invite_repo.list().await?;

        Ok(invites.into_iter().map(InviteDto::from_invite).collect())
    }

    async fn create_invite(&self, payload: &InvitePayload) -> Result<InviteDto, InviteError> {
        let draft = self
            .validator
            .validate_create(payload)
            .map_err(InviteError::Validation)?;

        let invite = NewInvite {
            first_name: draft.first_name,
            last_name: draft.last_name,
            description: draft.description,
            phone: draft.phone,
            presence: Presence::Unregistered,
        };

        let created = self.invite_repo.create(&invite).await?;
        tracing::info!(invite_id = created.id, "Invite created");

        Ok(InviteDto::from_invite(created))
    }

    async fn get_invite(&self, id: i64) -> Result<InviteDto, InviteError> {
        let invite = self
            .invite_repo
            .find_by_id(id)
            .await?
            .ok_or(InviteError::NotFound)?;

        Ok(InviteDto::from_invite(invite))
    }

    async fn update_invite(
        &self,
        id: i64,
        payload: &InvitePayload,
    ) -> Result<InviteDto, InviteError> {
        // Unknown ids report NotFound before any field is judged
        if self.invite_repo.find_by_id(id).await?.is_none() {
            return Err(InviteError::NotFound);
        }

        let changes = self
            .validator
            .validate_update(payload)
            .map_err(InviteError::Validation)?;
        if changes.is_empty() {
            return Err(InviteError::EmptyUpdate);
        }

        let updated = self
            .invite_repo
            .update_fields(id, &changes)
            .await?
            .ok_or(InviteError::NotFound)?;
        tracing::info!(invite_id = id, fields = changes.len(), "Invite updated");

        Ok(InviteDto::from_invite(updated))
    }

    async fn update_presence(
        &self,
        id: i64,
        payload: &InvitePayload,
    ) -> Result<InviteDto, InviteError> {
        let presence = self
            .validator
            .validate_presence(payload)
            .map_err(InviteError::Validation)?;

        let updated = self
            .invite_repo
            .set_presence(id, presence)
            .await?
            .ok_or(InviteError::NotFound)?;
        tracing::info!(invite_id = id, %presence, "Invite presence updated");

        Ok(InviteDto::from_invite(updated))
    }

    async fn delete_invite(&self, id: i64) -> Result<(), InviteError> {
        if !self.invite_repo.delete(id).await? {
            return Err(InviteError::NotFound);
        }
        tracing::info!(invite_id = id, "Invite deleted");

        Ok(())
    }
}

/// Concrete implementation using PostgreSQL repository.
pub type PgInviteService = InviteServiceImpl<PgInviteRepository, RuleValidator>;
