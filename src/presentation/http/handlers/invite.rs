//! Invite Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::{InviteListResponse, InviteResponse, MessageResponse};
use crate::application::services::InviteError;
use crate::presentation::http::extractors::{InviteId, JsonPayload};
use crate::shared::error::AppError;
use crate::shared::messages::{Locale, Message};
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// Translate service errors into localized HTTP errors.
pub fn map_invite_error(err: InviteError, locale: Locale) -> AppError {
    match err {
        InviteError::NotFound => AppError::NotFound(Message::InviteNotFound.text(locale).into()),
        InviteError::Validation(errors) => validation_error(&errors, locale),
        InviteError::EmptyUpdate => {
            AppError::Unprocessable(Message::NothingToUpdate.text(locale).into())
        }
        InviteError::Internal(msg) => AppError::Internal(msg),
    }
}

fn unsupported(locale: Locale) -> AppError {
    AppError::MethodNotAllowed(Message::UnsupportedOperation.text(locale).into())
}

/// List all invites
pub async fn list_invites(
    State(state): State<AppState>,
) -> Result<Json<InviteListResponse>, AppError> {
    let locale = state.locale();
    let invites = state
        .invites
        .list_invites()
        .await
        .map_err(|e| map_invite_error(e, locale))?;

    Ok(Json(InviteListResponse {
        message: Message::InvitesListed.text(locale).into(),
        invites,
    }))
}

/// Create a new invite
pub async fn create_invite(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<InviteResponse>), AppError> {
    let locale = state.locale();
    let invite = state
        .invites
        .create_invite(&payload)
        .await
        .map_err(|e| map_invite_error(e, locale))?;

    Ok((
        StatusCode::CREATED,
        Json(InviteResponse {
            message: Message::InviteCreated.text(locale).into(),
            invite,
        }),
    ))
}

/// Get invite by ID
pub async fn get_invite(
    State(state): State<AppState>,
    InviteId(id): InviteId,
) -> Result<Json<InviteResponse>, AppError> {
    let locale = state.locale();
    let invite = state
        .invites
        .get_invite(id)
        .await
        .map_err(|e| map_invite_error(e, locale))?;

    Ok(Json(InviteResponse {
        message: Message::InviteFound.text(locale).into(),
        invite,
    }))
}

/// Update the supplied fields of an invite (PUT and PATCH)
pub async fn update_invite(
    State(state): State<AppState>,
    InviteId(id): InviteId,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<InviteResponse>, AppError> {
    let locale = state.locale();
    let invite = state
        .invites
        .update_invite(id, &payload)
        .await
        .map_err(|e| map_invite_error(e, locale))?;

    Ok(Json(InviteResponse {
        message: Message::InviteUpdated.text(locale).into(),
        invite,
    }))
}

/// Set the presence of an invite
pub async fn update_presence(
    State(state): State<AppState>,
    InviteId(id): InviteId,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<InviteResponse>, AppError> {
    let locale = state.locale();
    let invite = state
        .invites
        .update_presence(id, &payload)
        .await
        .map_err(|e| map_invite_error(e, locale))?;

    Ok(Json(InviteResponse {
        message: Message::PresenceUpdated.text(locale).into(),
        invite,
    }))
}

/// Delete an invite
pub async fn delete_invite(
    State(state): State<AppState>,
    InviteId(id): InviteId,
) -> Result<Json<MessageResponse>, AppError> {
    let locale = state.locale();
    state
        .invites
        .delete_invite(id)
        .await
        .map_err(|e| map_invite_error(e, locale))?;

    Ok(Json(MessageResponse {
        message: Message::InviteDeleted.text(locale).into(),
    }))
}

/// HTML create form; this API has none.
pub async fn create_form(State(state): State<AppState>) -> AppError {
    unsupported(state.locale())
}

/// HTML edit form; this API has none.
pub async fn edit_form(State(state): State<AppState>) -> AppError {
    unsupported(state.locale())
}
