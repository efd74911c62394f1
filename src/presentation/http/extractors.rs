//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde_json::Value;

use crate::domain::services::InvitePayload;
use crate::shared::error::AppError;
use crate::shared::messages::Message;
use crate::startup::AppState;

/// Request body as a loose JSON object.
///
/// An empty body, `null` or `[]` yield an empty object; anything else that is
/// not a JSON object is rejected with 400.
#[derive(Debug, Clone, Default)]
pub struct JsonPayload(pub InvitePayload);

/// Parse raw body bytes into a payload object.
pub fn parse_payload(bytes: &[u8]) -> Option<InvitePayload> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Some(InvitePayload::new());
    }

    match serde_json::from_slice::<Value>(bytes).ok()? {
        Value::Object(map) => Some(map),
        Value::Null => Some(InvitePayload::new()),
        Value::Array(items) if items.is_empty() => Some(InvitePayload::new()),
        _ => None,
    }
}

impl FromRequest<AppState> for JsonPayload {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let malformed = || AppError::BadRequest(Message::MalformedBody.text(state.locale()).into());

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Failed to read request body");
            malformed()
        })?;

        parse_payload(&bytes).map(JsonPayload).ok_or_else(malformed)
    }
}

/// Numeric invite identifier from the `{id}` path segment.
///
/// Identifiers that are not integers name no record, so they are rejected as
/// not found rather than as a bad request.
#[derive(Debug, Clone, Copy)]
pub struct InviteId(pub i64);

impl FromRequestParts<AppState> for InviteId {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let not_found = || AppError::NotFound(Message::InviteNotFound.text(state.locale()).into());

        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found())?;

        raw.parse().map(InviteId).map_err(|_| not_found())
    }
}
