//! Authentication Middleware
//!
//! JWT validation middleware for the invite routes. Tokens are issued
//! elsewhere; this service only verifies them.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    RequestExt,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;
use crate::shared::messages::Message;
use crate::startup::AppState;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Authenticated caller, inserted into request extensions.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Subject claim as issued; not necessarily numeric.
    pub user_id: String,
}

/// Verify an HS256 token against `secret` and return the caller.
pub fn verify_token(token: &str, secret: &str) -> Result<AuthUser, String> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => "token expired".to_string(),
        _ => format!("invalid token: {e}"),
    })?;

    let user_id = token_data.claims.sub;
    if user_id.trim().is_empty() {
        return Err("invalid token claims".to_string());
    }

    Ok(AuthUser { user_id })
}

/// Authentication middleware that validates JWT tokens
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let unauthorized = || AppError::Unauthorized(Message::Unauthenticated.text(state.locale()).into());

    let TypedHeader(Authorization(bearer)) = request
        .extract_parts::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| {
            tracing::debug!("Missing or malformed authorization header");
            unauthorized()
        })?;

    let user = verify_token(bearer.token(), &state.settings.jwt.secret).map_err(|reason| {
        tracing::debug!(%reason, "Rejected bearer token");
        unauthorized()
    })?;

    tracing::Span::current().record("user_id", user.user_id.as_str());
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
