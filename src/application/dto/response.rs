//! Response DTOs
//!
//! Data structures for API response bodies. Every body carries a localized
//! `message`; entity payloads sit under capitalized keys.

use serde::Serialize;

use crate::application::services::InviteDto;

/// Listing response
#[derive(Debug, Serialize)]
pub struct InviteListResponse {
    pub message: String,
    #[serde(rename = "Invites")]
    pub invites: Vec<InviteDto>,
}

/// Single invite response
#[derive(Debug, Serialize)]
pub struct InviteResponse {
    pub message: String,
    #[serde(rename = "Invite")]
    pub invite: InviteDto,
}

/// Message-only response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
