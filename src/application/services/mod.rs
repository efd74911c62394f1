//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **InviteService**: Guest list management

pub mod invite_service;

// Re-export invite service types
pub use invite_service::{InviteDto, InviteError, InviteService, InviteServiceImpl, PgInviteService};
