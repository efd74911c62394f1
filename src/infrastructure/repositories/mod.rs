//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::PgInviteRepository;
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let invite_repo = PgInviteRepository::new(pool.clone());
//! }
//! ```

pub mod invite_repository;

pub use invite_repository::{InviteRow, PgInviteRepository};
