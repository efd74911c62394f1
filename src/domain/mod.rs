//! # Domain Layer
//!
//! The domain layer contains the core rules of the guest list.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: The Invite record, its presence status and repository trait
//! - **services**: Field validation rules applied before anything is persisted
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts

pub mod entities;
pub mod services;

// Re-export commonly used types
pub use entities::*;
