//! # Domain Services
//!
//! - **validation**: constraint tables and the [`InviteValidator`] that applies them

mod validation;

pub use validation::*;
