//! # Domain Entities
//!
//! - **Invite**: one guest on the list, with contact details and presence
//!
//! The repository trait is implemented in the infrastructure layer, following
//! the dependency inversion principle.

mod invite;

pub use invite::{
    Invite, InviteChanges, InviteRepository, NewInvite, ParsePresenceError, Presence,
};

#[cfg(test)]
pub use invite::MockInviteRepository;
