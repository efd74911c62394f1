//! HTTP Interface
//!
//! Routes, handlers and extractors for the REST API.

pub mod extractors;
pub mod handlers;
pub mod routes;

pub use routes::create_router;
