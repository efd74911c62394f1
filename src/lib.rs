//! # Guest List Library
//!
//! This crate provides an event guest-list ("invites") service with:
//! - RESTful HTTP API endpoints behind a bearer-token guard
//! - PostgreSQL for persistent storage
//! - Localized (Arabic/English) response messages
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: The Invite entity, repository trait and validation rules
//! - **Application Layer**: The invite service and DTOs
//! - **Infrastructure Layer**: Database, repository and metrics implementations
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! guest_list/
//! +-- config/         Configuration management
//! +-- domain/         Domain entities, validation rules and traits
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Database, repositories and metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Errors, message catalog, validation rendering
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
