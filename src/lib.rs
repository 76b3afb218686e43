//! # Geometry API
//!
//! A layered CRUD web service for geometric shape entities (cylinders and
//! cubes) built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Validated entities and repository traits
//! - **Application Layer** ([`application`]) - Services delegating to the repositories
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite-backed repository implementations
//! - **API Layer** ([`api`]) - REST handlers and DTOs
//!
//! ## Request Flow
//!
//! HTTP request → DTO validation → domain entity → service → repository →
//! record mapping → response DTO.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]; see the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CubeService, CylinderService};
    pub use crate::domain::entities::{Cube, Cylinder, ValidationError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
