//! Domain layer containing business entities and repository contracts.
//!
//! This layer has no dependencies on infrastructure or presentation concerns.
//! Repository traits defined here are implemented by
//! [`crate::infrastructure::persistence`] and consumed through
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
