//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Create requests carry no identifier; responses do.

pub mod cube;
pub mod cylinder;
pub mod health;
