//! Core domain entities representing the business data model.
//!
//! Entities are validated value holders with identity: an immutable [`Uuid`]
//! assigned at construction plus strictly positive dimensions. The invariant
//! is enforced on construction and on every mutation, so an entity in an
//! invalid state cannot exist.
//!
//! # Entity Types
//!
//! - [`Cylinder`] - radius and height
//! - [`Cube`] - side length

pub mod cube;
pub mod cylinder;

pub use cube::Cube;
pub use cylinder::Cylinder;

use crate::error::AppError;
use serde_json::json;

/// Violation of the positive-dimension invariant, naming the field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} must be greater than 0")]
pub struct ValidationError {
    pub field: &'static str,
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        let details = json!({ "field": err.field });
        AppError::bad_request(err.to_string(), details)
    }
}

/// Checks the shared dimension invariant, returning the value on success.
pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError { field })
    }
}
