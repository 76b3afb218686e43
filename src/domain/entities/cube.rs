//! Cube entity with a validated side length.

use uuid::Uuid;

use super::{ValidationError, positive};

/// A cube with a strictly positive side length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    id: Uuid,
    side_length: f64,
}

impl Cube {
    /// Creates a cube, rejecting a non-positive side length.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming `side_length` when the value is
    /// zero or negative.
    pub fn new(id: Uuid, side_length: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            side_length: positive("side_length", side_length)?,
        })
    }

    /// The immutable identifier assigned at construction.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    /// Replaces the side length, keeping the invariant.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for a non-positive value; the entity is
    /// left unchanged.
    pub fn set_side_length(&mut self, side_length: f64) -> Result<(), ValidationError> {
        self.side_length = positive("side_length", side_length)?;
        Ok(())
    }
}
