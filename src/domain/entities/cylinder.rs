//! Cylinder entity with validated dimensions.

use uuid::Uuid;

use super::{ValidationError, positive};

/// A cylinder with a strictly positive base radius and height.
///
/// Fields are private so the invariant can only be crossed through the
/// validated constructor and setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    id: Uuid,
    radius: f64,
    height: f64,
}

impl Cylinder {
    /// Creates a cylinder, rejecting non-positive dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming `radius` or `height` when the
    /// value is zero or negative.
    pub fn new(id: Uuid, radius: f64, height: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            radius: positive("radius", radius)?,
            height: positive("height", height)?,
        })
    }

    /// The immutable identifier assigned at construction.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Replaces the radius, keeping the invariant.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for a non-positive value; the entity is
    /// left unchanged.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ValidationError> {
        self.radius = positive("radius", radius)?;
        Ok(())
    }

    /// Replaces the height, keeping the invariant.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for a non-positive value; the entity is
    /// left unchanged.
    pub fn set_height(&mut self, height: f64) -> Result<(), ValidationError> {
        self.height = positive("height", height)?;
        Ok(())
    }
}
