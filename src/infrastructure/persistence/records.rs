//! Flat storage records mirroring the shape tables.
//!
//! Records are pure mapping shapes between table columns and domain
//! entities. Identifiers are stored as canonical hyphenated UUID text; a
//! record read back from the store re-checks the domain invariant so a
//! corrupted row cannot produce an invalid entity.

use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::{Cube, Cylinder};
use crate::error::AppError;

/// Row shape of the `cylinders` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct CylinderRecord {
    pub id: String,
    pub radius: f64,
    pub height: f64,
}

impl CylinderRecord {
    /// Maps a domain entity to its storage record.
    pub fn from_entity(cylinder: &Cylinder) -> Self {
        Self {
            id: cylinder.id().to_string(),
            radius: cylinder.radius(),
            height: cylinder.height(),
        }
    }

    /// Maps a storage record back to a domain entity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the stored id is not a valid UUID
    /// or the stored dimensions violate the entity invariant.
    pub fn into_entity(self) -> Result<Cylinder, AppError> {
        let id = parse_record_id(&self.id)?;
        Cylinder::new(id, self.radius, self.height).map_err(|e| {
            AppError::internal(
                "Stored cylinder violates domain invariant",
                json!({ "id": self.id, "field": e.field }),
            )
        })
    }
}

/// Row shape of the `cubes` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct CubeRecord {
    pub id: String,
    pub side_length: f64,
}

impl CubeRecord {
    /// Maps a domain entity to its storage record.
    pub fn from_entity(cube: &Cube) -> Self {
        Self {
            id: cube.id().to_string(),
            side_length: cube.side_length(),
        }
    }

    /// Maps a storage record back to a domain entity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the stored id is not a valid UUID
    /// or the stored dimension violates the entity invariant.
    pub fn into_entity(self) -> Result<Cube, AppError> {
        let id = parse_record_id(&self.id)?;
        Cube::new(id, self.side_length).map_err(|e| {
            AppError::internal(
                "Stored cube violates domain invariant",
                json!({ "id": self.id, "field": e.field }),
            )
        })
    }
}

fn parse_record_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| {
        AppError::internal("Stored id is not a valid UUID", json!({ "id": id }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder_round_trip_preserves_fields() {
        let id = Uuid::parse_str("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap();
        let cylinder = Cylinder::new(id, 4.5, 12.0).unwrap();

        let record = CylinderRecord::from_entity(&cylinder);
        assert_eq!(record.id, "3fa85f64-5717-4562-b3fc-2c963f66afa6");
        assert_eq!(record.radius, 4.5);
        assert_eq!(record.height, 12.0);

        let restored = record.into_entity().unwrap();
        assert_eq!(restored, cylinder);
    }

    #[test]
    fn test_cube_round_trip_preserves_fields() {
        let id = Uuid::new_v4();
        let cube = Cube::new(id, 2.5).unwrap();

        let restored = CubeRecord::from_entity(&cube).into_entity().unwrap();
        assert_eq!(restored, cube);
    }

    #[test]
    fn test_invalid_stored_id_is_internal_error() {
        let record = CylinderRecord {
            id: "not-a-uuid".to_string(),
            radius: 1.0,
            height: 1.0,
        };

        match record.into_entity() {
            Err(AppError::Internal { .. }) => {}
            other => panic!("expected Internal, got {other:?}"),
        }
    }

    #[test]
    fn test_corrupt_dimension_is_internal_error() {
        let record = CubeRecord {
            id: Uuid::new_v4().to_string(),
            side_length: -3.0,
        };

        assert!(matches!(record.into_entity(), Err(AppError::Internal { .. })));
    }
}
