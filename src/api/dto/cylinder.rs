//! DTOs for the cylinder endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request body for `POST /api/cylinder`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCylinderRequest {
    /// Radius of the cylinder's base. Must be greater than 0.
    #[validate(range(exclusive_min = 0.0, message = "Radius must be greater than 0."))]
    pub radius: f64,

    /// Height of the cylinder. Must be greater than 0.
    #[validate(range(exclusive_min = 0.0, message = "Height must be greater than 0."))]
    pub height: f64,
}

/// Request body for `PUT /api/cylinder/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCylinderRequest {
    /// New radius. Must be greater than 0.
    #[validate(range(exclusive_min = 0.0, message = "Radius must be greater than 0."))]
    pub radius: f64,

    /// New height. Must be greater than 0.
    #[validate(range(exclusive_min = 0.0, message = "Height must be greater than 0."))]
    pub height: f64,
}

/// Response body for a successful create.
#[derive(Debug, Serialize)]
pub struct CylinderCreatedResponse {
    pub id: Uuid,
}

/// Response body for `GET /api/cylinder/{id}`.
#[derive(Debug, Serialize)]
pub struct CylinderResponse {
    pub id: Uuid,
    pub radius: f64,
    pub height: f64,
}
