//! DTOs for the cube endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request body for `POST /api/cube`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCubeRequest {
    /// Side length of the cube. Must be greater than 0.
    #[validate(range(exclusive_min = 0.0, message = "Side length must be greater than 0."))]
    pub side_length: f64,
}

/// Request body for `PUT /api/cube/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCubeRequest {
    /// New side length. Must be greater than 0.
    #[validate(range(exclusive_min = 0.0, message = "Side length must be greater than 0."))]
    pub side_length: f64,
}

/// Response body for a successful create.
#[derive(Debug, Serialize)]
pub struct CubeCreatedResponse {
    pub id: Uuid,
}

/// Response body for `GET /api/cube/{id}`.
#[derive(Debug, Serialize)]
pub struct CubeResponse {
    pub id: Uuid,
    pub side_length: f64,
}
