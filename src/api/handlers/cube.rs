//! Handlers for the cube CRUD endpoints.
//!
//! Same request flow as the cylinder handlers with a single dimension.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::cube::{
    CreateCubeRequest, CubeCreatedResponse, CubeResponse, UpdateCubeRequest,
};
use crate::domain::entities::Cube;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new cube.
///
/// # Endpoint
///
/// `POST /api/cube`
pub async fn create_cube_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateCubeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CubeCreatedResponse>), AppError> {
    let Json(payload) = payload?;

    payload.validate().inspect_err(|e| {
        tracing::warn!(errors = %e, "Create cube rejected by validation");
    })?;

    let cube = Cube::new(Uuid::new_v4(), payload.side_length)?;
    let id = state.cube_service.insert(cube).await?;

    tracing::info!(%id, side_length = payload.side_length, "Cube created");

    Ok((StatusCode::CREATED, Json(CubeCreatedResponse { id })))
}

/// Retrieves a cube by its identifier.
///
/// # Endpoint
///
/// `GET /api/cube/{id}`
pub async fn get_cube_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<CubeResponse>, AppError> {
    let cube = state.cube_service.read_by_id(id).await?.ok_or_else(|| {
        tracing::warn!(%id, "Cube not found");
        AppError::not_found("Cube not found", json!({ "id": id }))
    })?;

    Ok(Json(CubeResponse {
        id: cube.id(),
        side_length: cube.side_length(),
    }))
}

/// Overwrites an existing cube's side length.
///
/// # Endpoint
///
/// `PUT /api/cube/{id}`
pub async fn update_cube_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateCubeRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(payload) = payload?;

    payload.validate().inspect_err(|e| {
        tracing::warn!(%id, errors = %e, "Update cube rejected by validation");
    })?;

    let cube = Cube::new(id, payload.side_length)?;
    let updated = state.cube_service.update(cube).await?;

    if !updated {
        tracing::warn!(%id, "Cube not found for update");
        return Err(AppError::not_found("Cube not found", json!({ "id": id })));
    }

    tracing::info!(%id, side_length = payload.side_length, "Cube updated");

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a cube by its identifier.
///
/// # Endpoint
///
/// `DELETE /api/cube/{id}`
pub async fn delete_cube_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = state.cube_service.delete(id).await?;

    if !deleted {
        tracing::warn!(%id, "Cube not found for deletion");
        return Err(AppError::not_found("Cube not found", json!({ "id": id })));
    }

    tracing::info!(%id, "Cube deleted");

    Ok(StatusCode::NO_CONTENT)
}
