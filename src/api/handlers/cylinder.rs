//! Handlers for the cylinder CRUD endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::cylinder::{
    CreateCylinderRequest, CylinderCreatedResponse, CylinderResponse, UpdateCylinderRequest,
};
use crate::domain::entities::Cylinder;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new cylinder.
///
/// # Endpoint
///
/// `POST /api/cylinder`
///
/// A fresh identifier is generated for the entity; the request body carries
/// only the dimensions.
///
/// # Errors
///
/// Returns 400 Bad Request when the body is missing or malformed, or when a
/// dimension is not strictly positive.
pub async fn create_cylinder_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateCylinderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CylinderCreatedResponse>), AppError> {
    let Json(payload) = payload?;

    payload.validate().inspect_err(|e| {
        tracing::warn!(errors = %e, "Create cylinder rejected by validation");
    })?;

    let cylinder = Cylinder::new(Uuid::new_v4(), payload.radius, payload.height)?;
    let id = state.cylinder_service.insert(cylinder).await?;

    tracing::info!(%id, radius = payload.radius, height = payload.height, "Cylinder created");

    Ok((StatusCode::CREATED, Json(CylinderCreatedResponse { id })))
}

/// Retrieves a cylinder by its identifier.
///
/// # Endpoint
///
/// `GET /api/cylinder/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when no cylinder has the given id.
pub async fn get_cylinder_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<CylinderResponse>, AppError> {
    let cylinder = state
        .cylinder_service
        .read_by_id(id)
        .await?
        .ok_or_else(|| {
            tracing::warn!(%id, "Cylinder not found");
            AppError::not_found("Cylinder not found", json!({ "id": id }))
        })?;

    Ok(Json(CylinderResponse {
        id: cylinder.id(),
        radius: cylinder.radius(),
        height: cylinder.height(),
    }))
}

/// Overwrites an existing cylinder's dimensions.
///
/// # Endpoint
///
/// `PUT /api/cylinder/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request when the body is missing or malformed or a
/// dimension is not strictly positive, and 404 Not Found when no cylinder
/// has the given id.
pub async fn update_cylinder_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateCylinderRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(payload) = payload?;

    payload.validate().inspect_err(|e| {
        tracing::warn!(%id, errors = %e, "Update cylinder rejected by validation");
    })?;

    let cylinder = Cylinder::new(id, payload.radius, payload.height)?;
    let updated = state.cylinder_service.update(cylinder).await?;

    if !updated {
        tracing::warn!(%id, "Cylinder not found for update");
        return Err(AppError::not_found("Cylinder not found", json!({ "id": id })));
    }

    tracing::info!(%id, radius = payload.radius, height = payload.height, "Cylinder updated");

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a cylinder by its identifier.
///
/// # Endpoint
///
/// `DELETE /api/cylinder/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when no cylinder has the given id.
pub async fn delete_cylinder_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = state.cylinder_service.delete(id).await?;

    if !deleted {
        tracing::warn!(%id, "Cylinder not found for deletion");
        return Err(AppError::not_found("Cylinder not found", json!({ "id": id })));
    }

    tracing::info!(%id, "Cylinder deleted");

    Ok(StatusCode::NO_CONTENT)
}
