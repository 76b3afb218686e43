//! API route configuration.

use crate::api::handlers::{
    create_cube_handler, create_cylinder_handler, delete_cube_handler, delete_cylinder_handler,
    get_cube_handler, get_cylinder_handler, update_cube_handler, update_cylinder_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// REST routes for the shape entities, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /cylinder`       - Create a cylinder
/// - `GET    /cylinder/{id}`  - Retrieve a cylinder
/// - `PUT    /cylinder/{id}`  - Overwrite a cylinder's dimensions
/// - `DELETE /cylinder/{id}`  - Delete a cylinder
/// - Same verbs for `/cube` and `/cube/{id}`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/cylinder", post(create_cylinder_handler))
        .route(
            "/cylinder/{id}",
            get(get_cylinder_handler)
                .put(update_cylinder_handler)
                .delete(delete_cylinder_handler),
        )
        .route("/cube", post(create_cube_handler))
        .route(
            "/cube/{id}",
            get(get_cube_handler)
                .put(update_cube_handler)
                .delete(delete_cube_handler),
        )
}
