//! Shared application state injected into handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{CubeService, CylinderService};
use crate::infrastructure::persistence::{SqliteCubeRepository, SqliteCylinderRepository};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<SqlitePool>,
    pub cylinder_service: Arc<CylinderService<SqliteCylinderRepository>>,
    pub cube_service: Arc<CubeService<SqliteCubeRepository>>,
}

impl AppState {
    /// Wires the repositories and services on top of a connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        let cylinder_repository = Arc::new(SqliteCylinderRepository::new(pool.clone()));
        let cube_repository = Arc::new(SqliteCubeRepository::new(pool.clone()));

        Self {
            db: pool,
            cylinder_service: Arc::new(CylinderService::new(cylinder_repository)),
            cube_service: Arc::new(CubeService::new(cube_repository)),
        }
    }
}
