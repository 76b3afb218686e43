//! Cube application service.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Cube;
use crate::domain::repositories::CubeRepository;
use crate::error::AppError;

/// Thin application service delegating cube CRUD to the repository.
pub struct CubeService<R: CubeRepository> {
    repository: Arc<R>,
}

impl<R: CubeRepository> CubeService<R> {
    /// Creates a new cube service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Persists a cube, returning its identifier.
    pub async fn insert(&self, cube: Cube) -> Result<Uuid, AppError> {
        self.repository.insert(cube).await
    }

    /// Retrieves a cube by id, `None` when absent.
    pub async fn read_by_id(&self, id: Uuid) -> Result<Option<Cube>, AppError> {
        self.repository.read_by_id(id).await
    }

    /// Overwrites an existing cube; `false` when the id is unknown.
    pub async fn update(&self, cube: Cube) -> Result<bool, AppError> {
        self.repository.update(cube).await
    }

    /// Removes a cube; `false` when the id is unknown.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        self.repository.delete(id).await
    }
}
