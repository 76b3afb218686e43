//! Repository trait for cube data access.

use crate::domain::entities::Cube;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for cube persistence, keyed by identifier.
///
/// Same contract as [`super::CylinderRepository`]: `insert` is an upsert,
/// `update` and `delete` report a missing id as `Ok(false)` rather than an
/// error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CubeRepository: Send + Sync {
    /// Persists a cube and returns its identifier (upsert on existing id).
    async fn insert(&self, cube: Cube) -> Result<Uuid, AppError>;

    /// Retrieves a cube by its identifier, `Ok(None)` when absent.
    async fn read_by_id(&self, id: Uuid) -> Result<Option<Cube>, AppError>;

    /// Overwrites an existing cube's fields; `Ok(false)` when the id is unknown.
    async fn update(&self, cube: Cube) -> Result<bool, AppError>;

    /// Removes a cube by its identifier; `Ok(false)` when nothing was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}
