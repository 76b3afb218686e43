//! Repository trait for cylinder data access.

use crate::domain::entities::Cylinder;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for cylinder persistence, keyed by identifier.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteCylinderRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CylinderRepository: Send + Sync {
    /// Persists a cylinder and returns its identifier.
    ///
    /// Upsert semantics: when a record with the same id already exists its
    /// fields are overwritten instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, cylinder: Cylinder) -> Result<Uuid, AppError>;

    /// Retrieves a cylinder by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Cylinder))` if found
    /// - `Ok(None)` if not found; a missing id is never an error
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn read_by_id(&self, id: Uuid) -> Result<Option<Cylinder>, AppError>;

    /// Overwrites the fields of an existing cylinder.
    ///
    /// Returns `Ok(false)` when no record has the entity's id; no record is
    /// created in that case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, cylinder: Cylinder) -> Result<bool, AppError>;

    /// Removes a cylinder by its identifier.
    ///
    /// Returns `Ok(false)` when nothing was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}
