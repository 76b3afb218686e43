//! Cylinder application service.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Cylinder;
use crate::domain::repositories::CylinderRepository;
use crate::error::AppError;

/// Thin application service delegating cylinder CRUD to the repository.
///
/// Carries no logic of its own; it exists to decouple the HTTP layer from
/// the persistence layer behind the [`CylinderRepository`] contract.
pub struct CylinderService<R: CylinderRepository> {
    repository: Arc<R>,
}

impl<R: CylinderRepository> CylinderService<R> {
    /// Creates a new cylinder service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Persists a cylinder, returning its identifier.
    pub async fn insert(&self, cylinder: Cylinder) -> Result<Uuid, AppError> {
        self.repository.insert(cylinder).await
    }

    /// Retrieves a cylinder by id, `None` when absent.
    pub async fn read_by_id(&self, id: Uuid) -> Result<Option<Cylinder>, AppError> {
        self.repository.read_by_id(id).await
    }

    /// Overwrites an existing cylinder; `false` when the id is unknown.
    pub async fn update(&self, cylinder: Cylinder) -> Result<bool, AppError> {
        self.repository.update(cylinder).await
    }

    /// Removes a cylinder; `false` when the id is unknown.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCylinderRepository;
    use mockall::predicate::eq;

    fn test_cylinder(id: Uuid) -> Cylinder {
        Cylinder::new(id, 3.5, 10.0).unwrap()
    }

    #[tokio::test]
    async fn test_insert_delegates_to_repository() {
        let id = Uuid::new_v4();
        let cylinder = test_cylinder(id);

        let mut mock = MockCylinderRepository::new();
        mock.expect_insert()
            .with(eq(cylinder))
            .times(1)
            .returning(move |c| Ok(c.id()));

        let service = CylinderService::new(Arc::new(mock));
        let result = service.insert(cylinder).await.unwrap();

        assert_eq!(result, id);
    }

    #[tokio::test]
    async fn test_read_by_id_passes_through_absence() {
        let id = Uuid::new_v4();

        let mut mock = MockCylinderRepository::new();
        mock.expect_read_by_id()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(None));

        let service = CylinderService::new(Arc::new(mock));
        assert!(service.read_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_passes_through_result() {
        let cylinder = test_cylinder(Uuid::new_v4());

        let mut mock = MockCylinderRepository::new();
        mock.expect_update().times(1).returning(|_| Ok(false));

        let service = CylinderService::new(Arc::new(mock));
        assert!(!service.update(cylinder).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_delegates_to_repository() {
        let id = Uuid::new_v4();

        let mut mock = MockCylinderRepository::new();
        mock.expect_delete()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(true));

        let service = CylinderService::new(Arc::new(mock));
        assert!(service.delete(id).await.unwrap());
    }
}
