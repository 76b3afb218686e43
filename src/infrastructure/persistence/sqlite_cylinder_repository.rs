//! SQLite implementation of the cylinder repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Cylinder;
use crate::domain::repositories::CylinderRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::records::CylinderRecord;

/// SQLite repository for cylinder storage and retrieval.
///
/// Uses parameterized statements throughout; every operation is a single
/// keyed round trip against the `cylinders` table.
pub struct SqliteCylinderRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCylinderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CylinderRepository for SqliteCylinderRepository {
    async fn insert(&self, cylinder: Cylinder) -> Result<Uuid, AppError> {
        let record = CylinderRecord::from_entity(&cylinder);

        // Upsert: an existing row with the same id gets its fields
        // overwritten instead of failing the insert.
        sqlx::query(
            r#"
            INSERT INTO cylinders (id, radius, height)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET
                radius = excluded.radius,
                height = excluded.height
            "#,
        )
        .bind(&record.id)
        .bind(record.radius)
        .bind(record.height)
        .execute(self.pool.as_ref())
        .await?;

        Ok(cylinder.id())
    }

    async fn read_by_id(&self, id: Uuid) -> Result<Option<Cylinder>, AppError> {
        let record = sqlx::query_as::<_, CylinderRecord>(
            "SELECT id, radius, height FROM cylinders WHERE id = ?1",
        )
        .bind(id.to_string())
        .fetch_optional(self.pool.as_ref())
        .await?;

        record.map(CylinderRecord::into_entity).transpose()
    }

    async fn update(&self, cylinder: Cylinder) -> Result<bool, AppError> {
        let record = CylinderRecord::from_entity(&cylinder);

        let result = sqlx::query(
            "UPDATE cylinders SET radius = ?2, height = ?3 WHERE id = ?1",
        )
        .bind(&record.id)
        .bind(record.radius)
        .bind(record.height)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cylinders WHERE id = ?1")
            .bind(id.to_string())
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
