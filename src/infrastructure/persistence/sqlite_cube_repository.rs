//! SQLite implementation of the cube repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Cube;
use crate::domain::repositories::CubeRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::records::CubeRecord;

/// SQLite repository for cube storage and retrieval.
pub struct SqliteCubeRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCubeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CubeRepository for SqliteCubeRepository {
    async fn insert(&self, cube: Cube) -> Result<Uuid, AppError> {
        let record = CubeRecord::from_entity(&cube);

        sqlx::query(
            r#"
            INSERT INTO cubes (id, side_length)
            VALUES (?1, ?2)
            ON CONFLICT(id) DO UPDATE SET
                side_length = excluded.side_length
            "#,
        )
        .bind(&record.id)
        .bind(record.side_length)
        .execute(self.pool.as_ref())
        .await?;

        Ok(cube.id())
    }

    async fn read_by_id(&self, id: Uuid) -> Result<Option<Cube>, AppError> {
        let record = sqlx::query_as::<_, CubeRecord>(
            "SELECT id, side_length FROM cubes WHERE id = ?1",
        )
        .bind(id.to_string())
        .fetch_optional(self.pool.as_ref())
        .await?;

        record.map(CubeRecord::into_entity).transpose()
    }

    async fn update(&self, cube: Cube) -> Result<bool, AppError> {
        let record = CubeRecord::from_entity(&cube);

        let result = sqlx::query("UPDATE cubes SET side_length = ?2 WHERE id = ?1")
            .bind(&record.id)
            .bind(record.side_length)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cubes WHERE id = ?1")
            .bind(id.to_string())
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
