mod common;

use geometry_api::domain::entities::Cylinder;
use geometry_api::domain::repositories::CylinderRepository;
use geometry_api::infrastructure::persistence::SqliteCylinderRepository;
use sqlx::SqlitePool;
use std::sync::Arc;
use uuid::Uuid;

fn make_repo(pool: SqlitePool) -> SqliteCylinderRepository {
    SqliteCylinderRepository::new(Arc::new(pool))
}

#[sqlx::test]
async fn test_insert_then_read_returns_inserted_values(pool: SqlitePool) {
    let repo = make_repo(pool);
    let id = Uuid::new_v4();
    let cylinder = Cylinder::new(id, 3.5, 10.0).unwrap();

    let returned = repo.insert(cylinder).await.unwrap();
    assert_eq!(returned, id);

    let read = repo.read_by_id(id).await.unwrap().unwrap();
    assert_eq!(read.id(), id);
    assert_eq!(read.radius(), 3.5);
    assert_eq!(read.height(), 10.0);
}

#[sqlx::test]
async fn test_insert_existing_id_overwrites_fields(pool: SqlitePool) {
    let repo = make_repo(pool.clone());
    let id = Uuid::new_v4();

    repo.insert(Cylinder::new(id, 3.5, 10.0).unwrap())
        .await
        .unwrap();
    repo.insert(Cylinder::new(id, 4.5, 12.0).unwrap())
        .await
        .unwrap();

    let read = repo.read_by_id(id).await.unwrap().unwrap();
    assert_eq!(read.radius(), 4.5);
    assert_eq!(read.height(), 12.0);

    // Upsert must not have created a second row.
    assert_eq!(common::count_cylinders(&pool).await, 1);
}

#[sqlx::test]
async fn test_read_absent_id_returns_none(pool: SqlitePool) {
    let repo = make_repo(pool);
    assert!(repo.read_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_update_present_overwrites_and_returns_true(pool: SqlitePool) {
    let repo = make_repo(pool);
    let id = Uuid::new_v4();
    repo.insert(Cylinder::new(id, 3.5, 10.0).unwrap())
        .await
        .unwrap();

    let updated = repo
        .update(Cylinder::new(id, 4.5, 12.0).unwrap())
        .await
        .unwrap();
    assert!(updated);

    let read = repo.read_by_id(id).await.unwrap().unwrap();
    assert_eq!(read.radius(), 4.5);
    assert_eq!(read.height(), 12.0);
}

#[sqlx::test]
async fn test_update_absent_returns_false_and_creates_nothing(pool: SqlitePool) {
    let repo = make_repo(pool.clone());
    let cylinder = Cylinder::new(Uuid::new_v4(), 4.5, 12.0).unwrap();

    assert!(!repo.update(cylinder).await.unwrap());
    assert_eq!(common::count_cylinders(&pool).await, 0);
}

#[sqlx::test]
async fn test_delete_present_then_read_returns_none(pool: SqlitePool) {
    let repo = make_repo(pool);
    let id = Uuid::new_v4();
    repo.insert(Cylinder::new(id, 3.5, 10.0).unwrap())
        .await
        .unwrap();

    assert!(repo.delete(id).await.unwrap());
    assert!(repo.read_by_id(id).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_delete_absent_returns_false(pool: SqlitePool) {
    let repo = make_repo(pool);
    assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
}
