#![allow(dead_code)]

use axum_test::TestServer;
use geometry_api::routes::app_router;
use geometry_api::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;
use uuid::Uuid;

/// Builds a test server running the full application router.
pub fn make_server(pool: SqlitePool) -> TestServer {
    let state = AppState::new(Arc::new(pool));
    TestServer::new(app_router(state)).unwrap()
}

pub async fn insert_test_cylinder(pool: &SqlitePool, id: Uuid, radius: f64, height: f64) {
    sqlx::query("INSERT INTO cylinders (id, radius, height) VALUES (?1, ?2, ?3)")
        .bind(id.to_string())
        .bind(radius)
        .bind(height)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_test_cube(pool: &SqlitePool, id: Uuid, side_length: f64) {
    sqlx::query("INSERT INTO cubes (id, side_length) VALUES (?1, ?2)")
        .bind(id.to_string())
        .bind(side_length)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_cylinders(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM cylinders")
        .fetch_one(pool)
        .await
        .unwrap()
}
