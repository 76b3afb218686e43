mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::SqlitePool;
use uuid::Uuid;

#[sqlx::test]
async fn test_create_cube_returns_201_with_id(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/cube")
        .json(&json!({ "side_length": 2.5 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
}

#[sqlx::test]
async fn test_create_cube_zero_side_returns_400(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/cube")
        .json(&json!({ "side_length": 0.0 }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_get_seeded_cube(pool: SqlitePool) {
    let id = Uuid::new_v4();
    common::insert_test_cube(&pool, id, 2.5).await;

    let server = common::make_server(pool);
    let response = server.get(&format!("/api/cube/{id}")).await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["id"], id.to_string().as_str());
    assert_eq!(body["side_length"], 2.5);
}

#[sqlx::test]
async fn test_update_cube_round_trip(pool: SqlitePool) {
    let id = Uuid::new_v4();
    common::insert_test_cube(&pool, id, 2.5).await;

    let server = common::make_server(pool);

    server
        .put(&format!("/api/cube/{id}"))
        .json(&json!({ "side_length": 7.0 }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let body = server
        .get(&format!("/api/cube/{id}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(body["side_length"], 7.0);
}

#[sqlx::test]
async fn test_update_cube_invalid_body_returns_400(pool: SqlitePool) {
    let id = Uuid::new_v4();
    common::insert_test_cube(&pool, id, 2.5).await;

    let server = common::make_server(pool);
    let response = server
        .put(&format!("/api/cube/{id}"))
        .json(&json!({ "side_length": -1.0 }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_update_cube_missing_body_returns_400(pool: SqlitePool) {
    let id = Uuid::new_v4();
    common::insert_test_cube(&pool, id, 2.5).await;

    let server = common::make_server(pool);
    let response = server.put(&format!("/api/cube/{id}")).await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_update_unknown_cube_returns_404(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .put(&format!("/api/cube/{}", Uuid::new_v4()))
        .json(&json!({ "side_length": 7.0 }))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_cube(pool: SqlitePool) {
    let id = Uuid::new_v4();
    common::insert_test_cube(&pool, id, 2.5).await;

    let server = common::make_server(pool);

    server
        .delete(&format!("/api/cube/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .delete(&format!("/api/cube/{id}"))
        .await
        .assert_status_not_found();
}
