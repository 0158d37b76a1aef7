//! HTTP-level tests for the `/api/v1/colours` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_colour_returns_201_with_trimmed_name(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/colours", json!({"name": "  Teal  "})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Teal");
    assert!(json["data"]["id"].is_number());
    assert!(json["data"]["createdAt"].is_string());
    assert!(json["data"]["updatedAt"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_colour_rejects_blank_name(pool: PgPool) {
    for body in [json!({"name": "   "}), json!({"name": ""}), json!({})] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/v1/colours", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Colour name cannot be empty.");
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/colours").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_colours_in_id_order(pool: PgPool) {
    for name in ["Red", "Blue", "Black"] {
        common::create(&pool, "/api/v1/colours", json!({"name": name})).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/colours").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Red", "Blue", "Black"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_colour(pool: PgPool) {
    let id = common::create(&pool, "/api/v1/colours", json!({"name": "Red"})).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/colours/{id}"),
        json!({"name": " Crimson "}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["name"], "Crimson");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_colour_blank_name_checked_before_existence(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/v1/colours/999999", json!({"name": " "})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Please provide a colour name.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_colour_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/v1/colours/999999", json!({"name": "Green"})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Colour not found with ID: 999999");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_unreferenced_colour_returns_204(pool: PgPool) {
    let id = common::create(&pool, "/api/v1/colours", json!({"name": "Red"})).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/colours/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/colours/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_colour_in_use_returns_409(pool: PgPool) {
    let type_id = common::create(&pool, "/api/v1/product-types", json!({"name": "Furniture"})).await;
    let colour_id = common::create(&pool, "/api/v1/colours", json!({"name": "Red"})).await;
    common::create(
        &pool,
        "/api/v1/products",
        json!({"name": "Chair", "productTypeId": type_id, "colourIds": [colour_id]}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/colours/{colour_id}")).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Cannot delete colour. It is assigned to active products. \
         Please remove it from those products first."
    );

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/colours").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}
