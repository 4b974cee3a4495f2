//! HTTP-level integration tests for the `/assets` resource: CRUD,
//! validation, uniqueness conflicts, and department scoping.

mod common;

use assetra_core::authz::OrgUnitRefs;
use axum::http::StatusCode;
use common::{
    body_json, build_test_app, delete_auth, get_auth, mint_token, mint_token_with_org,
    post_json_auth, put_json_auth,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a category via the API and return its id.
async fn create_category(pool: &PgPool, token: &str, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/categories",
        token,
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a department via the API (admin tier) and return its id.
async fn create_department(pool: &PgPool, name: &str) -> i64 {
    let token = mint_token(90, "super_admin");
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/departments",
        &token,
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create an asset via the API and return its id.
async fn create_asset(pool: &PgPool, token: &str, body: serde_json::Value) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/assets", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_asset_crud_round_trip(pool: PgPool) {
    let token = mint_token(1, "asset_manager");
    let category_id = create_category(&pool, &token, "Lab Equipment").await;

    let asset_id = create_asset(
        &pool,
        &token,
        serde_json::json!({
            "asset_tag": "EQ-100",
            "name": "Centrifuge",
            "category_id": category_id,
            "serial_number": "SN-998",
            "purchase_price": 12500.75,
            "purchase_date": "2024-03-15"
        }),
    )
    .await;

    // Read it back.
    let app = build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/assets/{asset_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["asset_tag"], "EQ-100");
    assert_eq!(json["data"]["status"], "in_service");
    assert_eq!(json["data"]["purchase_price"], 12500.75);

    // Update the status.
    let app = build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/assets/{asset_id}"),
        &token,
        serde_json::json!({ "status": "under_repair" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "under_repair");

    // Delete it.
    let app = build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/assets/{asset_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone.
    let app = build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/assets/{asset_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// An unknown status value is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_status_rejected(pool: PgPool) {
    let token = mint_token(1, "asset_manager");
    let category_id = create_category(&pool, &token, "Lab Equipment").await;

    let app = build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/assets",
        &token,
        serde_json::json!({
            "asset_tag": "EQ-1",
            "name": "X",
            "category_id": category_id,
            "status": "exploded"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Duplicate asset tags violate the unique constraint and map to 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_asset_tag_conflicts(pool: PgPool) {
    let token = mint_token(1, "asset_manager");
    let category_id = create_category(&pool, &token, "Lab Equipment").await;

    let body = serde_json::json!({
        "asset_tag": "EQ-DUP",
        "name": "First",
        "category_id": category_id
    });
    create_asset(&pool, &token, body.clone()).await;

    let app = build_test_app(pool);
    let response = post_json_auth(app, "/api/v1/assets", &token, body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_asset_returns_404(pool: PgPool) {
    let token = mint_token(1, "asset_manager");
    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/assets/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Department scoping
// ---------------------------------------------------------------------------

/// Callers outside the asset-management tier only see their own
/// department's assets, regardless of query parameters.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_scoped_to_department_for_plain_users(pool: PgPool) {
    let manager = mint_token(1, "asset_manager");
    let category_id = create_category(&pool, &manager, "Lab Equipment").await;
    let dept_a = create_department(&pool, "Radiology").await;
    let dept_b = create_department(&pool, "Cardiology").await;

    create_asset(
        &pool,
        &manager,
        serde_json::json!({
            "asset_tag": "EQ-A", "name": "Scanner", "category_id": category_id,
            "department_id": dept_a
        }),
    )
    .await;
    create_asset(
        &pool,
        &manager,
        serde_json::json!({
            "asset_tag": "EQ-B", "name": "Monitor", "category_id": category_id,
            "department_id": dept_b
        }),
    )
    .await;

    // A plain user in department A sees only EQ-A...
    let user_token = mint_token_with_org(
        42,
        "user",
        OrgUnitRefs {
            department_id: Some(dept_a),
            college_id: None,
            hospital_id: None,
        },
    );
    let app = build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/assets", &user_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    let tags: Vec<_> = data
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["asset_tag"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(tags, vec!["EQ-A"]);

    // ...even when asking for department B explicitly.
    let app = build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/assets?department_id={dept_b}"),
        &user_token,
    )
    .await;
    let data = body_json(response).await["data"].clone();
    let tags: Vec<_> = data
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["asset_tag"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(tags, vec!["EQ-A"], "scope must override the query filter");

    // Asset managers see everything.
    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/assets", &manager).await;
    let data = body_json(response).await["data"].clone();
    assert_eq!(data.as_array().unwrap().len(), 2);
}

/// Maintenance records nest under assets and honor tier rules.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_maintenance_lifecycle(pool: PgPool) {
    let token = mint_token(1, "dept_head");
    let category_id = create_category(&pool, &token, "Lab Equipment").await;
    let asset_id = create_asset(
        &pool,
        &token,
        serde_json::json!({ "asset_tag": "EQ-M", "name": "Autoclave", "category_id": category_id }),
    )
    .await;

    // Schedule maintenance.
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/assets/{asset_id}/maintenance"),
        &token,
        serde_json::json!({
            "maintenance_type": "calibration",
            "description": "Annual calibration",
            "cost": 300.0,
            "scheduled_date": "2026-09-01"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let record = body_json(response).await["data"].clone();
    assert_eq!(record["status"], "scheduled");
    let record_id = record["id"].as_i64().unwrap();

    // Complete it.
    let app = build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/maintenance/{record_id}"),
        &token,
        serde_json::json!({ "status": "completed", "completed_date": "2026-09-02" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "completed");

    // Plain users can read the history but not add to it.
    let user_token = mint_token(7, "user");
    let app = build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/assets/{asset_id}/maintenance"),
        &user_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);

    let app = build_test_app(pool);
    let response = post_json_auth(
        app,
        &format!("/api/v1/assets/{asset_id}/maintenance"),
        &user_token,
        serde_json::json!({ "maintenance_type": "repair", "description": "nope" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
