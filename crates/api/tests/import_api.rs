//! HTTP-level integration tests for the `/imports` resource: templates,
//! bulk asset/user imports with partial failure, and report persistence.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, body_text, build_test_app, get_auth, mint_token, post_json_auth,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

/// The asset template is a single CSV header line whose columns match the
/// field mapping in catalog order.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_asset_template_header(pool: PgPool) {
    let token = mint_token(1, "asset_manager");
    let app = build_test_app(pool);

    let response = get_auth(app, "/api/v1/imports/assets/template", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/csv"
    );

    let body = body_text(response).await;
    let columns: Vec<_> = body.trim_end().split(',').collect();
    assert_eq!(columns[0], "Asset ID");
    assert_eq!(columns[1], "Name");
    assert_eq!(columns[2], "Category");
    assert!(columns.contains(&"Purchase Price"));
    assert!(columns.contains(&"Warranty Expiry"));
}

/// The user template requires the admin tier.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_user_template_requires_admin(pool: PgPool) {
    let manager = mint_token(1, "asset_manager");
    let app = build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/imports/users/template", &manager).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let admin = mint_token(2, "hospital_admin");
    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/imports/users/template", &admin).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.starts_with("Employee ID,First Name,Last Name,Email"));
}

// ---------------------------------------------------------------------------
// Asset import
// ---------------------------------------------------------------------------

/// A clean batch imports every row, creates categories on the fly, and
/// records a report.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_import_assets_success(pool: PgPool) {
    let token = mint_token(1, "asset_manager");
    let app = build_test_app(pool.clone());

    let response = post_json_auth(
        app,
        "/api/v1/imports/assets",
        &token,
        serde_json::json!({
            "rows": [
                {
                    "Asset ID": "EQ-001",
                    "Name": "Microscope",
                    "Category": "Lab Equipment",
                    "Purchase Price": "$1,200.50",
                    "Purchase Date": "2024-03-15"
                },
                {
                    "Asset ID": "EQ-002",
                    "Name": "Projector",
                    "Category": "AV Equipment"
                }
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let summary = body_json(response).await["data"].clone();
    assert_eq!(summary["total_rows"], 2);
    assert_eq!(summary["imported"], 2);
    assert_eq!(summary["skipped"], 0);
    assert_eq!(summary["error_count"], 0);

    // The rows landed with their coerced values.
    let app = build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/assets?q=EQ-001", &token).await;
    let data = body_json(response).await["data"].clone();
    assert_eq!(data.as_array().unwrap().len(), 1);
    assert_eq!(data[0]["purchase_price"], 1200.5);
    assert_eq!(data[0]["category_name"], "Lab Equipment");

    // The report is retrievable.
    let report_id = summary["report_id"].as_i64().unwrap();
    let app = build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/imports/{report_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let report = body_json(response).await["data"].clone();
    assert_eq!(report["entity_type"], "assets");
    assert_eq!(report["success_count"], 2);
    assert_eq!(report["error_count"], 0);
}

/// Rows missing required fields fail individually (with spreadsheet row
/// numbers offset by the header) while the rest of the batch imports.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_import_assets_partial_failure(pool: PgPool) {
    let token = mint_token(1, "asset_manager");
    let app = build_test_app(pool.clone());

    let response = post_json_auth(
        app,
        "/api/v1/imports/assets",
        &token,
        serde_json::json!({
            "rows": [
                { "Asset ID": "EQ-010", "Name": "Printer", "Category": "IT" },
                { "Name": "No tag or category" },
                { "Asset ID": "EQ-011", "Name": "Scanner", "Category": "IT" }
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let summary = body_json(response).await["data"].clone();
    assert_eq!(summary["total_rows"], 3);
    assert_eq!(summary["imported"], 2);
    // Row index 1 -> spreadsheet row 3; one entry per missing field.
    assert_eq!(summary["error_count"], 2);
    assert_eq!(summary["errors"][0]["row"], 3);
    assert_eq!(
        summary["errors"][0]["message"],
        "Missing required field: Asset ID"
    );
    assert_eq!(
        summary["errors"][1]["message"],
        "Missing required field: Category"
    );

    // The report persisted the same outcome.
    let report_id = summary["report_id"].as_i64().unwrap();
    let app = build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/imports/{report_id}"), &token).await;
    let report = body_json(response).await["data"].clone();
    assert_eq!(report["total_rows"], 3);
    assert_eq!(report["success_count"], 2);
    assert_eq!(report["error_count"], 2);
    assert_eq!(report["errors"][0]["row"], 3);
}

/// A non-empty unparseable price degrades to 0 silently; an unparseable
/// date degrades to NULL. Neither produces an error entry.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_import_assets_transform_leniency(pool: PgPool) {
    let token = mint_token(1, "asset_manager");
    let app = build_test_app(pool.clone());

    let response = post_json_auth(
        app,
        "/api/v1/imports/assets",
        &token,
        serde_json::json!({
            "rows": [{
                "Asset ID": "EQ-020",
                "Name": "Ultrasound",
                "Category": "Medical",
                "Purchase Price": "abc",
                "Purchase Date": "sometime last year"
            }]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let summary = body_json(response).await["data"].clone();
    assert_eq!(summary["imported"], 1);
    assert_eq!(summary["error_count"], 0, "leniency must not surface errors");

    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/assets?q=EQ-020", &token).await;
    let data = body_json(response).await["data"].clone();
    assert_eq!(data[0]["purchase_price"], 0.0);
    assert!(data[0]["purchase_date"].is_null());
}

/// Re-importing an existing asset tag skips the row instead of failing.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_import_assets_skips_existing_tags(pool: PgPool) {
    let token = mint_token(1, "asset_manager");
    let row = serde_json::json!({
        "rows": [{ "Asset ID": "EQ-030", "Name": "Server", "Category": "IT" }]
    });

    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/imports/assets", &token, row.clone()).await;
    assert_eq!(body_json(response).await["data"]["imported"], 1);

    let app = build_test_app(pool);
    let response = post_json_auth(app, "/api/v1/imports/assets", &token, row).await;
    let summary = body_json(response).await["data"].clone();
    assert_eq!(summary["imported"], 0);
    assert_eq!(summary["skipped"], 1);
    assert_eq!(summary["error_count"], 0);
}

/// An empty rows array is a 400, not an empty outcome.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_import_assets_empty_rows_rejected(pool: PgPool) {
    let token = mint_token(1, "asset_manager");
    let app = build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/imports/assets",
        &token,
        serde_json::json!({ "rows": [] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// User import
// ---------------------------------------------------------------------------

/// Imported users are created with the `user` role and can be found by
/// employee id; duplicates are skipped on re-import.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_import_users(pool: PgPool) {
    let admin = mint_token(1, "college_admin");
    let rows = serde_json::json!({
        "rows": [
            {
                "Employee ID": "EMP-7001",
                "First Name": "Dana",
                "Last Name": "Reyes",
                "Email": "dana.reyes@example.edu",
                "Job Title": "Lab Technician"
            },
            {
                "Employee ID": "EMP-7002",
                "First Name": "Sam",
                "Last Name": "Okafor",
                "Email": "sam.okafor@example.edu"
            }
        ]
    });

    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/imports/users", &admin, rows.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let summary = body_json(response).await["data"].clone();
    assert_eq!(summary["imported"], 2);
    assert_eq!(summary["error_count"], 0);

    let user = assetra_db::repositories::UserRepo::find_by_employee_id(&pool, "EMP-7001")
        .await
        .expect("query should succeed")
        .expect("imported user should exist");
    assert_eq!(user.first_name, "Dana");
    assert_eq!(user.email, "dana.reyes@example.edu");
    assert_eq!(user.job_title.as_deref(), Some("Lab Technician"));

    // Role is the seeded `user` role.
    let role = assetra_db::repositories::RoleRepo::find_by_id(&pool, user.role_id)
        .await
        .expect("query should succeed")
        .expect("role should exist");
    assert_eq!(role.name, "user");

    // Second run skips both rows.
    let app = build_test_app(pool);
    let response = post_json_auth(app, "/api/v1/imports/users", &admin, rows).await;
    let summary = body_json(response).await["data"].clone();
    assert_eq!(summary["imported"], 0);
    assert_eq!(summary["skipped"], 2);
}

/// User import sits behind the admin tier; asset managers are forbidden.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_import_users_requires_admin(pool: PgPool) {
    let manager = mint_token(1, "asset_manager");
    let app = build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/imports/users",
        &manager,
        serde_json::json!({ "rows": [{ "Employee ID": "X" }] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A user row missing several required fields yields one error per field
/// and creates nothing.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_import_users_missing_required_fields(pool: PgPool) {
    let admin = mint_token(1, "super_admin");
    let app = build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/imports/users",
        &admin,
        serde_json::json!({ "rows": [{ "First Name": "OnlyFirst" }] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let summary = body_json(response).await["data"].clone();
    assert_eq!(summary["imported"], 0);
    assert_eq!(summary["error_count"], 3);
    let messages: Vec<_> = summary["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["message"].as_str().unwrap().to_string())
        .collect();
    assert!(messages.contains(&"Missing required field: Employee ID".to_string()));
    assert!(messages.contains(&"Missing required field: Last Name".to_string()));
    assert!(messages.contains(&"Missing required field: Email".to_string()));
}
