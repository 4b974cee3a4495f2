//! HTTP-level integration tests for the auth endpoints.
//!
//! Tests cover login, token refresh, logout, and account lockout. Users
//! are created directly via the repository layer; roles are pre-seeded by
//! migrations (id 1 = super_admin ... id 6 = user).

mod common;

use assetra_api::auth::password::hash_password;
use assetra_db::models::user::{CreateUser, User};
use assetra_db::repositories::UserRepo;
use axum::http::StatusCode;
use common::{body_json, build_test_app, post_json, post_json_auth};
use sqlx::PgPool;

/// Role id of `asset_manager` in the seed data.
const ROLE_ASSET_MANAGER: i64 = 5;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a test user directly in the database and return the user row plus
/// the plaintext password used.
async fn create_test_user(pool: &PgPool, username: &str, role_id: i64) -> (User, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateUser {
        employee_id: None,
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hashed,
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        phone: None,
        job_title: None,
        role_id,
        department_id: None,
        college_id: None,
        hospital_id: None,
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Log in a user via the API and return the JSON response containing
/// `access_token`, `refresh_token`, and `user` info.
async fn login_user(app: axum::Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Auth flow tests
// ---------------------------------------------------------------------------

/// Successful login returns 200 with access_token, refresh_token, and user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "loginuser", ROLE_ASSET_MANAGER).await;
    let app = build_test_app(pool);

    let json = login_user(app, "loginuser", &password).await;

    assert!(
        json["access_token"].is_string(),
        "response must contain access_token"
    );
    assert!(
        json["refresh_token"].is_string(),
        "response must contain refresh_token"
    );
    assert!(
        json["expires_in"].is_number(),
        "response must contain expires_in"
    );
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "loginuser");
    assert_eq!(json["user"]["role"], "asset_manager");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let (_user, _password) = create_test_user(&pool, "wrongpw", ROLE_ASSET_MANAGER).await;
    let app = build_test_app(pool);

    let body = serde_json::json!({ "username": "wrongpw", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent username returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login to a deactivated account returns 403 (distinct from 401).
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_inactive_user(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "inactive", ROLE_ASSET_MANAGER).await;
    UserRepo::deactivate(&pool, user.id)
        .await
        .expect("deactivation should succeed");

    let app = build_test_app(pool);

    let body = serde_json::json!({ "username": "inactive", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A valid refresh token returns new tokens; the old one is rotated out.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_token_refresh_rotates(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "refresher", ROLE_ASSET_MANAGER).await;

    let app = build_test_app(pool.clone());
    let login_json = login_user(app, "refresher", &password).await;
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    // First refresh succeeds.
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = body_json(response).await;
    assert!(refreshed["access_token"].is_string());

    // Reusing the rotated-out token fails.
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout revokes all sessions, so the refresh token stops working.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_sessions(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "logouter", ROLE_ASSET_MANAGER).await;

    let app = build_test_app(pool.clone());
    let login_json = login_user(app, "logouter", &password).await;
    let access_token = login_json["access_token"].as_str().unwrap();
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/auth/logout",
        access_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Five consecutive failed logins lock the account, even with the correct
/// password afterwards.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_account_lockout_after_failed_attempts(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "lockme", ROLE_ASSET_MANAGER).await;

    for _ in 0..5 {
        let app = build_test_app(pool.clone());
        let body = serde_json::json!({ "username": "lockme", "password": "bad_password" });
        let response = post_json(app, "/api/v1/auth/login", body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Correct password, but the account is now locked.
    let app = build_test_app(pool);
    let body = serde_json::json!({ "username": "lockme", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
