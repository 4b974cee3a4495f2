pub mod admin;
pub mod assets;
pub mod auth;
pub mod categories;
pub mod departments;
pub mod health;
pub mod imports;
pub mod maintenance;
pub mod org;
pub mod vendors;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                        login (public)
/// /auth/refresh                      refresh (public)
/// /auth/logout                       logout (requires auth)
///
/// /admin/users                       list, create (admin only)
/// /admin/users/{id}                  get, update, deactivate
/// /admin/users/{id}/reset-password   reset password
///
/// /admin/org/colleges                list, create (super admin)
/// /admin/org/colleges/{id}           update, delete
/// /admin/org/hospitals               list, create (super admin)
/// /admin/org/hospitals/{id}          update, delete
///
/// /departments                       list, create
/// /departments/{id}                  get, update, delete
///
/// /categories                        list, create
/// /categories/{id}                   update, delete
///
/// /vendors                           list, create
/// /vendors/{id}                      get, update, delete
///
/// /assets                            list (scoped), create
/// /assets/{id}                       get, update, delete
/// /assets/{id}/maintenance           list, schedule
/// /maintenance/{id}                  get, update, delete
///
/// /imports                           list reports
/// /imports/{id}                      get report
/// /imports/assets                    bulk import assets (POST)
/// /imports/assets/template           CSV template (GET)
/// /imports/users                     bulk import users (POST)
/// /imports/users/template            CSV template (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout).
        .nest("/auth", auth::router())
        // Admin routes (user management).
        .nest("/admin", admin::router())
        // Organization structure (colleges, hospitals).
        .nest("/admin/org", org::router())
        // Departments.
        .nest("/departments", departments::router())
        // Asset categories.
        .nest("/categories", categories::router())
        // Vendors.
        .nest("/vendors", vendors::router())
        // Asset register (also nests per-asset maintenance).
        .nest("/assets", assets::router())
        // Record-level maintenance operations.
        .nest("/maintenance", maintenance::router())
        // Bulk imports and reports.
        .nest("/imports", imports::router())
}
