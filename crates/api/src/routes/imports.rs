//! Route definitions for the `/imports` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::imports;
use crate::state::AppState;

/// Routes mounted at `/imports`.
///
/// ```text
/// GET  /                 -> list_reports (asset management)
/// GET  /{id}             -> get_report (asset management)
/// POST /assets           -> import_assets (asset management)
/// GET  /assets/template  -> asset_template (asset management)
/// POST /users            -> import_users (admin)
/// GET  /users/template   -> user_template (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(imports::list_reports))
        .route("/assets", post(imports::import_assets))
        .route("/assets/template", get(imports::asset_template))
        .route("/users", post(imports::import_users))
        .route("/users/template", get(imports::user_template))
        .route("/{id}", get(imports::get_report))
}
