//! Route definitions for the `/assets` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{assets, maintenance};
use crate::state::AppState;

/// Routes mounted at `/assets`.
///
/// ```text
/// GET    /                  -> list_assets (scoped for non-managers)
/// POST   /                  -> create_asset (asset management)
/// GET    /{id}              -> get_asset
/// PUT    /{id}              -> update_asset (asset management)
/// DELETE /{id}              -> delete_asset (asset management)
/// GET    /{id}/maintenance  -> list maintenance history
/// POST   /{id}/maintenance  -> schedule maintenance (asset management)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets).post(assets::create_asset))
        .route(
            "/{id}",
            get(assets::get_asset)
                .put(assets::update_asset)
                .delete(assets::delete_asset),
        )
        .route(
            "/{id}/maintenance",
            get(maintenance::list_for_asset).post(maintenance::create_for_asset),
        )
}
