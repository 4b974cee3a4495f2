//! Route definitions for the `/vendors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::vendors;
use crate::state::AppState;

/// Routes mounted at `/vendors`.
///
/// ```text
/// GET    /      -> list_vendors
/// POST   /      -> create_vendor (asset management)
/// GET    /{id}  -> get_vendor
/// PUT    /{id}  -> update_vendor (asset management)
/// DELETE /{id}  -> delete_vendor (asset management)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(vendors::list_vendors).post(vendors::create_vendor))
        .route(
            "/{id}",
            get(vendors::get_vendor)
                .put(vendors::update_vendor)
                .delete(vendors::delete_vendor),
        )
}
