//! Route definitions for the `/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /      -> list_categories
/// POST   /      -> create_category (asset management)
/// PUT    /{id}  -> update_category (asset management)
/// DELETE /{id}  -> delete_category (asset management)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/{id}",
            axum::routing::put(categories::update_category).delete(categories::delete_category),
        )
}
