//! Route definitions for record-level maintenance operations.

use axum::routing::get;
use axum::Router;

use crate::handlers::maintenance;
use crate::state::AppState;

/// Routes mounted at `/maintenance`.
///
/// Asset-scoped listing/creation lives under `/assets/{id}/maintenance`.
///
/// ```text
/// GET    /{id}  -> get_record
/// PUT    /{id}  -> update_record (asset management)
/// DELETE /{id}  -> delete_record (asset management)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(maintenance::get_record)
            .put(maintenance::update_record)
            .delete(maintenance::delete_record),
    )
}
