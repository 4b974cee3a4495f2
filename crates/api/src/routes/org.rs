//! Route definitions for the `/admin/org` resource (colleges, hospitals).

use axum::routing::get;
use axum::Router;

use crate::handlers::org;
use crate::state::AppState;

/// Routes mounted at `/admin/org`.
///
/// Mutations require the super admin role (enforced by handler
/// extractors); listing is open to authenticated callers.
///
/// ```text
/// GET    /colleges        -> list_colleges
/// POST   /colleges        -> create_college (super admin)
/// PUT    /colleges/{id}   -> update_college (super admin)
/// DELETE /colleges/{id}   -> delete_college (super admin)
/// GET    /hospitals       -> list_hospitals
/// POST   /hospitals       -> create_hospital (super admin)
/// PUT    /hospitals/{id}  -> update_hospital (super admin)
/// DELETE /hospitals/{id}  -> delete_hospital (super admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/colleges",
            get(org::list_colleges).post(org::create_college),
        )
        .route(
            "/colleges/{id}",
            axum::routing::put(org::update_college).delete(org::delete_college),
        )
        .route(
            "/hospitals",
            get(org::list_hospitals).post(org::create_hospital),
        )
        .route(
            "/hospitals/{id}",
            axum::routing::put(org::update_hospital).delete(org::delete_hospital),
        )
}
