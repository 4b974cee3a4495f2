//! Role-based access control (RBAC) extractors.
//!
//! Each extractor names a permission tier and delegates the decision to
//! [`assetra_core::authz::authorize`], so every protected route goes
//! through the same policy table. Use these in route handlers to enforce
//! authorization at the type level.

use assetra_core::authz::{authorize, CallerIdentity, Decision, PermissionTier};
use assetra_core::error::CoreError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::auth::OptionalIdentity;
use crate::error::AppError;
use crate::state::AppState;

/// Evaluate the policy for the request's (possibly absent) identity and
/// map denials onto the 401/403 error taxonomy.
async fn require_tier(
    parts: &mut Parts,
    state: &AppState,
    tier: PermissionTier,
) -> Result<CallerIdentity, AppError> {
    let OptionalIdentity(identity) = OptionalIdentity::from_request_parts(parts, state)
        .await
        .unwrap_or(OptionalIdentity(None));

    match authorize(identity.as_ref(), tier) {
        Decision::Allowed(identity) => Ok(identity),
        Decision::DeniedUnauthenticated => Err(AppError::Core(CoreError::Unauthorized(
            "Authentication required".into(),
        ))),
        Decision::DeniedForbidden => Err(AppError::Core(CoreError::Forbidden(
            "Insufficient permissions".into(),
        ))),
    }
}

/// Requires any authenticated caller (the `Any` tier). Rejects with 401
/// when no identity resolves; there is no anonymous access.
///
/// ```ignore
/// async fn any_authed(RequireAuth(user): RequireAuth) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAuth(pub CallerIdentity);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_tier(parts, state, PermissionTier::Any)
            .await
            .map(RequireAuth)
    }
}

/// Requires a role in the asset-management set (admins, department heads,
/// asset managers). Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn create_asset(RequireAssetManager(user): RequireAssetManager) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAssetManager(pub CallerIdentity);

impl FromRequestParts<AppState> for RequireAssetManager {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_tier(parts, state, PermissionTier::AssetManagement)
            .await
            .map(RequireAssetManager)
    }
}

/// Requires an administrative role (super admin, college admin, hospital
/// admin). Rejects with 403 Forbidden otherwise.
pub struct RequireAdmin(pub CallerIdentity);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_tier(parts, state, PermissionTier::AdminAction)
            .await
            .map(RequireAdmin)
    }
}

/// Requires the super admin role. Rejects with 403 Forbidden otherwise.
pub struct RequireSuperAdmin(pub CallerIdentity);

impl FromRequestParts<AppState> for RequireSuperAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_tier(parts, state, PermissionTier::SuperAdminOnly)
            .await
            .map(RequireSuperAdmin)
    }
}
