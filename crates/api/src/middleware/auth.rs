//! Identity resolution from JWT Bearer tokens.
//!
//! [`OptionalIdentity`] resolves `CallerIdentity | absent` without
//! rejecting the request; the RBAC extractors feed it into the policy
//! engine so that missing and insufficient credentials map to distinct
//! decisions. [`AuthUser`] is the strict variant used where a handler
//! needs the caller and nothing else.

use assetra_core::authz::{CallerIdentity, Role};
use assetra_core::error::CoreError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The caller's identity if a valid Bearer token accompanied the request,
/// or `None` when the header is missing, malformed, expired, or carries
/// an unknown role. Never rejects.
#[derive(Debug, Clone)]
pub struct OptionalIdentity(pub Option<CallerIdentity>);

impl FromRequestParts<AppState> for OptionalIdentity {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalIdentity(resolve_identity(parts, state)))
    }
}

/// Authenticated caller extracted from a JWT Bearer token in the
/// `Authorization` header. Rejects with 401 when no identity resolves.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication without a role requirement:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.0.id, role = %user.0.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub CallerIdentity);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_identity(parts, state).map(AuthUser).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Authentication required".into()))
        })
    }
}

/// Decode the Bearer token, if any, into a [`CallerIdentity`].
///
/// Any failure (missing header, bad scheme, invalid signature, expiry,
/// unknown role name) resolves to `None` -- the policy engine decides
/// what absence means for the route's tier.
fn resolve_identity(parts: &Parts, state: &AppState) -> Option<CallerIdentity> {
    let auth_header = parts.headers.get("authorization")?.to_str().ok()?;
    let token = auth_header.strip_prefix("Bearer ")?;
    let claims = validate_token(token, &state.config.jwt).ok()?;
    let role = Role::from_str(&claims.role)?;

    Some(CallerIdentity {
        id: claims.sub,
        role,
        org_units: claims.org_units(),
    })
}
