//! Handlers for the `/assets` resource.
//!
//! Reads are open to any authenticated caller; mutations require the
//! asset-management tier. Listing applies row-level scoping: callers
//! outside the asset-management roles only see their own department's
//! assets.

use assetra_core::assets::validate_asset_status;
use assetra_core::error::CoreError;
use assetra_core::types::DbId;
use assetra_db::models::asset::{
    Asset, AssetSearchParams, AssetWithNames, CreateAsset, UpdateAsset,
};
use assetra_db::repositories::AssetRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAssetManager, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/assets
///
/// List assets with optional filters. Callers outside the
/// asset-management tier are scoped to their own department regardless of
/// the `department_id` query parameter.
pub async fn list_assets(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Query(mut params): Query<AssetSearchParams>,
) -> AppResult<Json<DataResponse<Vec<AssetWithNames>>>> {
    if !caller.can_manage_assets() {
        params.department_id = caller.org_units.department_id;
    }

    let assets = AssetRepo::search(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: assets }))
}

/// GET /api/v1/assets/{id}
pub async fn get_asset(
    State(state): State<AppState>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Asset>>> {
    let asset = AssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Asset", id }))?;
    Ok(Json(DataResponse { data: asset }))
}

/// POST /api/v1/assets
pub async fn create_asset(
    State(state): State<AppState>,
    RequireAssetManager(caller): RequireAssetManager,
    Json(input): Json<CreateAsset>,
) -> AppResult<(StatusCode, Json<DataResponse<Asset>>)> {
    if let Some(status) = &input.status {
        validate_asset_status(status)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let asset = AssetRepo::create(&state.pool, &input).await?;
    tracing::info!(asset_id = asset.id, asset_tag = %asset.asset_tag, created_by = caller.id, "Asset created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// PUT /api/v1/assets/{id}
pub async fn update_asset(
    State(state): State<AppState>,
    RequireAssetManager(_caller): RequireAssetManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAsset>,
) -> AppResult<Json<DataResponse<Asset>>> {
    if let Some(status) = &input.status {
        validate_asset_status(status)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let asset = AssetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Asset", id }))?;
    Ok(Json(DataResponse { data: asset }))
}

/// DELETE /api/v1/assets/{id}
pub async fn delete_asset(
    State(state): State<AppState>,
    RequireAssetManager(caller): RequireAssetManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if AssetRepo::delete(&state.pool, id).await? {
        tracing::info!(asset_id = id, deleted_by = caller.id, "Asset deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Asset", id }))
    }
}
