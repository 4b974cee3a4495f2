//! Handlers for asset maintenance records.
//!
//! Nested listing/creation lives under `/assets/{id}/maintenance`;
//! record-level operations live under `/maintenance/{id}`.

use assetra_core::assets::MaintenanceStatus;
use assetra_core::error::CoreError;
use assetra_core::types::DbId;
use assetra_db::models::maintenance::{
    CreateMaintenanceRecord, MaintenanceRecord, UpdateMaintenanceRecord,
};
use assetra_db::repositories::{AssetRepo, MaintenanceRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAssetManager, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/assets/{id}/maintenance
///
/// List an asset's maintenance history, most recent first.
pub async fn list_for_asset(
    State(state): State<AppState>,
    RequireAuth(_caller): RequireAuth,
    Path(asset_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<MaintenanceRecord>>>> {
    // 404 for unknown assets rather than an empty list.
    AssetRepo::find_by_id(&state.pool, asset_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id: asset_id,
        }))?;

    let records = MaintenanceRepo::list_for_asset(&state.pool, asset_id).await?;
    Ok(Json(DataResponse { data: records }))
}

/// POST /api/v1/assets/{id}/maintenance
///
/// Schedule maintenance for an asset. The record starts in `scheduled`
/// status.
pub async fn create_for_asset(
    State(state): State<AppState>,
    RequireAssetManager(caller): RequireAssetManager,
    Path(asset_id): Path<DbId>,
    Json(input): Json<CreateMaintenanceRecord>,
) -> AppResult<(StatusCode, Json<DataResponse<MaintenanceRecord>>)> {
    AssetRepo::find_by_id(&state.pool, asset_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id: asset_id,
        }))?;

    let record = MaintenanceRepo::create(&state.pool, asset_id, &input, Some(caller.id)).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// GET /api/v1/maintenance/{id}
pub async fn get_record(
    State(state): State<AppState>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MaintenanceRecord>>> {
    let record = MaintenanceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MaintenanceRecord",
            id,
        }))?;
    Ok(Json(DataResponse { data: record }))
}

/// PUT /api/v1/maintenance/{id}
pub async fn update_record(
    State(state): State<AppState>,
    RequireAssetManager(_caller): RequireAssetManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMaintenanceRecord>,
) -> AppResult<Json<DataResponse<MaintenanceRecord>>> {
    if let Some(status) = &input.status {
        if MaintenanceStatus::from_str(status).is_none() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid maintenance status '{}'. Must be one of: {}",
                status,
                MaintenanceStatus::ALL.join(", ")
            ))));
        }
    }

    let record = MaintenanceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MaintenanceRecord",
            id,
        }))?;
    Ok(Json(DataResponse { data: record }))
}

/// DELETE /api/v1/maintenance/{id}
pub async fn delete_record(
    State(state): State<AppState>,
    RequireAssetManager(_caller): RequireAssetManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if MaintenanceRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "MaintenanceRecord",
            id,
        }))
    }
}
