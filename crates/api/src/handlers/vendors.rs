//! Handlers for the `/vendors` resource.

use assetra_core::error::CoreError;
use assetra_core::types::DbId;
use assetra_db::models::vendor::{CreateVendor, UpdateVendor, Vendor};
use assetra_db::repositories::VendorRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAssetManager, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/vendors
pub async fn list_vendors(
    State(state): State<AppState>,
    RequireAuth(_caller): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Vendor>>>> {
    let vendors = VendorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: vendors }))
}

/// GET /api/v1/vendors/{id}
pub async fn get_vendor(
    State(state): State<AppState>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vendor>>> {
    let vendor = VendorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vendor",
            id,
        }))?;
    Ok(Json(DataResponse { data: vendor }))
}

/// POST /api/v1/vendors
pub async fn create_vendor(
    State(state): State<AppState>,
    RequireAssetManager(_caller): RequireAssetManager,
    Json(input): Json<CreateVendor>,
) -> AppResult<(StatusCode, Json<DataResponse<Vendor>>)> {
    let vendor = VendorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: vendor })))
}

/// PUT /api/v1/vendors/{id}
pub async fn update_vendor(
    State(state): State<AppState>,
    RequireAssetManager(_caller): RequireAssetManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVendor>,
) -> AppResult<Json<DataResponse<Vendor>>> {
    let vendor = VendorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vendor",
            id,
        }))?;
    Ok(Json(DataResponse { data: vendor }))
}

/// DELETE /api/v1/vendors/{id}
pub async fn delete_vendor(
    State(state): State<AppState>,
    RequireAssetManager(_caller): RequireAssetManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if VendorRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Vendor",
            id,
        }))
    }
}
