//! Handlers for the `/admin/org` resource (colleges and hospitals).
//!
//! Organization structure changes require the super admin role; listing
//! is open to any authenticated caller so pickers can populate.

use assetra_core::error::CoreError;
use assetra_core::types::DbId;
use assetra_db::models::org::{College, CreateOrgUnit, Hospital, UpdateOrgUnit};
use assetra_db::repositories::{CollegeRepo, HospitalRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireSuperAdmin};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Colleges
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/org/colleges
pub async fn list_colleges(
    State(state): State<AppState>,
    RequireAuth(_caller): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<College>>>> {
    let colleges = CollegeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: colleges }))
}

/// POST /api/v1/admin/org/colleges
pub async fn create_college(
    State(state): State<AppState>,
    RequireSuperAdmin(_caller): RequireSuperAdmin,
    Json(input): Json<CreateOrgUnit>,
) -> AppResult<(StatusCode, Json<DataResponse<College>>)> {
    let college = CollegeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: college })))
}

/// PUT /api/v1/admin/org/colleges/{id}
pub async fn update_college(
    State(state): State<AppState>,
    RequireSuperAdmin(_caller): RequireSuperAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrgUnit>,
) -> AppResult<Json<DataResponse<College>>> {
    let college = CollegeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "College",
            id,
        }))?;
    Ok(Json(DataResponse { data: college }))
}

/// DELETE /api/v1/admin/org/colleges/{id}
pub async fn delete_college(
    State(state): State<AppState>,
    RequireSuperAdmin(_caller): RequireSuperAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CollegeRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "College",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Hospitals
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/org/hospitals
pub async fn list_hospitals(
    State(state): State<AppState>,
    RequireAuth(_caller): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Hospital>>>> {
    let hospitals = HospitalRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: hospitals }))
}

/// POST /api/v1/admin/org/hospitals
pub async fn create_hospital(
    State(state): State<AppState>,
    RequireSuperAdmin(_caller): RequireSuperAdmin,
    Json(input): Json<CreateOrgUnit>,
) -> AppResult<(StatusCode, Json<DataResponse<Hospital>>)> {
    let hospital = HospitalRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: hospital })))
}

/// PUT /api/v1/admin/org/hospitals/{id}
pub async fn update_hospital(
    State(state): State<AppState>,
    RequireSuperAdmin(_caller): RequireSuperAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrgUnit>,
) -> AppResult<Json<DataResponse<Hospital>>> {
    let hospital = HospitalRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Hospital",
            id,
        }))?;
    Ok(Json(DataResponse { data: hospital }))
}

/// DELETE /api/v1/admin/org/hospitals/{id}
pub async fn delete_hospital(
    State(state): State<AppState>,
    RequireSuperAdmin(_caller): RequireSuperAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if HospitalRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Hospital",
            id,
        }))
    }
}
