//! Handlers for the `/departments` resource.

use assetra_core::error::CoreError;
use assetra_core::types::DbId;
use assetra_db::models::org::{CreateDepartment, Department, UpdateDepartment};
use assetra_db::repositories::DepartmentRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/departments
pub async fn list_departments(
    State(state): State<AppState>,
    RequireAuth(_caller): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Department>>>> {
    let departments = DepartmentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: departments }))
}

/// GET /api/v1/departments/{id}
pub async fn get_department(
    State(state): State<AppState>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Department>>> {
    let department = DepartmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Department",
            id,
        }))?;
    Ok(Json(DataResponse { data: department }))
}

/// POST /api/v1/departments
pub async fn create_department(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateDepartment>,
) -> AppResult<(StatusCode, Json<DataResponse<Department>>)> {
    let department = DepartmentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: department })))
}

/// PUT /api/v1/departments/{id}
pub async fn update_department(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDepartment>,
) -> AppResult<Json<DataResponse<Department>>> {
    let department = DepartmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Department",
            id,
        }))?;
    Ok(Json(DataResponse { data: department }))
}

/// DELETE /api/v1/departments/{id}
pub async fn delete_department(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if DepartmentRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Department",
            id,
        }))
    }
}
