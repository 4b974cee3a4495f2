//! Handlers for the `/imports` resource: bulk asset and user imports,
//! template downloads, and import report retrieval.
//!
//! The handlers are thin: rows arrive as parsed label -> value maps from
//! whatever tabular source the client used, `assetra_core::import`
//! validates and coerces them, and the valid records are persisted here.
//! A failed row never aborts the batch; the outcome (including row
//! errors) is recorded as an import report and echoed to the caller.

use std::collections::HashMap;

use assetra_core::assets::AssetStatus;
use assetra_core::error::CoreError;
use assetra_core::import::catalog::{asset_fields, user_fields};
use assetra_core::import::template::generate_template;
use assetra_core::import::validator::{validate_rows, ImportOutcome, ImportRecord, RowError};
use assetra_core::types::DbId;
use assetra_db::models::asset::CreateAsset;
use assetra_db::models::import_report::{CreateImportReport, ImportReport};
use assetra_db::models::user::CreateUser;
use assetra_db::repositories::{
    AssetRepo, CategoryRepo, DepartmentRepo, ImportReportRepo, RoleRepo, UserRepo, VendorRepo,
};
use axum::extract::{Path, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAssetManager};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for the import endpoints: one map per spreadsheet row,
/// keyed by the template's column labels.
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub rows: Vec<HashMap<String, String>>,
}

/// Summary returned after an import run.
#[derive(Debug, Serialize)]
pub struct ImportSummary {
    pub report_id: DbId,
    pub total_rows: usize,
    /// Rows persisted as new records.
    pub imported: usize,
    /// Valid rows skipped because the target already exists.
    pub skipped: usize,
    pub error_count: usize,
    pub errors: Vec<RowError>,
}

/// Query parameters for listing import reports.
#[derive(Debug, Deserialize)]
pub struct ListImportsParams {
    pub entity_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

/// CSV response tuple used by the template endpoints.
type CsvResponse = (
    StatusCode,
    [(axum::http::header::HeaderName, &'static str); 1],
    String,
);

/// GET /api/v1/imports/assets/template
///
/// Download the asset import template (header row only) as CSV.
pub async fn asset_template(
    RequireAssetManager(_caller): RequireAssetManager,
) -> AppResult<CsvResponse> {
    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, "text/csv")],
        generate_template(asset_fields()),
    ))
}

/// GET /api/v1/imports/users/template
///
/// Download the user import template (header row only) as CSV.
pub async fn user_template(RequireAdmin(_admin): RequireAdmin) -> AppResult<CsvResponse> {
    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, "text/csv")],
        generate_template(user_fields()),
    ))
}

// ---------------------------------------------------------------------------
// Asset import
// ---------------------------------------------------------------------------

/// POST /api/v1/imports/assets
///
/// Validate the uploaded rows against the asset field mapping and persist
/// every valid record. Rows that already exist (by asset tag) are skipped.
pub async fn import_assets(
    State(state): State<AppState>,
    RequireAssetManager(caller): RequireAssetManager,
    Json(body): Json<ImportRequest>,
) -> AppResult<Json<DataResponse<ImportSummary>>> {
    if body.rows.is_empty() {
        return Err(AppError::BadRequest(
            "rows array must not be empty".to_string(),
        ));
    }

    let outcome = validate_rows(&body.rows, asset_fields());

    let mut imported = 0usize;
    let mut skipped = 0usize;

    for record in &outcome.success_rows {
        let asset_tag = text(record, "asset_tag").unwrap_or_default();
        if AssetRepo::find_by_tag(&state.pool, &asset_tag).await?.is_some() {
            skipped += 1;
            continue;
        }

        let input = build_create_asset(&state, record, asset_tag).await?;
        AssetRepo::create(&state.pool, &input).await?;
        imported += 1;
    }

    let report =
        persist_report(&state, "assets", &outcome, Some(caller.id)).await?;

    tracing::info!(
        report_id = report.id,
        total = outcome.total_rows,
        imported,
        skipped,
        errors = outcome.errors.len(),
        "Asset import completed"
    );

    Ok(Json(DataResponse {
        data: summary(report.id, &outcome, imported, skipped),
    }))
}

// ---------------------------------------------------------------------------
// User import
// ---------------------------------------------------------------------------

/// POST /api/v1/imports/users
///
/// Validate the uploaded rows against the user field mapping and create an
/// account per valid record. Imported users get the `user` role and a
/// generated initial password; rows whose employee ID already exists are
/// skipped.
pub async fn import_users(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(body): Json<ImportRequest>,
) -> AppResult<Json<DataResponse<ImportSummary>>> {
    if body.rows.is_empty() {
        return Err(AppError::BadRequest(
            "rows array must not be empty".to_string(),
        ));
    }

    let outcome = validate_rows(&body.rows, user_fields());

    let default_role = RoleRepo::find_by_name(&state.pool, "user")
        .await?
        .ok_or_else(|| AppError::InternalError("Role 'user' is not seeded".to_string()))?;

    let mut imported = 0usize;
    let mut skipped = 0usize;

    for record in &outcome.success_rows {
        let employee_id = text(record, "employee_id").unwrap_or_default();
        if UserRepo::find_by_employee_id(&state.pool, &employee_id)
            .await?
            .is_some()
        {
            skipped += 1;
            continue;
        }

        let department_id = resolve_department(&state, record).await?;

        // Imported accounts start with an unguessable password; users go
        // through the reset flow before first login.
        let initial_password = Uuid::new_v4().to_string();
        let password_hash = hash_password(&initial_password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

        let input = CreateUser {
            employee_id: Some(employee_id.clone()),
            username: employee_id.to_lowercase(),
            email: text(record, "email").unwrap_or_default(),
            password_hash,
            first_name: text(record, "first_name").unwrap_or_default(),
            last_name: text(record, "last_name").unwrap_or_default(),
            phone: text(record, "phone"),
            job_title: text(record, "job_title"),
            role_id: default_role.id,
            department_id,
            college_id: None,
            hospital_id: None,
        };
        UserRepo::create(&state.pool, &input).await?;
        imported += 1;
    }

    let report = persist_report(&state, "users", &outcome, Some(admin.id)).await?;

    tracing::info!(
        report_id = report.id,
        total = outcome.total_rows,
        imported,
        skipped,
        errors = outcome.errors.len(),
        "User import completed"
    );

    Ok(Json(DataResponse {
        data: summary(report.id, &outcome, imported, skipped),
    }))
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// GET /api/v1/imports?entity_type=assets
///
/// List import reports, most recent first.
pub async fn list_reports(
    State(state): State<AppState>,
    RequireAssetManager(_caller): RequireAssetManager,
    Query(params): Query<ListImportsParams>,
) -> AppResult<Json<DataResponse<Vec<ImportReport>>>> {
    let reports = ImportReportRepo::list(&state.pool, params.entity_type.as_deref()).await?;
    Ok(Json(DataResponse { data: reports }))
}

/// GET /api/v1/imports/{id}
pub async fn get_report(
    State(state): State<AppState>,
    RequireAssetManager(_caller): RequireAssetManager,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ImportReport>>> {
    let report = ImportReportRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ImportReport",
            id,
        }))?;
    Ok(Json(DataResponse { data: report }))
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Pull a text value out of a validated record.
fn text(record: &ImportRecord, key: &str) -> Option<String> {
    record.get(key)?.as_text().map(str::to_string)
}

/// Build a [`CreateAsset`] from a validated record, resolving the
/// category (created on first use), department, and vendor by name.
async fn build_create_asset(
    state: &AppState,
    record: &ImportRecord,
    asset_tag: String,
) -> AppResult<CreateAsset> {
    let category_name = text(record, "category").unwrap_or_default();
    let category = CategoryRepo::find_or_create(&state.pool, &category_name).await?;

    let department_id = resolve_department(state, record).await?;

    let vendor_id = match text(record, "vendor") {
        Some(name) => VendorRepo::find_by_name(&state.pool, &name)
            .await?
            .map(|v| v.id),
        None => None,
    };

    // Unknown status text degrades to the default rather than failing the row.
    let status = text(record, "status")
        .and_then(|s| AssetStatus::from_str(&s))
        .map(|s| s.as_str().to_string());

    Ok(CreateAsset {
        asset_tag,
        name: text(record, "name").unwrap_or_default(),
        category_id: category.id,
        status,
        serial_number: text(record, "serial_number"),
        model_number: text(record, "model_number"),
        manufacturer: text(record, "manufacturer"),
        purchase_date: record.get("purchase_date").and_then(|v| v.as_date()),
        purchase_price: record.get("purchase_price").and_then(|v| v.as_number()),
        warranty_expires: record.get("warranty_expires").and_then(|v| v.as_date()),
        location: text(record, "location"),
        department_id,
        vendor_id,
        assigned_to: None,
        notes: text(record, "notes"),
    })
}

/// Resolve the optional `Department` column to an existing department ID.
/// Unknown names degrade to `None`; imports never create departments.
async fn resolve_department(
    state: &AppState,
    record: &ImportRecord,
) -> AppResult<Option<DbId>> {
    match text(record, "department") {
        Some(name) => Ok(DepartmentRepo::find_by_name(&state.pool, &name)
            .await?
            .map(|d| d.id)),
        None => Ok(None),
    }
}

/// Persist the outcome as an import report row.
async fn persist_report(
    state: &AppState,
    entity_type: &str,
    outcome: &ImportOutcome,
    created_by: Option<DbId>,
) -> AppResult<ImportReport> {
    let input = CreateImportReport {
        entity_type: entity_type.to_string(),
        total_rows: outcome.total_rows as i32,
        success_count: outcome.success_rows.len() as i32,
        error_count: outcome.errors.len() as i32,
        errors: serde_json::to_value(&outcome.errors).unwrap_or_default(),
        created_by,
    };
    Ok(ImportReportRepo::create(&state.pool, &input).await?)
}

/// Build the response summary from an outcome and persistence counts.
fn summary(
    report_id: DbId,
    outcome: &ImportOutcome,
    imported: usize,
    skipped: usize,
) -> ImportSummary {
    ImportSummary {
        report_id,
        total_rows: outcome.total_rows,
        imported,
        skipped,
        error_count: outcome.errors.len(),
        errors: outcome.errors.clone(),
    }
}
