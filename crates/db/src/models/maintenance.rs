//! Maintenance record entity model and DTOs.

use assetra_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A maintenance record row from the `maintenance_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MaintenanceRecord {
    pub id: DbId,
    pub asset_id: DbId,
    /// Free-form kind (e.g. "preventive", "repair", "calibration").
    pub maintenance_type: String,
    /// One of the `assetra_core::assets::MaintenanceStatus` names.
    pub status: String,
    pub description: String,
    pub cost: Option<f64>,
    pub scheduled_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub vendor_id: Option<DbId>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a maintenance record.
#[derive(Debug, Deserialize)]
pub struct CreateMaintenanceRecord {
    pub maintenance_type: String,
    pub description: String,
    pub cost: Option<f64>,
    pub scheduled_date: Option<NaiveDate>,
    pub vendor_id: Option<DbId>,
}

/// DTO for updating a maintenance record. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateMaintenanceRecord {
    pub maintenance_type: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub cost: Option<f64>,
    pub scheduled_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub vendor_id: Option<DbId>,
}
