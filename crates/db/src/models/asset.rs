//! Asset entity model and DTOs.

use assetra_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An asset row from the `assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    /// Organization-wide asset tag (e.g. "EQ-2024-0117"). Unique.
    pub asset_tag: String,
    pub name: String,
    pub category_id: DbId,
    /// One of the `assetra_core::assets::AssetStatus` names.
    pub status: String,
    pub serial_number: Option<String>,
    pub model_number: Option<String>,
    pub manufacturer: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,
    pub warranty_expires: Option<NaiveDate>,
    pub location: Option<String>,
    pub department_id: Option<DbId>,
    pub vendor_id: Option<DbId>,
    pub assigned_to: Option<DbId>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Asset enriched with resolved lookup names for list views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssetWithNames {
    pub id: DbId,
    pub asset_tag: String,
    pub name: String,
    pub category_id: DbId,
    pub category_name: String,
    pub status: String,
    pub serial_number: Option<String>,
    pub location: Option<String>,
    pub department_id: Option<DbId>,
    pub department_name: Option<String>,
    pub vendor_id: Option<DbId>,
    pub vendor_name: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new asset.
#[derive(Debug, Deserialize)]
pub struct CreateAsset {
    pub asset_tag: String,
    pub name: String,
    pub category_id: DbId,
    pub status: Option<String>,
    pub serial_number: Option<String>,
    pub model_number: Option<String>,
    pub manufacturer: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,
    pub warranty_expires: Option<NaiveDate>,
    pub location: Option<String>,
    pub department_id: Option<DbId>,
    pub vendor_id: Option<DbId>,
    pub assigned_to: Option<DbId>,
    pub notes: Option<String>,
}

/// DTO for updating an existing asset. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateAsset {
    pub name: Option<String>,
    pub category_id: Option<DbId>,
    pub status: Option<String>,
    pub serial_number: Option<String>,
    pub model_number: Option<String>,
    pub manufacturer: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,
    pub warranty_expires: Option<NaiveDate>,
    pub location: Option<String>,
    pub department_id: Option<DbId>,
    pub vendor_id: Option<DbId>,
    pub assigned_to: Option<DbId>,
    pub notes: Option<String>,
}

/// Filters for asset listing. `department_id` doubles as the row-level
/// scope for callers outside the asset-management tiers.
#[derive(Debug, Default, Deserialize)]
pub struct AssetSearchParams {
    pub q: Option<String>,
    pub category_id: Option<DbId>,
    pub status: Option<String>,
    pub department_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
