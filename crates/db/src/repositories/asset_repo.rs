//! Repository for the `assets` table.
//!
//! Listing supports the dynamic filters of the asset register views; the
//! `department_id` filter doubles as the row-level scope applied for
//! callers outside the asset-management roles.

use assetra_core::types::DbId;
use sqlx::PgPool;

use crate::models::asset::{Asset, AssetSearchParams, AssetWithNames, CreateAsset, UpdateAsset};

/// Column list for `assets` queries.
const COLUMNS: &str = "id, asset_tag, name, category_id, status, serial_number, model_number, \
                        manufacturer, purchase_date, purchase_price, warranty_expires, location, \
                        department_id, vendor_id, assigned_to, notes, created_at, updated_at";

/// Default page size for asset listing.
const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for asset listing.
const MAX_LIMIT: i64 = 200;

/// Provides CRUD operations for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset, returning the created row. The status defaults
    /// to `in_service` when not supplied.
    pub async fn create(pool: &PgPool, input: &CreateAsset) -> Result<Asset, sqlx::Error> {
        let status = input.status.as_deref().unwrap_or("in_service");
        let query = format!(
            "INSERT INTO assets (asset_tag, name, category_id, status, serial_number, \
                                 model_number, manufacturer, purchase_date, purchase_price, \
                                 warranty_expires, location, department_id, vendor_id, \
                                 assigned_to, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&input.asset_tag)
            .bind(&input.name)
            .bind(input.category_id)
            .bind(status)
            .bind(&input.serial_number)
            .bind(&input.model_number)
            .bind(&input.manufacturer)
            .bind(input.purchase_date)
            .bind(input.purchase_price)
            .bind(input.warranty_expires)
            .bind(&input.location)
            .bind(input.department_id)
            .bind(input.vendor_id)
            .bind(input.assigned_to)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an asset by its organization-wide tag.
    pub async fn find_by_tag(pool: &PgPool, asset_tag: &str) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE asset_tag = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(asset_tag)
            .fetch_optional(pool)
            .await
    }

    /// Search assets with optional filters and pagination, joining lookup
    /// names for list views.
    pub async fn search(
        pool: &PgPool,
        params: &AssetSearchParams,
    ) -> Result<Vec<AssetWithNames>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = params.offset.unwrap_or(0);

        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if params.q.is_some() {
            conditions.push(format!(
                "(a.name ILIKE ${bind_idx} OR a.asset_tag ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }
        if params.category_id.is_some() {
            conditions.push(format!("a.category_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.status.is_some() {
            conditions.push(format!("a.status = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.department_id.is_some() {
            conditions.push(format!("a.department_id = ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT \
                a.id, a.asset_tag, a.name, a.category_id, c.name AS category_name, \
                a.status, a.serial_number, a.location, \
                a.department_id, d.name AS department_name, \
                a.vendor_id, v.name AS vendor_name, \
                a.purchase_date, a.purchase_price, a.created_at, a.updated_at \
             FROM assets a \
             JOIN asset_categories c ON c.id = a.category_id \
             LEFT JOIN departments d ON d.id = a.department_id \
             LEFT JOIN vendors v ON v.id = a.vendor_id \
             {where_clause} \
             ORDER BY a.asset_tag \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, AssetWithNames>(&query);
        if let Some(text) = &params.q {
            q = q.bind(format!("%{text}%"));
        }
        if let Some(category_id) = params.category_id {
            q = q.bind(category_id);
        }
        if let Some(status) = &params.status {
            q = q.bind(status);
        }
        if let Some(department_id) = params.department_id {
            q = q.bind(department_id);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Update an asset. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAsset,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET
                name = COALESCE($2, name),
                category_id = COALESCE($3, category_id),
                status = COALESCE($4, status),
                serial_number = COALESCE($5, serial_number),
                model_number = COALESCE($6, model_number),
                manufacturer = COALESCE($7, manufacturer),
                purchase_date = COALESCE($8, purchase_date),
                purchase_price = COALESCE($9, purchase_price),
                warranty_expires = COALESCE($10, warranty_expires),
                location = COALESCE($11, location),
                department_id = COALESCE($12, department_id),
                vendor_id = COALESCE($13, vendor_id),
                assigned_to = COALESCE($14, assigned_to),
                notes = COALESCE($15, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.category_id)
            .bind(&input.status)
            .bind(&input.serial_number)
            .bind(&input.model_number)
            .bind(&input.manufacturer)
            .bind(input.purchase_date)
            .bind(input.purchase_price)
            .bind(input.warranty_expires)
            .bind(&input.location)
            .bind(input.department_id)
            .bind(input.vendor_id)
            .bind(input.assigned_to)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an asset. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
