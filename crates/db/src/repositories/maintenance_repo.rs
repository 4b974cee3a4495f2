//! Repository for the `maintenance_records` table.

use assetra_core::types::DbId;
use sqlx::PgPool;

use crate::models::maintenance::{
    CreateMaintenanceRecord, MaintenanceRecord, UpdateMaintenanceRecord,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, asset_id, maintenance_type, status, description, cost, \
                        scheduled_date, completed_date, vendor_id, created_by, \
                        created_at, updated_at";

/// Provides CRUD operations for maintenance records.
pub struct MaintenanceRepo;

impl MaintenanceRepo {
    /// Insert a new maintenance record in `scheduled` status.
    pub async fn create(
        pool: &PgPool,
        asset_id: DbId,
        input: &CreateMaintenanceRecord,
        created_by: Option<DbId>,
    ) -> Result<MaintenanceRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO maintenance_records (asset_id, maintenance_type, status, description, \
                                              cost, scheduled_date, vendor_id, created_by)
             VALUES ($1, $2, 'scheduled', $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceRecord>(&query)
            .bind(asset_id)
            .bind(&input.maintenance_type)
            .bind(&input.description)
            .bind(input.cost)
            .bind(input.scheduled_date)
            .bind(input.vendor_id)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a maintenance record by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MaintenanceRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM maintenance_records WHERE id = $1");
        sqlx::query_as::<_, MaintenanceRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all maintenance records for an asset, most recent first.
    pub async fn list_for_asset(
        pool: &PgPool,
        asset_id: DbId,
    ) -> Result<Vec<MaintenanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM maintenance_records
             WHERE asset_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, MaintenanceRecord>(&query)
            .bind(asset_id)
            .fetch_all(pool)
            .await
    }

    /// Update a maintenance record. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMaintenanceRecord,
    ) -> Result<Option<MaintenanceRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE maintenance_records SET
                maintenance_type = COALESCE($2, maintenance_type),
                status = COALESCE($3, status),
                description = COALESCE($4, description),
                cost = COALESCE($5, cost),
                scheduled_date = COALESCE($6, scheduled_date),
                completed_date = COALESCE($7, completed_date),
                vendor_id = COALESCE($8, vendor_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceRecord>(&query)
            .bind(id)
            .bind(&input.maintenance_type)
            .bind(&input.status)
            .bind(&input.description)
            .bind(input.cost)
            .bind(input.scheduled_date)
            .bind(input.completed_date)
            .bind(input.vendor_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a maintenance record. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM maintenance_records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
