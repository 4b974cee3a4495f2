//! Repository for the `vendors` table.

use assetra_core::types::DbId;
use sqlx::PgPool;

use crate::models::vendor::{CreateVendor, UpdateVendor, Vendor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, contact_name, email, phone, address, created_at, updated_at";

/// Provides CRUD operations for vendors.
pub struct VendorRepo;

impl VendorRepo {
    /// Insert a new vendor, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVendor) -> Result<Vendor, sqlx::Error> {
        let query = format!(
            "INSERT INTO vendors (name, contact_name, email, phone, address)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vendor>(&query)
            .bind(&input.name)
            .bind(&input.contact_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    /// Find a vendor by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vendor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vendors WHERE id = $1");
        sqlx::query_as::<_, Vendor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a vendor by name (case-insensitive), used by the import
    /// pipeline to resolve the `Vendor` column.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Vendor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vendors WHERE LOWER(name) = LOWER($1)");
        sqlx::query_as::<_, Vendor>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all vendors ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Vendor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vendors ORDER BY name");
        sqlx::query_as::<_, Vendor>(&query).fetch_all(pool).await
    }

    /// Update a vendor. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVendor,
    ) -> Result<Option<Vendor>, sqlx::Error> {
        let query = format!(
            "UPDATE vendors SET
                name = COALESCE($2, name),
                contact_name = COALESCE($3, contact_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                address = COALESCE($6, address),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vendor>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.contact_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }

    /// Delete a vendor. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vendors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
