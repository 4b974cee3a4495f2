//! Repository for the `import_reports` table.

use assetra_core::types::DbId;
use sqlx::PgPool;

use crate::models::import_report::{CreateImportReport, ImportReport};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, entity_type, total_rows, success_count, error_count, errors, created_by, created_at";

/// Provides persistence for bulk import outcomes.
pub struct ImportReportRepo;

impl ImportReportRepo {
    /// Record a completed import, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateImportReport,
    ) -> Result<ImportReport, sqlx::Error> {
        let query = format!(
            "INSERT INTO import_reports (entity_type, total_rows, success_count, error_count, \
                                         errors, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ImportReport>(&query)
            .bind(&input.entity_type)
            .bind(input.total_rows)
            .bind(input.success_count)
            .bind(input.error_count)
            .bind(&input.errors)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a report by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ImportReport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM import_reports WHERE id = $1");
        sqlx::query_as::<_, ImportReport>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List reports, most recent first, optionally filtered by entity type.
    pub async fn list(
        pool: &PgPool,
        entity_type: Option<&str>,
    ) -> Result<Vec<ImportReport>, sqlx::Error> {
        match entity_type {
            Some(entity_type) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM import_reports
                     WHERE entity_type = $1
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, ImportReport>(&query)
                    .bind(entity_type)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM import_reports ORDER BY created_at DESC");
                sqlx::query_as::<_, ImportReport>(&query).fetch_all(pool).await
            }
        }
    }
}
