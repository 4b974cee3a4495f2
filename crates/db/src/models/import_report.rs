//! Import report entity model and DTOs.

use assetra_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An import report row from the `import_reports` table. One row per
/// completed bulk import, recording the aggregate outcome.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ImportReport {
    pub id: DbId,
    /// What was imported: `"assets"` or `"users"`.
    pub entity_type: String,
    pub total_rows: i32,
    pub success_count: i32,
    pub error_count: i32,
    /// Serialized row errors: `[{ "row": 2, "message": "..." }, ...]`.
    pub errors: serde_json::Value,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for recording a completed import.
pub struct CreateImportReport {
    pub entity_type: String,
    pub total_rows: i32,
    pub success_count: i32,
    pub error_count: i32,
    pub errors: serde_json::Value,
    pub created_by: Option<DbId>,
}
