//! Organizational unit models: colleges, hospitals, departments.

use assetra_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A college row from the `colleges` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct College {
    pub id: DbId,
    pub name: String,
    pub code: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A hospital row from the `hospitals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hospital {
    pub id: DbId,
    pub name: String,
    pub code: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A department row from the `departments` table. A department belongs to
/// at most one college or hospital.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: DbId,
    pub name: String,
    pub college_id: Option<DbId>,
    pub hospital_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a college or hospital.
#[derive(Debug, Deserialize)]
pub struct CreateOrgUnit {
    pub name: String,
    pub code: Option<String>,
}

/// DTO for updating a college or hospital.
#[derive(Debug, Deserialize)]
pub struct UpdateOrgUnit {
    pub name: Option<String>,
    pub code: Option<String>,
}

/// DTO for creating a department.
#[derive(Debug, Deserialize)]
pub struct CreateDepartment {
    pub name: String,
    pub college_id: Option<DbId>,
    pub hospital_id: Option<DbId>,
}

/// DTO for updating a department. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateDepartment {
    pub name: Option<String>,
    pub college_id: Option<DbId>,
    pub hospital_id: Option<DbId>,
}
