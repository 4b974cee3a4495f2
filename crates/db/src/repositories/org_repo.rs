//! Repositories for the organizational unit tables: `colleges`,
//! `hospitals`, and `departments`.

use assetra_core::types::DbId;
use sqlx::PgPool;

use crate::models::org::{
    College, CreateDepartment, CreateOrgUnit, Department, Hospital, UpdateDepartment,
    UpdateOrgUnit,
};

/// Column list for `colleges` and `hospitals` (identical shapes).
const ORG_COLUMNS: &str = "id, name, code, created_at, updated_at";

/// Column list for `departments`.
const DEPT_COLUMNS: &str = "id, name, college_id, hospital_id, created_at, updated_at";

/// Provides CRUD operations for colleges.
pub struct CollegeRepo;

impl CollegeRepo {
    pub async fn create(pool: &PgPool, input: &CreateOrgUnit) -> Result<College, sqlx::Error> {
        let query = format!(
            "INSERT INTO colleges (name, code) VALUES ($1, $2) RETURNING {ORG_COLUMNS}"
        );
        sqlx::query_as::<_, College>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<College>, sqlx::Error> {
        let query = format!("SELECT {ORG_COLUMNS} FROM colleges WHERE id = $1");
        sqlx::query_as::<_, College>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<College>, sqlx::Error> {
        let query = format!("SELECT {ORG_COLUMNS} FROM colleges ORDER BY name");
        sqlx::query_as::<_, College>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOrgUnit,
    ) -> Result<Option<College>, sqlx::Error> {
        let query = format!(
            "UPDATE colleges SET
                name = COALESCE($2, name),
                code = COALESCE($3, code),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {ORG_COLUMNS}"
        );
        sqlx::query_as::<_, College>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.code)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM colleges WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Provides CRUD operations for hospitals.
pub struct HospitalRepo;

impl HospitalRepo {
    pub async fn create(pool: &PgPool, input: &CreateOrgUnit) -> Result<Hospital, sqlx::Error> {
        let query = format!(
            "INSERT INTO hospitals (name, code) VALUES ($1, $2) RETURNING {ORG_COLUMNS}"
        );
        sqlx::query_as::<_, Hospital>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Hospital>, sqlx::Error> {
        let query = format!("SELECT {ORG_COLUMNS} FROM hospitals WHERE id = $1");
        sqlx::query_as::<_, Hospital>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Hospital>, sqlx::Error> {
        let query = format!("SELECT {ORG_COLUMNS} FROM hospitals ORDER BY name");
        sqlx::query_as::<_, Hospital>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOrgUnit,
    ) -> Result<Option<Hospital>, sqlx::Error> {
        let query = format!(
            "UPDATE hospitals SET
                name = COALESCE($2, name),
                code = COALESCE($3, code),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {ORG_COLUMNS}"
        );
        sqlx::query_as::<_, Hospital>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.code)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hospitals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Provides CRUD operations for departments.
pub struct DepartmentRepo;

impl DepartmentRepo {
    pub async fn create(pool: &PgPool, input: &CreateDepartment) -> Result<Department, sqlx::Error> {
        let query = format!(
            "INSERT INTO departments (name, college_id, hospital_id)
             VALUES ($1, $2, $3)
             RETURNING {DEPT_COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(&input.name)
            .bind(input.college_id)
            .bind(input.hospital_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {DEPT_COLUMNS} FROM departments WHERE id = $1");
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a department by name (case-insensitive), used by the import
    /// pipeline to resolve the `Department` column.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {DEPT_COLUMNS} FROM departments WHERE LOWER(name) = LOWER($1)");
        sqlx::query_as::<_, Department>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!("SELECT {DEPT_COLUMNS} FROM departments ORDER BY name");
        sqlx::query_as::<_, Department>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDepartment,
    ) -> Result<Option<Department>, sqlx::Error> {
        let query = format!(
            "UPDATE departments SET
                name = COALESCE($2, name),
                college_id = COALESCE($3, college_id),
                hospital_id = COALESCE($4, hospital_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {DEPT_COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.college_id)
            .bind(input.hospital_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
