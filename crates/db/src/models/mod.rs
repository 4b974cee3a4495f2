//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod asset;
pub mod category;
pub mod import_report;
pub mod maintenance;
pub mod org;
pub mod role;
pub mod session;
pub mod user;
pub mod vendor;
