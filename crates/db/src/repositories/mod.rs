//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod asset_repo;
pub mod category_repo;
pub mod import_report_repo;
pub mod maintenance_repo;
pub mod org_repo;
pub mod role_repo;
pub mod session_repo;
pub mod user_repo;
pub mod vendor_repo;

pub use asset_repo::AssetRepo;
pub use category_repo::CategoryRepo;
pub use import_report_repo::ImportReportRepo;
pub use maintenance_repo::MaintenanceRepo;
pub use org_repo::{CollegeRepo, DepartmentRepo, HospitalRepo};
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
pub use vendor_repo::VendorRepo;
