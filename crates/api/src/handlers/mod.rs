pub mod admin;
pub mod assets;
pub mod auth;
pub mod categories;
pub mod departments;
pub mod imports;
pub mod maintenance;
pub mod org;
pub mod vendors;
