//! Pure domain logic for the Assetra platform.
//!
//! Nothing in this crate performs I/O: no database access, no async, no
//! HTTP. The api and db crates depend on these types and functions; the
//! reverse is never true.

pub mod assets;
pub mod authz;
pub mod error;
pub mod import;
pub mod types;
