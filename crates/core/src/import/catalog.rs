//! Concrete field mappings for the two supported import types.
//!
//! These are configuration data: the accepted spreadsheet columns, the
//! internal keys they map to, which columns are required, and which get a
//! coercion. Column order here is the template column order.

use super::mapping::{FieldSpec, Transform};

/// Mapping for equipment/asset imports. `Asset ID`, `Name`, and
/// `Category` identify the row; everything else is optional.
pub fn asset_fields() -> &'static [FieldSpec] {
    const FIELDS: &[FieldSpec] = &[
        FieldSpec::required("Asset ID", "asset_tag"),
        FieldSpec::required("Name", "name"),
        FieldSpec::required("Category", "category"),
        FieldSpec::optional("Serial Number", "serial_number"),
        FieldSpec::optional("Model", "model_number"),
        FieldSpec::optional("Manufacturer", "manufacturer"),
        FieldSpec::optional("Status", "status"),
        FieldSpec::optional("Location", "location"),
        FieldSpec::optional("Department", "department"),
        FieldSpec::optional("Vendor", "vendor"),
        FieldSpec::transformed("Purchase Date", "purchase_date", Transform::Date),
        FieldSpec::transformed("Purchase Price", "purchase_price", Transform::Money),
        FieldSpec::transformed("Warranty Expiry", "warranty_expires", Transform::Date),
        FieldSpec::optional("Notes", "notes"),
    ];
    FIELDS
}

/// Mapping for staff imports. `Employee ID`, `First Name`, `Last Name`,
/// and `Email` identify the row.
pub fn user_fields() -> &'static [FieldSpec] {
    const FIELDS: &[FieldSpec] = &[
        FieldSpec::required("Employee ID", "employee_id"),
        FieldSpec::required("First Name", "first_name"),
        FieldSpec::required("Last Name", "last_name"),
        FieldSpec::required("Email", "email"),
        FieldSpec::optional("Phone", "phone"),
        FieldSpec::optional("Job Title", "job_title"),
        FieldSpec::optional("Department", "department"),
    ];
    FIELDS
}
