//! Spreadsheet template generation.

use super::mapping::FieldSpec;

/// Produce a header-only CSV template for a field mapping: one line of
/// external column labels in mapping order, comma-delimited, newline
/// terminated. Pure formatting; no validation.
pub fn generate_template(mapping: &[FieldSpec]) -> String {
    let mut header = mapping
        .iter()
        .map(|f| f.label)
        .collect::<Vec<_>>()
        .join(",");
    header.push('\n');
    header
}
