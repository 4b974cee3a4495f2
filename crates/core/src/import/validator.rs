//! Row validator and transformer — pure logic, no database access.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::mapping::{FieldSpec, FieldValue, Transform};

/// Rows are reported 1-based with the header occupying row 1, so the
/// first data row surfaces as row 2.
pub const HEADER_ROW_OFFSET: usize = 2;

/// A validated output record: internal key -> coerced value. Absent
/// optional fields are omitted entirely (no null placeholders).
pub type ImportRecord = BTreeMap<String, FieldValue>;

/// A row-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    /// Spreadsheet row number (header = 1, first data row = 2).
    pub row: usize,
    pub message: String,
}

/// Aggregate result of validating a batch of rows. Constructed fresh per
/// call and never mutated after return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub total_rows: usize,
    pub success_rows: Vec<ImportRecord>,
    pub errors: Vec<RowError>,
}

impl ImportOutcome {
    /// True when every row validated cleanly.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate and transform raw tabular rows against a field mapping.
///
/// Each row is independent. Per field: the raw cell is trimmed and
/// empty-after-trim counts as absent. A missing required field pushes one
/// error entry per field (so a row missing two required fields yields two
/// entries) and drops the row from `success_rows`, but every remaining
/// field of that row is still evaluated. Present values pass through the
/// field's transform; transform failures degrade (money -> 0, date ->
/// invalid-date sentinel) instead of erroring. Output order matches input
/// order.
pub fn validate_rows(rows: &[HashMap<String, String>], mapping: &[FieldSpec]) -> ImportOutcome {
    let mut success_rows = Vec::new();
    let mut errors = Vec::new();

    for (index, raw) in rows.iter().enumerate() {
        let row_number = index + HEADER_ROW_OFFSET;
        let mut record = ImportRecord::new();
        let mut row_valid = true;

        for field in mapping {
            let trimmed = raw.get(field.label).map(|v| v.trim()).unwrap_or("");

            if trimmed.is_empty() {
                if field.required {
                    errors.push(RowError {
                        row: row_number,
                        message: format!("Missing required field: {}", field.label),
                    });
                    row_valid = false;
                }
                // Absent optional field: key omitted from the record.
                continue;
            }

            record.insert(field.key.to_string(), apply_transform(trimmed, field));
        }

        if row_valid {
            success_rows.push(record);
        }
    }

    ImportOutcome {
        total_rows: rows.len(),
        success_rows,
        errors,
    }
}

/// Coerce one present, non-empty cell according to its field spec.
fn apply_transform(trimmed: &str, field: &FieldSpec) -> FieldValue {
    match field.transform {
        None => FieldValue::Text(trimmed.to_string()),
        Some(Transform::Money) => FieldValue::Number(parse_money(trimmed)),
        Some(Transform::Date) => match parse_date(trimmed) {
            Some(date) => FieldValue::Date(date),
            None => FieldValue::InvalidDate(trimmed.to_string()),
        },
    }
}

/// Parse a monetary amount, tolerating a leading currency symbol and
/// thousands separators. Unparseable input yields `0`.
fn parse_money(value: &str) -> f64 {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Parse a calendar date, accepting ISO (`2024-03-15`) and US
/// (`03/15/2024`) forms. Anything else is `None`.
fn parse_date(value: &str) -> Option<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| chrono::NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
