//! Field mapping and value types for bulk imports.

use serde::{Deserialize, Serialize};

/// Per-field coercion applied to a present, non-empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    /// Parse a calendar date. An unparseable value degrades to
    /// [`FieldValue::InvalidDate`] rather than an error.
    Date,
    /// Parse a decimal amount. An unparseable value degrades to `0`.
    Money,
}

/// One column of an import mapping: the external spreadsheet label, the
/// internal record key it maps to, whether the row fails without it, and
/// an optional coercion.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    /// Column header as it appears in the uploaded sheet.
    pub label: &'static str,
    /// Key used in the validated output record.
    pub key: &'static str,
    /// A missing required field invalidates the whole row.
    pub required: bool,
    /// Coercion applied when the cell is present; `None` passes the
    /// trimmed text through unchanged.
    pub transform: Option<Transform>,
}

impl FieldSpec {
    /// A plain required text column.
    pub const fn required(label: &'static str, key: &'static str) -> Self {
        Self {
            label,
            key,
            required: true,
            transform: None,
        }
    }

    /// A plain optional text column.
    pub const fn optional(label: &'static str, key: &'static str) -> Self {
        Self {
            label,
            key,
            required: false,
            transform: None,
        }
    }

    /// An optional column with a coercion.
    pub const fn transformed(label: &'static str, key: &'static str, transform: Transform) -> Self {
        Self {
            label,
            key,
            required: false,
            transform: Some(transform),
        }
    }
}

/// A validated, type-coerced cell value.
///
/// `InvalidDate` is the sentinel for a non-empty date cell that failed to
/// parse: the row still survives, and the persistence layer maps the
/// sentinel to SQL NULL. The raw trimmed input is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(chrono::NaiveDate),
    InvalidDate(String),
}

impl FieldValue {
    /// The text content, if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric content, if this is a `Number` value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The parsed date, if this is a valid `Date` value. `InvalidDate`
    /// yields `None`, which is how it degrades to NULL on persistence.
    pub fn as_date(&self) -> Option<chrono::NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }
}
