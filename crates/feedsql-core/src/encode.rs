//! SQL literal rendering for field values.
//!
//! There is no parameter binding anywhere in the engine, so every value that
//! reaches a statement goes through here.

use crate::{
    error::ShapeError,
    traits::Column,
    value::{FieldValue, Scalar},
};

/// Render a plain scalar.
///
/// Text is single-quoted, booleans become `TRUE` / `FALSE`, numbers keep
/// their default textual form. Characters render as their numeric code
/// point, not as quoted text; downstream readers rely on that.
#[must_use]
pub fn encode_scalar(value: &Scalar) -> String {
    match value {
        Scalar::Text(text) => quote_text(text),
        Scalar::Bool(true) => "TRUE".to_string(),
        Scalar::Bool(false) => "FALSE".to_string(),
        Scalar::Int(v) => v.to_string(),
        Scalar::Uint(v) => v.to_string(),
        Scalar::Float32(v) => v.to_string(),
        Scalar::Float(v) => v.to_string(),
        Scalar::Char(c) => u32::from(*c).to_string(),
    }
}

/// Render a field value, applying the wrapper flag rules.
pub fn encode_value(value: &FieldValue) -> Result<String, ShapeError> {
    let encoded = match value {
        FieldValue::Scalar(scalar) => encode_scalar(scalar),

        FieldValue::DeferredDefault { default: true, .. } => "DEFAULT".to_string(),
        FieldValue::DeferredDefault { value, .. } => encode_scalar(value),

        FieldValue::Nullable { null: true, .. } => "NULL".to_string(),
        FieldValue::Nullable { value, .. } => encode_scalar(value),

        FieldValue::Timestamp { now: true, .. } => "NOW()".to_string(),
        FieldValue::Timestamp { unix, .. } => format!("TO_TIMESTAMP({unix})"),

        FieldValue::Nested(nested) => return Err(ShapeError::NestedValue { nested }),
    };

    Ok(encoded)
}

/// Render any column value.
pub fn encode_column<C: Column>(column: &C) -> Result<String, ShapeError> {
    encode_value(&column.to_value())
}

// embedded quotes are doubled so the literal stays well-formed
fn quote_text(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}
