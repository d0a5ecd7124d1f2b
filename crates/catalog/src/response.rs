//! Decoding archive responses into records.

use serde_json::Value;

use crate::error::CatalogError;
use crate::record::CatalogRecord;

/// Parses a TAP JSON response into records.
///
/// Accepts a bare array of rows, or an object wrapping the rows in `data`
/// or `results`. Unrecognized shapes yield no rows; only malformed JSON is
/// an error.
pub fn parse_rows(json: &str) -> Result<Vec<CatalogRecord>, CatalogError> {
    let raw: Value = serde_json::from_str(json)?;
    Ok(rows_from_value(raw))
}

/// Same as [`parse_rows`] for an already-decoded payload.
pub fn rows_from_value(raw: Value) -> Vec<CatalogRecord> {
    let rows = match raw {
        Value::Array(rows) => rows,
        Value::Object(mut wrapper) => match take_rows(&mut wrapper, "data")
            .or_else(|| take_rows(&mut wrapper, "results"))
        {
            Some(rows) => rows,
            None => {
                tracing::warn!("catalog response object has no row array");
                Vec::new()
            }
        },
        other => {
            tracing::warn!(kind = value_kind(&other), "unexpected catalog response");
            Vec::new()
        }
    };

    tracing::debug!(rows = rows.len(), "decoded catalog response");
    rows.into_iter().map(CatalogRecord::from_value).collect()
}

fn take_rows(wrapper: &mut serde_json::Map<String, Value>, key: &str) -> Option<Vec<Value>> {
    match wrapper.remove(key) {
        Some(Value::Array(rows)) => Some(rows),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
