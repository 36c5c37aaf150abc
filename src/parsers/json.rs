use serde_json::{Map, Value};
use tracing::debug;

use super::ImportBatch;
use super::schema::validate_headers;
use crate::error::{LedgerError, Result};
use crate::models::Record;

const INVALID_SYNTAX: &str = "Error parsing JSON file. Please ensure it is a valid JSON file.";
const INVALID_SHAPE: &str = "Invalid JSON format. Please provide an array of objects.";

/// Parse JSON text into records.
///
/// The root must be a non-empty array of objects. Only the first object's key order is
/// checked against the required headers; every element must still carry the nine fields
/// as strings, and unknown extra keys are ignored. Keys match after trimming, as headers do.
pub fn parse_json(text: &str) -> Result<ImportBatch> {
    let root: Value = serde_json::from_str(text).map_err(|e| {
        debug!(error = %e, "JSON syntax error");
        LedgerError::Parse(INVALID_SYNTAX.to_string())
    })?;

    let Value::Array(items) = root else {
        return Err(LedgerError::Parse(INVALID_SHAPE.to_string()));
    };
    let Some(Value::Object(first)) = items.first() else {
        return Err(LedgerError::Parse(INVALID_SHAPE.to_string()));
    };

    let keys: Vec<&str> = first.keys().map(String::as_str).collect();
    if !validate_headers(&keys) {
        return Err(LedgerError::Schema {
            format: "JSON",
            detail: "Object keys do not match the required headers.",
        });
    }

    let records = items
        .into_iter()
        .map(|item| serde_json::from_value::<Record>(trim_keys(item)))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| LedgerError::Parse(format!("Invalid JSON format. {}", e)))?;

    debug!(records = records.len(), "Parsed JSON");
    Ok(ImportBatch { records, discarded: Vec::new() })
}

fn trim_keys(item: Value) -> Value {
    match item {
        Value::Object(map) => Value::Object(
            map.into_iter().map(|(k, v)| (k.trim().to_string(), v)).collect::<Map<_, _>>(),
        ),
        other => other,
    }
}
