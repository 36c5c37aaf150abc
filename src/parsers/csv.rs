use tracing::{debug, warn};

use super::ImportBatch;
use super::schema::validate_headers;
use crate::error::{LedgerError, Result};
use crate::models::{Discard, DiscardReason, FIELD_COUNT, Record};

/// Parse CSV text into records.
///
/// The first line must be the nine required headers. Each later line is split on commas
/// (quotes are not interpreted) and its values trimmed. Lines whose field count differs
/// from the header are dropped and reported in [`ImportBatch::discarded`] rather than
/// failing the import; a header mismatch fails the whole file.
pub fn parse_csv(text: &str) -> Result<ImportBatch> {
    let mut lines = text.trim().split('\n');

    let headers: Vec<&str> = lines.next().unwrap_or_default().split(',').map(str::trim).collect();
    if !validate_headers(&headers) {
        return Err(LedgerError::Schema {
            format: "CSV",
            detail: "Headers do not match the required format.",
        });
    }

    let mut batch = ImportBatch::default();

    for (idx, line) in lines.enumerate() {
        // Header is line 1
        let line_number = idx + 2;
        let values: Vec<&str> = line.split(',').collect();

        let Ok(values) = <[&str; FIELD_COUNT]>::try_from(values.as_slice()) else {
            warn!(
                line = line_number,
                found = values.len(),
                "Dropping CSV line with mismatched field count"
            );
            batch.discarded.push(Discard::new(
                line_number,
                DiscardReason::FieldCountMismatch { expected: headers.len(), found: values.len() },
            ));
            continue;
        };

        batch.records.push(Record::from_values(values.map(|v| v.trim().to_string())));
    }

    debug!(records = batch.records.len(), dropped = batch.discarded.len(), "Parsed CSV");
    Ok(batch)
}
