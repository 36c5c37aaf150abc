use crate::models::{FIELD_NAMES, Record};

/// Serialize records as CSV text.
///
/// One header line with the nine field names, then one line per record, joined with `\n`
/// and without a trailing newline. Session bookkeeping (id, upload date) is not part of a
/// [`Record`], so it can never leak into the output. Empty input produces an empty string.
pub fn to_csv(records: &[Record]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(FIELD_NAMES.join(","));
    lines.extend(records.iter().map(|r| r.values().map(escape_value).join(",")));

    lines.join("\n")
}

/// Double embedded quotes; wrap in quotes only when the value contains a comma or newline
fn escape_value(value: &str) -> String {
    let escaped = value.replace('"', "\"\"");
    if escaped.contains(',') || escaped.contains('\n') {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}
