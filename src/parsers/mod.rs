//! CSV and JSON import parsers for service-delivery logs
//!
//! # Error Handling Strategy
//!
//! Each file is imported atomically: a header/key mismatch ([`LedgerError::Schema`]) or a
//! malformed document ([`LedgerError::Parse`]) rejects the whole file and nothing from it
//! is committed.
//!
//! Inside an otherwise valid CSV file, lines with the wrong number of fields are skipped.
//! They are not errors, but they are not invisible either: each one is logged at `warn`
//! and returned in [`ImportBatch::discarded`] so callers can report them.
//!
//! [`LedgerError::Schema`]: crate::error::LedgerError::Schema
//! [`LedgerError::Parse`]: crate::error::LedgerError::Parse

pub mod csv;
pub mod deserializers;
pub mod import;
pub mod json;
pub mod schema;

pub use csv::parse_csv;
pub use import::{SourceFormat, collect_import_files, read_import_file, read_import_files};
pub use json::parse_json;
pub use schema::validate_headers;

use crate::models::{Discard, Record};

/// Records parsed from one file, plus the lines that were dropped along the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBatch {
    pub records: Vec<Record>,
    pub discarded: Vec<Discard>,
}
