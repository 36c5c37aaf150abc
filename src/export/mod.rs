//! Export of filtered records to `filtered_data.json` / `filtered_data.csv`
//!
//! Which records get exported is governed by [`ExportScope`]: the page currently shown
//! (the default) or the whole filtered result.

pub mod csv;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

pub use self::csv::to_csv;
use crate::error::{LedgerError, Result};
use crate::models::Record;
use crate::view::FilteredView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Json => "filtered_data.json",
            Self::Csv => "filtered_data.csv",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
        }
    }

    /// Serialize `records` in this format
    pub fn render(self, records: &[Record]) -> Result<String> {
        match self {
            Self::Json => to_json(records),
            Self::Csv => Ok(to_csv(records)),
        }
    }
}

/// Which part of the filtered view an export covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportScope {
    /// Only the rows on the current page
    #[default]
    #[value(name = "page")]
    CurrentPage,
    /// Every record that matched the filter
    #[value(name = "all")]
    AllFiltered,
}

impl ExportScope {
    /// Pick the records this scope covers
    pub fn select(self, view: &FilteredView) -> &[Record] {
        match self {
            Self::CurrentPage => view.page_records(),
            Self::AllFiltered => view.records(),
        }
    }
}

impl fmt::Display for ExportScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentPage => write!(f, "page"),
            Self::AllFiltered => write!(f, "all"),
        }
    }
}

/// Pretty-printed JSON array with keys in field order
pub fn to_json(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Render `records` and write them to `dir`, returning the written path
pub fn write_export(dir: &Path, format: ExportFormat, records: &[Record]) -> Result<PathBuf> {
    if records.is_empty() {
        return Err(LedgerError::user_input("No data to export."));
    }

    let content = format.render(records)?;
    fs::create_dir_all(dir).map_err(|e| LedgerError::io(dir, e))?;

    let path = dir.join(format.file_name());
    fs::write(&path, content).map_err(|e| LedgerError::io(&path, e))?;

    info!(
        path = %path.display(),
        mime = format.mime_type(),
        records = records.len(),
        "Exported records"
    );
    Ok(path)
}
