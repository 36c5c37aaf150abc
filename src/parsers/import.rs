use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use super::ImportBatch;
use super::csv::parse_csv;
use super::json::parse_json;
use crate::error::{LedgerError, Result};
use crate::utils::validate_file_size;

/// Import file formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Json,
}

impl SourceFormat {
    /// Detect the format from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase());
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(LedgerError::UnsupportedFileType(path.to_path_buf())),
        }
    }

    /// Parse already-read text in this format
    pub fn parse(self, text: &str) -> Result<ImportBatch> {
        match self {
            Self::Csv => parse_csv(text),
            Self::Json => parse_json(text),
        }
    }
}

/// Read and parse one import file
pub fn read_import_file(path: &Path) -> Result<ImportBatch> {
    let format = SourceFormat::from_path(path)?;

    // Open file and validate size before reading it whole
    let mut file = File::open(path).map_err(|e| LedgerError::io(path, e))?;
    validate_file_size(&file, path)?;

    let mut text = String::new();
    file.read_to_string(&mut text).map_err(|e| LedgerError::io(path, e))?;

    // Spreadsheet exports often start with a UTF-8 byte order mark
    format.parse(text.strip_prefix('\u{feff}').unwrap_or(&text))
}

/// Read and parse several files in parallel.
///
/// Parsing has no shared state, so files are processed concurrently; results come back in
/// the same order as `paths` so callers can commit them deterministically.
pub fn read_import_files(paths: &[PathBuf]) -> Vec<Result<ImportBatch>> {
    paths.par_iter().map(|path| read_import_file(path)).collect()
}

/// Expand the user's selection into a list of files.
///
/// Files are kept as given (their type is checked later, per file). Directories contribute
/// their `.csv` and `.json` files, sorted by path; only the top level unless `recursive`.
pub fn collect_import_files(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if !input.is_dir() {
            files.push(input.clone());
            continue;
        }

        let max_depth = if recursive { usize::MAX } else { 1 };
        let mut found: Vec<PathBuf> = WalkDir::new(input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| SourceFormat::from_path(p).is_ok())
            .collect();
        found.sort();

        if found.is_empty() {
            tracing::warn!(dir = %input.display(), "No .csv or .json files found in directory");
        }
        files.extend(found);
    }

    if files.is_empty() {
        return Err(LedgerError::user_input("Please select a file first."));
    }

    Ok(files)
}
