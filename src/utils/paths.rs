use std::borrow::Cow;
use std::env;
use std::fs::File;
use std::path::Path;

use crate::error::{LedgerError, Result};

// Maximum size for a single import file: 10MB
pub const MAX_IMPORT_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Validates that an import file's size is within acceptable limits (10MB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and subsequent file operations.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let file_size = file.metadata().map_err(|e| LedgerError::io(path, e))?.len();

    if file_size > MAX_IMPORT_FILE_BYTES {
        return Err(LedgerError::FileTooLarge {
            path: path.to_path_buf(),
            size: file_size,
            max: MAX_IMPORT_FILE_BYTES,
        });
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use delivery_ledger::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/.local/share/delivery-ledger/sessions.json");
/// // Returns "~/.local/share/delivery-ledger/sessions.json" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    // Avoid double allocation when converting Cow to String
    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
