//! Error taxonomy for the import → store → filter → export pipeline.
//!
//! Library code returns [`LedgerError`]; the CLI and TUI layers wrap it with `anyhow`
//! context before reporting it to the user.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    /// Header row or first-object key set does not match the fixed field list
    #[error("Invalid {format} format. {detail}")]
    Schema { format: &'static str, detail: &'static str },

    /// Malformed JSON, wrong root shape, or values that are not strings
    #[error("{0}")]
    Parse(String),

    /// Missing or invalid user-supplied input (dates, selections, ids, pages)
    #[error("{0}")]
    UserInput(String),

    #[error("Unsupported file type: {}. Please upload a .csv or .json file.", .0.display())]
    UnsupportedFileType(PathBuf),

    #[error("File too large: {} ({size} bytes, max {max} bytes)", .path.display())]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    /// Persisted state changed since it was read
    #[error(
        "Store was modified by another process (expected revision {expected}, found {found}); reload and retry"
    )]
    Conflict { expected: u64, found: u64 },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LedgerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn user_input(message: impl Into<String>) -> Self {
        Self::UserInput(message.into())
    }

    /// True for errors caused by what the user asked for rather than by the data or disk
    pub fn is_user_input(&self) -> bool {
        matches!(self, Self::UserInput(_))
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_message_matches_format() {
        let err = LedgerError::Schema {
            format: "CSV",
            detail: "Headers do not match the required format.",
        };
        assert_eq!(err.to_string(), "Invalid CSV format. Headers do not match the required format.");
    }

    #[test]
    fn test_unsupported_file_type_message() {
        let err = LedgerError::UnsupportedFileType(PathBuf::from("data.xlsx"));
        assert!(err.to_string().contains("Please upload a .csv or .json file."));
    }

    #[test]
    fn test_is_user_input() {
        assert!(LedgerError::user_input("No data to export.").is_user_input());
        assert!(!LedgerError::Parse("bad".to_string()).is_user_input());
    }
}
