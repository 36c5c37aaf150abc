//! Delivery Ledger - Import, filter, page through and export delivery records
//!
//! Records describe deliveries handled for a client through a vendor. They arrive as CSV
//! or JSON files with nine fixed fields; each imported file becomes an upload session in a
//! local JSON store. The library supports:
//!
//! - Validating and parsing CSV / JSON imports
//! - Persisting upload sessions with atomic, revision-checked writes
//! - Filtering all sessions by an inclusive date range
//! - Paginating the filtered result
//! - Exporting a page or the whole result as JSON or CSV
//!
//! # Example
//!
//! ```no_run
//! use delivery_ledger::{AppState, UploadStore, parse_date_input};
//! use std::path::PathBuf;
//!
//! let store = UploadStore::new("/tmp/ledger/sessions.json");
//! let mut state = AppState::open(store, 10)?;
//! state.import_files(&[PathBuf::from("deliveries.csv")]);
//!
//! let from = parse_date_input("2024-01-01")?;
//! let to = parse_date_input("2024-01-31")?;
//! let view = state.apply_filter(Some(from), Some(to))?;
//! println!("{} records on {} pages", view.len(), view.total_pages());
//! # Ok::<(), delivery_ledger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod filters;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod state;
pub mod store;
pub mod tui;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use error::{LedgerError, Result};
pub use export::{ExportFormat, ExportScope, to_csv, to_json};
pub use filters::{DateRange, filter_sessions, parse_date_input};
pub use models::{Record, UploadSession};
pub use parsers::{parse_csv, parse_json};
pub use state::AppState;
pub use store::UploadStore;
pub use utils::paths::format_path_with_tilde;
pub use view::FilteredView;
