//! Application state threaded through every pipeline step.
//!
//! [`AppState`] owns the store handle, the sessions as last read or written, and the
//! active [`FilteredView`]. Mutations go through the store first and then refresh the
//! in-memory copy, so the view is always derived from what is persisted.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::warn;

use crate::error::{LedgerError, Result};
use crate::export::{ExportFormat, ExportScope, write_export};
use crate::filters::DateRange;
use crate::models::{Discard, SessionId, Store, UploadSession};
use crate::parsers::{ImportBatch, read_import_files};
use crate::store::UploadStore;
use crate::view::FilteredView;

/// What a successful file import committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedSession {
    pub session_id: SessionId,
    pub records: usize,
    /// CSV lines skipped for having the wrong number of fields
    pub discarded: Vec<Discard>,
}

/// Outcome of importing one file out of a multi-file selection
#[derive(Debug)]
pub struct FileImport {
    pub path: PathBuf,
    pub outcome: Result<ImportedSession>,
}

pub struct AppState {
    store: UploadStore,
    snapshot: Store,
    page_size: usize,
    view: Option<FilteredView>,
}

impl AppState {
    /// Load persisted sessions; no filter is active yet
    pub fn open(store: UploadStore, page_size: usize) -> Result<Self> {
        let snapshot = store.load()?;
        Ok(Self { store, snapshot, page_size, view: None })
    }

    pub fn store_path(&self) -> &Path {
        self.store.path()
    }

    pub fn snapshot(&self) -> &Store {
        &self.snapshot
    }

    pub fn sessions(&self) -> &[UploadSession] {
        &self.snapshot.sessions
    }

    /// Commit one parsed file as a new session
    pub fn import_batch(&mut self, batch: ImportBatch) -> Result<ImportedSession> {
        let records = batch.records.len();
        let store = self.store.append_session(batch.records)?;
        let session_id = store.sessions.last().map(|s| s.id).unwrap_or_default();

        self.replace_snapshot(store);
        Ok(ImportedSession { session_id, records, discarded: batch.discarded })
    }

    /// Import several files.
    ///
    /// Files are parsed in parallel, then each successful one is committed as its own
    /// session in the order given. A failing file does not stop the others.
    pub fn import_files(&mut self, paths: &[PathBuf]) -> Vec<FileImport> {
        let parsed = read_import_files(paths);

        paths
            .iter()
            .zip(parsed)
            .map(|(path, batch)| {
                let outcome = batch.and_then(|batch| self.import_batch(batch));
                if let Err(e) = &outcome {
                    warn!(path = %path.display(), error = %e, "Import failed");
                }
                FileImport { path: path.clone(), outcome }
            })
            .collect()
    }

    /// Delete a session, provided the store hasn't changed since it was loaded here
    pub fn delete_session(&mut self, id: SessionId) -> Result<()> {
        let store = self.store.delete_session(id, self.snapshot.revision)?;
        self.replace_snapshot(store);
        Ok(())
    }

    /// Activate a date filter and show its first page
    pub fn apply_filter(
        &mut self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<&FilteredView> {
        if self.snapshot.is_empty() {
            return Err(LedgerError::user_input("No data has been uploaded yet."));
        }
        let range = DateRange::from_inputs(from, to)?;

        let view = FilteredView::build(&self.snapshot.sessions, range, self.page_size);
        Ok(self.view.insert(view))
    }

    pub fn view(&self) -> Option<&FilteredView> {
        self.view.as_ref()
    }

    /// Hand the active view to a consumer that outlives the state (the terminal browser)
    pub fn into_view(self) -> Option<FilteredView> {
        self.view
    }

    pub fn select_page(&mut self, page_number: usize) -> Result<()> {
        match self.view.as_mut() {
            Some(view) => view.select_page(page_number),
            None => Err(LedgerError::user_input("Apply a date filter before choosing a page.")),
        }
    }

    /// Write the records covered by `scope` to `dir`
    pub fn export(&self, format: ExportFormat, scope: ExportScope, dir: &Path) -> Result<PathBuf> {
        let records = self.view.as_ref().map(|view| scope.select(view)).unwrap_or_default();
        write_export(dir, format, records)
    }

    fn replace_snapshot(&mut self, store: Store) {
        self.snapshot = store;
        if let Some(view) = self.view.as_mut() {
            view.refresh(&self.snapshot.sessions);
        }
    }
}
