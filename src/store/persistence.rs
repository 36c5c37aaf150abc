//! Store persistence: load, append, delete with atomic revisioned writes

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::document::{PersistedState, STORE_VERSION, StoreDocumentRef};
use crate::error::{LedgerError, Result};
use crate::models::{Record, SessionId, Store, UploadSession};

/// Handle on the persisted session file.
///
/// Every mutation re-reads the file, applies the change, and rewrites the whole document
/// with `revision + 1`. A write is refused with [`LedgerError::Conflict`] when the on-disk
/// revision no longer matches the one the change was based on, so a concurrent writer's
/// sessions are never silently overwritten. The window between that check and the final
/// rename is not locked; two writers racing inside it still end last-writer-wins.
#[derive(Debug, Clone)]
pub struct UploadStore {
    path: PathBuf,
}

impl UploadStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted store.
    ///
    /// A missing or empty file is an empty store. A file that cannot be parsed is logged
    /// and also treated as empty; the next write replaces it.
    pub fn load(&self) -> Result<Store> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Store::default()),
            Err(e) => return Err(LedgerError::io(&self.path, e)),
        };

        if contents.trim().is_empty() {
            return Ok(Store::default());
        }

        match serde_json::from_str::<PersistedState>(&contents) {
            Ok(PersistedState::Versioned(doc)) => {
                if doc.version > STORE_VERSION {
                    return Err(LedgerError::Parse(format!(
                        "Store file {} has format version {} (this build reads up to {})",
                        self.path.display(),
                        doc.version,
                        STORE_VERSION
                    )));
                }
                Ok(Store { revision: doc.revision, sessions: doc.sessions })
            }
            Ok(PersistedState::Legacy(sessions)) => {
                debug!(sessions = sessions.len(), "Loaded legacy session array");
                Ok(Store { revision: 0, sessions })
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Store file is unreadable, starting empty");
                Ok(Store::default())
            }
        }
    }

    /// Record an import as a new session stamped with the current time
    pub fn append_session(&self, records: Vec<Record>) -> Result<Store> {
        self.append_session_at(records, Utc::now())
    }

    /// Record an import as a new session stamped with `now`
    pub fn append_session_at(&self, records: Vec<Record>, now: DateTime<Utc>) -> Result<Store> {
        // Start from what is on disk, not from a caller's possibly stale copy
        let mut store = self.load()?;
        let id = store.next_session_id(now);
        let entries = records.len();

        store.sessions.push(UploadSession { id, upload_date: now, entries: records });
        let store = self.commit(store)?;

        info!(session = id, entries, revision = store.revision, "Upload session saved");
        Ok(store)
    }

    /// Remove a whole session.
    ///
    /// `expected_revision` is the revision the caller showed the user when asking for
    /// confirmation; if the file has moved on since, the delete is refused.
    pub fn delete_session(&self, id: SessionId, expected_revision: u64) -> Result<Store> {
        let mut store = self.load()?;
        if store.revision != expected_revision {
            return Err(LedgerError::Conflict { expected: expected_revision, found: store.revision });
        }

        let before = store.sessions.len();
        store.sessions.retain(|s| s.id != id);
        if store.sessions.len() == before {
            return Err(LedgerError::user_input(format!("No upload session with id {}", id)));
        }

        let store = self.commit(store)?;
        info!(session = id, revision = store.revision, "Upload session deleted");
        Ok(store)
    }

    /// Write `store` as the next revision, if nobody else wrote since it was read
    fn commit(&self, store: Store) -> Result<Store> {
        let found = self.load()?.revision;
        if found != store.revision {
            return Err(LedgerError::Conflict { expected: store.revision, found });
        }

        let next = Store { revision: store.revision + 1, sessions: store.sessions };
        self.write_atomic(&next)?;
        Ok(next)
    }

    /// Write the full document atomically (temp file + rename)
    fn write_atomic(&self, store: &Store) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| LedgerError::io(parent, e))?;
        }

        let doc = StoreDocumentRef {
            version: STORE_VERSION,
            revision: store.revision,
            sessions: &store.sessions,
        };
        let json = serde_json::to_string_pretty(&doc)?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, json).map_err(|e| LedgerError::io(&temp_path, e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| LedgerError::io(&self.path, e))?;

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let file_name =
            self.path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        self.path.with_file_name(format!("{}.{}.tmp", file_name, std::process::id()))
    }
}
