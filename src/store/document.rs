//! On-disk shape of the persisted store

use serde::{Deserialize, Serialize};

use crate::models::UploadSession;

/// Store format version for refusing files written by newer releases
pub const STORE_VERSION: u32 = 1;

/// Top-level persisted document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreDocument {
    pub version: u32,
    /// Incremented on every successful write; used for optimistic concurrency
    pub revision: u64,
    pub sessions: Vec<UploadSession>,
}

/// Borrowing twin of [`StoreDocument`] so writes don't clone every session
#[derive(Debug, Serialize)]
pub(crate) struct StoreDocumentRef<'a> {
    pub version: u32,
    pub revision: u64,
    pub sessions: &'a [UploadSession],
}

/// Everything `load` knows how to read
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PersistedState {
    Versioned(StoreDocument),
    /// Bare session array with no version or revision (read as revision 0)
    Legacy(Vec<UploadSession>),
}
