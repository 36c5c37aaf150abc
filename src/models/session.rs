use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::Record;

/// Session identity: the creation time in epoch milliseconds, unique within a store
pub type SessionId = i64;

/// One completed import and the records it contributed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSession {
    pub id: SessionId,
    #[serde(
        rename = "uploadDate",
        serialize_with = "chrono::serde::ts_milliseconds::serialize",
        deserialize_with = "crate::parsers::deserializers::deserialize_timestamp"
    )]
    pub upload_date: DateTime<Utc>,
    pub entries: Vec<Record>,
}

/// All upload sessions in upload order, plus the persisted revision they were read at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    pub revision: u64,
    pub sessions: Vec<UploadSession>,
}

impl Store {
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.sessions.iter().map(|s| s.entries.len()).sum()
    }

    pub fn find(&self, id: SessionId) -> Option<&UploadSession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Next session id for an upload at `now`: its millisecond timestamp, bumped past the
    /// largest existing id when uploads land within the same millisecond
    pub fn next_session_id(&self, now: DateTime<Utc>) -> SessionId {
        let candidate = now.timestamp_millis();
        match self.sessions.iter().map(|s| s.id).max() {
            Some(max) if candidate <= max => max + 1,
            _ => candidate,
        }
    }
}
