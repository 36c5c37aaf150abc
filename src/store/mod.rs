//! Persistent upload-session store
//!
//! All sessions live in one JSON document, rewritten in full after every mutation:
//!
//! ```json
//! { "version": 1, "revision": 3, "sessions": [ { "id": 1704456000000, "uploadDate": 1704456000000, "entries": [ ... ] } ] }
//! ```
//!
//! Default location: `<platform data dir>/delivery-ledger/sessions.json`
//! - Linux: `~/.local/share/delivery-ledger/`
//! - macOS: `~/Library/Application Support/delivery-ledger/`
//! - Windows: `%APPDATA%\delivery-ledger\`

pub mod document;
pub mod persistence;

pub use document::{STORE_VERSION, StoreDocument};
pub use persistence::UploadStore;
