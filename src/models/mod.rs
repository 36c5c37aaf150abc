//! Data models for the service-delivery ledger.
//!
//! - [`Record`] - One row with the nine fixed string fields
//! - [`UploadSession`] - Records contributed by a single import
//! - [`Store`] - All sessions in upload order, with the persisted revision
//! - [`Discard`] - Items dropped silently during import or filtering
//!
//! Timestamps in persisted sessions use the custom deserializer in
//! `parsers::deserializers`, which accepts both epoch milliseconds and RFC3339.

pub mod discard;
pub mod record;
pub mod session;

pub use discard::{Discard, DiscardReason};
pub use record::{FIELD_COUNT, FIELD_NAMES, Record};
pub use session::{SessionId, Store, UploadSession};
