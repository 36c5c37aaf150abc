//! Paginated projection of filtered records
//!
//! [`FilteredView`] is recomputed from the sessions whenever they or the date range change;
//! it never writes back to the store. [`Pager`] holds the page size and current-page cursor.

pub mod filtered;
pub mod pager;

pub use filtered::FilteredView;
pub use pager::{DEFAULT_PAGE_SIZE, Pager, page, total_pages};
