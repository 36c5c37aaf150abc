pub mod apply;
pub mod range;

pub use apply::{FilterOutcome, filter_sessions};
pub use range::{DateRange, parse_date_input, parse_record_date};
