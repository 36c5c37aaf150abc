use std::fmt;

/// Why an item was left out of an import batch or a filtered view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscardReason {
    /// CSV line split into a different number of fields than the header
    FieldCountMismatch { expected: usize, found: usize },
    /// Record whose Date field could not be parsed as a date
    UnparseableDate { value: String },
}

/// An item dropped without failing the operation.
///
/// `position` is the 1-based line number for CSV imports and the 0-based index into the
/// flattened session entries for filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discard {
    pub position: usize,
    pub reason: DiscardReason,
}

impl Discard {
    pub fn new(position: usize, reason: DiscardReason) -> Self {
        Self { position, reason }
    }
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCountMismatch { expected, found } => {
                write!(f, "expected {} fields, found {}", expected, found)
            }
            Self::UnparseableDate { value } => write!(f, "unparseable Date '{}'", value),
        }
    }
}
