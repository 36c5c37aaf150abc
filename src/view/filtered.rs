use super::pager::Pager;
use crate::error::Result;
use crate::filters::{DateRange, FilterOutcome, filter_sessions};
use crate::models::{Discard, Record, UploadSession};

/// The derived, non-persisted result of the active date filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView {
    range: DateRange,
    records: Vec<Record>,
    discarded: Vec<Discard>,
    pager: Pager,
}

impl FilteredView {
    /// Filter `sessions` and start on page 1
    pub fn build(sessions: &[UploadSession], range: DateRange, page_size: usize) -> Self {
        let FilterOutcome { records, discarded } = filter_sessions(sessions, &range);
        Self { range, records, discarded, pager: Pager::new(page_size) }
    }

    /// Re-run the same filter against changed sessions, keeping the page cursor in range
    pub fn refresh(&mut self, sessions: &[UploadSession]) {
        let FilterOutcome { records, discarded } = filter_sessions(sessions, &self.range);
        self.records = records;
        self.discarded = discarded;
        self.pager.clamp(self.records.len());
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    /// Every matching record, across all pages
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn discarded(&self) -> &[Discard] {
        &self.discarded
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.records.len())
    }

    /// Records on the page currently shown
    pub fn page_records(&self) -> &[Record] {
        self.pager.current(&self.records)
    }

    pub fn select_page(&mut self, page_number: usize) -> Result<()> {
        self.pager.select(page_number, self.records.len())
    }
}
