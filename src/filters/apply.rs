use tracing::{debug, warn};

use super::range::{DateRange, parse_record_date};
use crate::models::{Discard, DiscardReason, Record, UploadSession};

/// Records selected by a date range, plus the ones skipped because their Date didn't parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    pub records: Vec<Record>,
    pub discarded: Vec<Discard>,
}

/// Apply a date range to every session's entries
///
/// Entries are flattened in session order, then entry order, and the output keeps that
/// order. A record passes when its Date parses and falls inside `range`; records with an
/// unparseable Date are left out and listed in [`FilterOutcome::discarded`] by their index
/// in the flattened sequence. The sessions themselves are never modified.
pub fn filter_sessions(sessions: &[UploadSession], range: &DateRange) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    let flattened = sessions.iter().flat_map(|session| session.entries.iter());
    for (position, record) in flattened.enumerate() {
        match parse_record_date(&record.date) {
            Some(moment) => {
                if range.contains(moment) {
                    outcome.records.push(record.clone());
                }
            }
            None => outcome.discarded.push(Discard::new(
                position,
                DiscardReason::UnparseableDate { value: record.date.clone() },
            )),
        }
    }

    if !outcome.discarded.is_empty() {
        warn!(count = outcome.discarded.len(), "Skipped records with unparseable Date");
    }
    debug!(
        from = %range.from,
        to = %range.to,
        matched = outcome.records.len(),
        "Applied date filter"
    );

    outcome
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate};

    use super::*;

    fn record(date: &str, client: &str) -> Record {
        Record { date: date.to_string(), client_name: client.to_string(), ..Record::default() }
    }

    fn session(id: i64, entries: Vec<Record>) -> UploadSession {
        UploadSession { id, upload_date: DateTime::from_timestamp_millis(id).unwrap(), entries }
    }

    fn range(from: &str, to: &str) -> DateRange {
        DateRange::new(
            NaiveDate::parse_from_str(from, "%Y-%m-%d").unwrap(),
            NaiveDate::parse_from_str(to, "%Y-%m-%d").unwrap(),
        )
    }

    #[test]
    fn test_filter_keeps_session_then_entry_order() {
        let sessions = vec![
            session(1, vec![record("2024-01-03", "a"), record("2024-01-01", "b")]),
            session(2, vec![record("2024-01-02", "c")]),
        ];

        let outcome = filter_sessions(&sessions, &range("2024-01-01", "2024-01-31"));
        let clients: Vec<&str> = outcome.records.iter().map(|r| r.client_name.as_str()).collect();
        assert_eq!(clients, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_filter_boundaries() {
        let sessions = vec![session(
            1,
            vec![
                record("2024-01-01", "on-from"),
                record("2024-01-05", "on-to"),
                record("2024-01-06", "after-to"),
                record("2023-12-31", "before-from"),
            ],
        )];

        let outcome = filter_sessions(&sessions, &range("2024-01-01", "2024-01-05"));
        let clients: Vec<&str> = outcome.records.iter().map(|r| r.client_name.as_str()).collect();
        assert_eq!(clients, vec!["on-from", "on-to"]);
        assert!(outcome.discarded.is_empty());
    }

    #[test]
    fn test_unparseable_dates_are_discarded_with_position() {
        let sessions = vec![
            session(1, vec![record("2024-01-02", "ok")]),
            session(2, vec![record("someday", "bad"), record("", "empty")]),
        ];

        let outcome = filter_sessions(&sessions, &range("2024-01-01", "2024-01-31"));
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(
            outcome.discarded,
            vec![
                Discard::new(1, DiscardReason::UnparseableDate { value: "someday".to_string() }),
                Discard::new(2, DiscardReason::UnparseableDate { value: String::new() }),
            ]
        );
    }

    #[test]
    fn test_filter_empty_sessions() {
        let outcome = filter_sessions(&[], &range("2024-01-01", "2024-01-31"));
        assert!(outcome.records.is_empty());
        assert!(outcome.discarded.is_empty());
    }
}
