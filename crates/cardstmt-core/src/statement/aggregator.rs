//! Ordered collection of statement records.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::ExtractionError;
use crate::models::statement::StatementRecord;

use super::Result;

/// Collects records keyed by discovery index.
///
/// Sequential callers use [`append`](Self::append); concurrent workers use
/// [`insert`](Self::insert) with the document's discovery index, so the
/// report order never depends on completion order. Records are never
/// replaced once placed.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    slots: Mutex<BTreeMap<usize, StatementRecord>>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<usize, StatementRecord>> {
        // A panicking producer cannot leave the map half-written.
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Place a record after every record placed so far. Returns its index.
    pub fn append(&self, record: StatementRecord) -> usize {
        let mut slots = self.lock();
        let index = slots.last_key_value().map_or(0, |(index, _)| index + 1);
        slots.insert(index, record);
        index
    }

    /// Place a record at its discovery index.
    pub fn insert(&self, index: usize, record: StatementRecord) -> Result<()> {
        let mut slots = self.lock();
        if slots.contains_key(&index) {
            return Err(ExtractionError::SlotOccupied(index));
        }
        slots.insert(index, record);
        Ok(())
    }

    /// Whether a record has been placed at `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.lock().contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of the records in index order.
    pub fn results(&self) -> Vec<StatementRecord> {
        self.lock().values().cloned().collect()
    }

    /// Consume the aggregator, yielding records in index order.
    pub fn into_results(self) -> Vec<StatementRecord> {
        self.slots
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_values()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocumentError;
    use std::thread;

    fn record(name: &str) -> StatementRecord {
        StatementRecord::failed(DocumentError::TextUnavailable, name)
    }

    fn names(records: &[StatementRecord]) -> Vec<&str> {
        records.iter().map(|r| r.source_file.as_str()).collect()
    }

    #[test]
    fn test_append_preserves_call_order() {
        let aggregator = ResultAggregator::new();
        assert_eq!(aggregator.append(record("b.pdf")), 0);
        assert_eq!(aggregator.append(record("a.pdf")), 1);
        assert_eq!(aggregator.append(record("b.pdf")), 2);

        assert_eq!(names(&aggregator.results()), vec!["b.pdf", "a.pdf", "b.pdf"]);
        assert_eq!(aggregator.len(), 3);
    }

    #[test]
    fn test_insert_rejects_occupied_slot() {
        let aggregator = ResultAggregator::new();
        aggregator.insert(0, record("first.pdf")).unwrap();

        let err = aggregator.insert(0, record("second.pdf")).unwrap_err();
        assert!(matches!(err, ExtractionError::SlotOccupied(0)));
        assert!(aggregator.contains(0));
        assert!(!aggregator.contains(1));
        assert_eq!(names(&aggregator.results()), vec!["first.pdf"]);
    }

    #[test]
    fn test_concurrent_insert_orders_by_index() {
        let aggregator = ResultAggregator::new();

        thread::scope(|scope| {
            for index in (0..16).rev() {
                let aggregator = &aggregator;
                scope.spawn(move || {
                    aggregator
                        .insert(index, record(&format!("{:02}.pdf", index)))
                        .unwrap();
                });
            }
        });

        let records = aggregator.into_results();
        let expected: Vec<String> = (0..16).map(|i| format!("{:02}.pdf", i)).collect();
        assert_eq!(names(&records), expected);
    }
}
