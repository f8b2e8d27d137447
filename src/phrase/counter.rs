//! Phrase frequency counting
//!
//! Accumulates candidate phrases into a frequency table backed by an
//! `FxHashMap` for O(1) lookups during construction. The table makes no
//! ordering guarantee; equal-count phrases surface in arbitrary order at
//! ranking time.

use rustc_hash::FxHashMap;

use crate::types::Phrase;

/// Occurrence counts for every distinct phrase seen in a document.
///
/// Counting is a pure reduction: accumulation order never affects the final
/// table. Phrases seen only once are retained; any filtering happens at
/// ranking, not here.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: FxHashMap<Phrase, u64>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Record one occurrence of `phrase`.
    pub fn record(&mut self, phrase: Phrase) {
        *self.counts.entry(phrase).or_insert(0) += 1;
    }

    /// Record one occurrence of every phrase in `candidates`.
    pub fn record_all(&mut self, candidates: impl IntoIterator<Item = Phrase>) {
        for phrase in candidates {
            self.record(phrase);
        }
    }

    /// The occurrence count for `phrase`, 0 if never seen.
    pub fn count(&self, phrase: &Phrase) -> u64 {
        self.counts.get(phrase).copied().unwrap_or(0)
    }

    /// Number of distinct phrases in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table holds no phrases.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (phrase, count) entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Phrase, u64)> {
        self.counts.iter().map(|(p, &c)| (p, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase(words: &[&str]) -> Phrase {
        Phrase::from(words)
    }

    #[test]
    fn test_record_increments_by_one() {
        let mut table = FrequencyTable::new();
        table.record(phrase(&["the", "quick", "fox"]));
        table.record(phrase(&["the", "quick", "fox"]));
        table.record(phrase(&["lazy", "dog"]));

        assert_eq!(table.count(&phrase(&["the", "quick", "fox"])), 2);
        assert_eq!(table.count(&phrase(&["lazy", "dog"])), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_unseen_phrase_counts_zero() {
        let table = FrequencyTable::new();
        assert_eq!(table.count(&phrase(&["never", "seen"])), 0);
    }

    #[test]
    fn test_accumulation_order_is_irrelevant() {
        let a = phrase(&["a", "b"]);
        let b = phrase(&["c", "d"]);

        let mut forward = FrequencyTable::new();
        forward.record_all([a.clone(), a.clone(), b.clone()]);

        let mut backward = FrequencyTable::new();
        backward.record_all([b.clone(), a.clone(), a.clone()]);

        assert_eq!(forward.count(&a), backward.count(&a));
        assert_eq!(forward.count(&b), backward.count(&b));
        assert_eq!(forward.len(), backward.len());
    }

    #[test]
    fn test_singletons_are_retained() {
        let mut table = FrequencyTable::new();
        table.record(phrase(&["once", "only"]));
        assert_eq!(table.len(), 1);
        assert_eq!(table.count(&phrase(&["once", "only"])), 1);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::new();
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
    }
}
