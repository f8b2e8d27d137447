//! First-class pipeline artifacts.
//!
//! Each type represents a typed intermediate result flowing between pipeline
//! stages: sentences out of the tokenizer, candidates out of the generator,
//! the frequency table out of the counter, the ranked result out of the
//! suppressor, and the formatted lines at the output boundary.
//!
//! [`FormattedResult`] is the stability boundary: everything before it is
//! internal and may change; its shape is the public contract exposed to
//! stdout scrapers and JSON consumers.

use serde::Serialize;

use crate::types::{RankedPhrase, Sentence};

pub use crate::phrase::counter::FrequencyTable;
pub use crate::types::Phrase;

/// The tokenizer's output: every sentence in the document, in order.
#[derive(Debug, Clone, Default)]
pub struct SentenceSet {
    sentences: Vec<Sentence>,
}

impl SentenceSet {
    /// Wrap a list of sentences.
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    /// The sentences, in document order.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the document produced no sentences.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total token count across all sentences.
    pub fn total_tokens(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }
}

/// The candidate generator's output: every in-bounds n-gram from every
/// sentence, with repeats.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    phrases: Vec<Phrase>,
}

impl CandidateSet {
    /// Wrap a list of candidate phrases.
    pub fn new(phrases: Vec<Phrase>) -> Self {
        Self { phrases }
    }

    /// The candidates, including repeats.
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// Number of candidates (not distinct phrases).
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Whether no candidates were generated.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Consume the set, yielding the candidates for counting.
    pub fn into_phrases(self) -> Vec<Phrase> {
        self.phrases
    }
}

/// The suppressor/ranker's output: surviving phrases sorted by count
/// descending, truncated to top-K. Tie order is unspecified.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RankedResult {
    entries: Vec<RankedPhrase>,
}

impl RankedResult {
    /// Wrap an already-ranked list.
    pub fn new(entries: Vec<RankedPhrase>) -> Self {
        Self { entries }
    }

    /// The ranked entries, best first.
    pub fn entries(&self) -> &[RankedPhrase] {
        &self.entries
    }

    /// Number of ranked entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing survived suppression.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One formatted row of the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedPhrase {
    /// 1-based rank.
    pub rank: usize,
    /// Occurrence count across the document.
    pub count: u64,
    /// Phrase tokens joined by single spaces.
    pub text: String,
}

/// Public-facing formatted output — the stability boundary.
///
/// `lines` holds the exact rows downstream scripts scrape from stdout;
/// `phrases` is the same data in structured form.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormattedResult {
    /// Output rows in rank order, one per ranked phrase.
    pub lines: Vec<String>,
    /// Structured view of the same rows.
    pub phrases: Vec<FormattedPhrase>,
}

impl FormattedResult {
    /// Whether the run produced no ranked phrases.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_set_totals() {
        let set = SentenceSet::new(vec![
            Sentence::new(vec!["a".into(), "b".into()]),
            Sentence::new(vec!["c".into()]),
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.total_tokens(), 3);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_empty_artifacts() {
        assert!(SentenceSet::default().is_empty());
        assert!(CandidateSet::default().is_empty());
        assert!(RankedResult::default().is_empty());
        assert!(FormattedResult::default().is_empty());
    }

    #[test]
    fn test_formatted_result_serializes() {
        let result = FormattedResult {
            lines: vec!["#1:  (3) the quick fox".to_string()],
            phrases: vec![FormattedPhrase {
                rank: 1,
                count: 3,
                text: "the quick fox".to_string(),
            }],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["phrases"][0]["rank"], 1);
        assert_eq!(json["phrases"][0]["count"], 3);
        assert_eq!(json["lines"][0], "#1:  (3) the quick fox");
    }
}
