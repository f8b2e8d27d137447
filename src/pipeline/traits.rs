//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one processing stage boundary. Implementations are
//! statically dispatched; the default stage set reproduces the standard
//! phrase-frequency algorithm end to end. Stages that carry no state of
//! their own are zero-sized and add zero runtime cost.

use crate::nlp::tokenizer::SentenceTokenizer;
use crate::phrase::{ngram, suppress};
use crate::pipeline::artifacts::{
    CandidateSet, FormattedPhrase, FormattedResult, FrequencyTable, RankedResult, SentenceSet,
};
use crate::types::PhraseConfig;

// ============================================================================
// Tokenizer — raw text to sentences of normalized tokens (stage 1)
// ============================================================================

/// Splits raw document text into sentences of normalized tokens.
///
/// # Contract
///
/// - **Input**: the whole document as one string.
/// - **Output**: a finite [`SentenceSet`]; possibly empty, never an error.
/// - Tokens are lowercase and stripped of non-alphanumeric characters;
///   fragments that normalize to nothing are dropped.
pub trait Tokenizer {
    /// Tokenize the document.
    fn tokenize(&self, text: &str, cfg: &PhraseConfig) -> SentenceSet;
}

impl Tokenizer for SentenceTokenizer {
    fn tokenize(&self, text: &str, _cfg: &PhraseConfig) -> SentenceSet {
        SentenceSet::new(self.split(text))
    }
}

// ============================================================================
// CandidateGenerator — sentences to bounded n-grams (stage 2)
// ============================================================================

/// Enumerates every candidate phrase from every sentence.
///
/// # Contract
///
/// - **Input**: the [`SentenceSet`] and the length bounds from the config.
/// - **Output**: every contiguous token run of length within
///   `[min_len, max_len]`, drawn from within single sentences only. The
///   no-sentence-spanning invariant holds by construction.
pub trait CandidateGenerator {
    /// Generate all candidates.
    fn generate(&self, sentences: &SentenceSet, cfg: &PhraseConfig) -> CandidateSet;
}

/// Default generator — sliding n-gram enumeration per sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct NgramGenerator;

impl CandidateGenerator for NgramGenerator {
    fn generate(&self, sentences: &SentenceSet, cfg: &PhraseConfig) -> CandidateSet {
        let mut out = Vec::new();
        for sentence in sentences.sentences() {
            ngram::extend_candidates(sentence, cfg.min_len, cfg.max_len, &mut out);
        }
        CandidateSet::new(out)
    }
}

// ============================================================================
// Counter — candidates to frequency table (stage 3)
// ============================================================================

/// Accumulates candidates into the frequency table.
///
/// # Contract
///
/// - **Input**: the full candidate set, consumed.
/// - **Output**: a [`FrequencyTable`] mapping each distinct phrase to its
///   occurrence count. Accumulation order is irrelevant; counts are
///   commutative. Singletons are retained.
pub trait Counter {
    /// Count all candidates.
    fn count(&self, candidates: CandidateSet, cfg: &PhraseConfig) -> FrequencyTable;
}

/// Default counter — plain hash-map accumulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyCounter;

impl Counter for FrequencyCounter {
    fn count(&self, candidates: CandidateSet, _cfg: &PhraseConfig) -> FrequencyTable {
        let phrases = candidates.into_phrases();
        let mut table = FrequencyTable::with_capacity(phrases.len());
        table.record_all(phrases);
        table
    }
}

// ============================================================================
// Ranker — frequency table to ranked result (stage 4)
// ============================================================================

/// Suppresses subphrases and ranks the survivors.
///
/// # Contract
///
/// - **Input**: the frequency table and `top_k` from the config.
/// - **Output**: survivors sorted by count descending, truncated to `top_k`.
/// - Any phrase that is a proper prefix of another counted phrase is
///   omitted, regardless of relative counts; proper suffixes are not
///   checked. Tie order among equal counts is unspecified.
pub trait Ranker {
    /// Produce the ranked result.
    fn rank(&self, table: &FrequencyTable, cfg: &PhraseConfig) -> RankedResult;
}

/// Default ranker — prefix suppression plus count-descending sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuppressingRanker;

impl Ranker for SuppressingRanker {
    fn rank(&self, table: &FrequencyTable, cfg: &PhraseConfig) -> RankedResult {
        RankedResult::new(suppress::rank(table, cfg.top_k))
    }
}

// ============================================================================
// ResultFormatter — ranked result to output rows (stage 5)
// ============================================================================

/// Renders the ranked result into the public output shape.
///
/// # Contract
///
/// - **Input**: the ranked result.
/// - **Output**: one row per entry, rank 1 first. The line shape
///   `#<rank>:  (<count>) <phrase text>` — double space included — is the
///   contract stdout consumers depend on.
pub trait ResultFormatter {
    /// Format the result.
    fn format(&self, ranked: &RankedResult, cfg: &PhraseConfig) -> FormattedResult;
}

/// Default formatter — the standard `#rank:  (count) phrase` rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardResultFormatter;

impl ResultFormatter for StandardResultFormatter {
    fn format(&self, ranked: &RankedResult, _cfg: &PhraseConfig) -> FormattedResult {
        let phrases: Vec<FormattedPhrase> = ranked
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| FormattedPhrase {
                rank: i + 1,
                count: entry.count,
                text: entry.phrase.text(),
            })
            .collect();

        let lines = phrases
            .iter()
            .map(|p| format!("#{}:  ({}) {}", p.rank, p.count, p.text))
            .collect();

        FormattedResult { lines, phrases }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Phrase, RankedPhrase, Sentence};

    fn cfg(min: usize, max: usize, top: usize) -> PhraseConfig {
        PhraseConfig::new()
            .with_min_len(min)
            .with_max_len(max)
            .with_top_k(top)
    }

    #[test]
    fn test_tokenizer_stage_produces_sentences() {
        let set = SentenceTokenizer::new().tokenize("One two. Three four.", &cfg(1, 2, 5));
        assert_eq!(set.len(), 2);
        assert_eq!(set.total_tokens(), 4);
    }

    #[test]
    fn test_generator_stage_respects_bounds() {
        let sentences = SentenceTokenizer::new().tokenize("a b c. d e.", &cfg(2, 3, 5));
        let candidates = NgramGenerator.generate(&sentences, &cfg(2, 3, 5));
        for candidate in candidates.phrases() {
            assert!((2..=3).contains(&candidate.len()));
        }
        // First sentence: "a b", "a b c", "b c". Second: "d e".
        assert_eq!(candidates.len(), 4);
    }

    #[test]
    fn test_generator_never_spans_sentences() {
        let sentences = SentenceTokenizer::new().tokenize("one two. three four.", &cfg(2, 4, 5));
        let candidates = NgramGenerator.generate(&sentences, &cfg(2, 4, 5));
        let crossing = Phrase::from(["two", "three"].as_slice());
        assert!(candidates.phrases().iter().all(|p| *p != crossing));
    }

    #[test]
    fn test_counter_stage_counts_repeats() {
        let candidates = CandidateSet::new(vec![
            Phrase::from(["a", "b"].as_slice()),
            Phrase::from(["a", "b"].as_slice()),
            Phrase::from(["c", "d"].as_slice()),
        ]);
        let table = FrequencyCounter.count(candidates, &cfg(2, 2, 5));
        assert_eq!(table.count(&Phrase::from(["a", "b"].as_slice())), 2);
        assert_eq!(table.count(&Phrase::from(["c", "d"].as_slice())), 1);
    }

    #[test]
    fn test_ranker_stage_applies_top_k() {
        let mut table = FrequencyTable::new();
        table.record(Phrase::from(["a", "b"].as_slice()));
        table.record(Phrase::from(["c", "d"].as_slice()));
        let ranked = SuppressingRanker.rank(&table, &cfg(2, 2, 1));
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_formatter_line_shape() {
        let ranked = RankedResult::new(vec![RankedPhrase {
            phrase: Phrase::from(["the", "quick", "fox"].as_slice()),
            count: 3,
        }]);
        let result = StandardResultFormatter.format(&ranked, &cfg(2, 3, 1));
        assert_eq!(result.lines, vec!["#1:  (3) the quick fox"]);
        assert_eq!(result.phrases[0].rank, 1);
    }

    #[test]
    fn test_formatter_ranks_are_one_based_and_ordered() {
        let ranked = RankedResult::new(vec![
            RankedPhrase {
                phrase: Phrase::from(["first", "phrase"].as_slice()),
                count: 4,
            },
            RankedPhrase {
                phrase: Phrase::from(["second", "phrase"].as_slice()),
                count: 2,
            },
        ]);
        let result = StandardResultFormatter.format(&ranked, &cfg(2, 2, 5));
        assert_eq!(
            result.lines,
            vec!["#1:  (4) first phrase", "#2:  (2) second phrase"]
        );
    }

    #[test]
    fn test_formatter_empty_result() {
        let result = StandardResultFormatter.format(&RankedResult::default(), &cfg(2, 2, 5));
        assert!(result.lines.is_empty());
        assert!(result.is_empty());
    }
}
