//! Core data types shared across the pipeline.
//!
//! A document is broken into [`Sentence`]s of normalized [`Token`]s, phrases
//! are contiguous token runs confined to one sentence, and the final output
//! is a list of [`RankedPhrase`]s. [`PhraseConfig`] carries the three knobs
//! that shape the whole run.

use serde::Serialize;

/// A normalized word: lowercase, stripped of non-alphanumeric characters.
///
/// Tokens have no structure beyond their string value, so a plain `String`
/// is enough.
pub type Token = String;

/// An ordered sequence of tokens bounded by sentence-terminating punctuation
/// in the source text.
///
/// Sentences are fully materialized before candidate generation; phrases are
/// generated from within a single sentence's token slice and can never span
/// two sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    /// Create a sentence from its normalized tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The sentence's tokens, in document order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens in the sentence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// A contiguous run of tokens drawn from one sentence.
///
/// Two phrases are equal iff their token sequences are equal element-wise,
/// which is exactly the derived `PartialEq`/`Hash` behavior, so phrases can
/// key the frequency table directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Phrase {
    tokens: Vec<Token>,
}

impl Phrase {
    /// Create a phrase from its tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The phrase's tokens, in order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens in the phrase.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the phrase has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The phrase's surface form: tokens joined by single spaces.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

impl From<&[&str]> for Phrase {
    fn from(words: &[&str]) -> Self {
        Self::new(words.iter().map(|w| w.to_string()).collect())
    }
}

/// A surviving phrase and its document-wide occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedPhrase {
    /// The phrase itself.
    pub phrase: Phrase,
    /// How many times it occurred across the document.
    pub count: u64,
}

/// Configuration for a phrase-frequency run.
///
/// The three knobs were module-level constants in earlier versions of this
/// tool; they are exposed here as named fields with the same defaults.
/// The pipeline assumes a validated config (see
/// [`crate::pipeline::validation`]) and does not re-check the bounds
/// mid-run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseConfig {
    /// Minimum phrase length in words. Must be at least 1.
    pub min_len: usize,
    /// Maximum phrase length in words. Must be at least `min_len`.
    ///
    /// Unbounded phrase length would make every document's full text its own
    /// most-repeated phrase; the bound keeps output human-scannable.
    pub max_len: usize,
    /// Number of top-ranked phrases to report.
    pub top_k: usize,
}

impl Default for PhraseConfig {
    fn default() -> Self {
        Self {
            min_len: 3,
            max_len: 10,
            top_k: 10,
        }
    }
}

impl PhraseConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum phrase length.
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Set the maximum phrase length.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Set the number of results to report.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_equality_is_elementwise() {
        let a = Phrase::from(["the", "quick", "fox"].as_slice());
        let b = Phrase::from(["the", "quick", "fox"].as_slice());
        let c = Phrase::from(["the", "quick"].as_slice());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_phrase_text_joins_with_single_spaces() {
        let p = Phrase::from(["the", "quick", "fox"].as_slice());
        assert_eq!(p.text(), "the quick fox");
    }

    #[test]
    fn test_config_defaults() {
        let cfg = PhraseConfig::default();
        assert_eq!(cfg.min_len, 3);
        assert_eq!(cfg.max_len, 10);
        assert_eq!(cfg.top_k, 10);
    }

    #[test]
    fn test_config_builders() {
        let cfg = PhraseConfig::new()
            .with_min_len(2)
            .with_max_len(3)
            .with_top_k(1);
        assert_eq!(cfg.min_len, 2);
        assert_eq!(cfg.max_len, 3);
        assert_eq!(cfg.top_k, 1);
    }
}
