//! Sentence splitting and word normalization
//!
//! Splits raw text into sentences on terminator punctuation, then each
//! sentence into lowercase, punctuation-stripped word tokens. Stripping is
//! aggressive on purpose: every non-alphanumeric character goes, apostrophes
//! included, so `well` and `we'll` collapse to the same token. That is a
//! documented limitation of the tool, not something this module tries to be
//! clever about.

use crate::types::{Sentence, Token};

/// Configuration for sentence splitting
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Characters that terminate a sentence
    pub terminators: Vec<char>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            // The semicolon is treated as a sentence terminator, same as
            // the classic version of this tool.
            terminators: vec!['.', '!', '?', ';'],
        }
    }
}

/// Splits a document into sentences of normalized tokens
#[derive(Debug, Clone)]
pub struct SentenceTokenizer {
    config: TokenizerConfig,
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceTokenizer {
    /// Create a tokenizer with the default terminator set
    pub fn new() -> Self {
        Self {
            config: TokenizerConfig::default(),
        }
    }

    /// Create a tokenizer with custom config
    pub fn with_config(config: TokenizerConfig) -> Self {
        Self { config }
    }

    /// Set the sentence terminator characters
    pub fn with_terminators(mut self, terminators: &[char]) -> Self {
        self.config.terminators = terminators.to_vec();
        self
    }

    /// Split raw text into sentences of normalized tokens.
    ///
    /// Any input, including the empty string, produces a (possibly empty)
    /// sequence of sentences; there are no error conditions. Sentences that
    /// end up with zero tokens are discarded.
    pub fn split(&self, text: &str) -> Vec<Sentence> {
        text.split(|c: char| self.config.terminators.contains(&c))
            .map(|raw| {
                Sentence::new(
                    raw.split_whitespace()
                        .filter_map(normalize_word)
                        .collect(),
                )
            })
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Normalize one whitespace-delimited fragment into a token.
///
/// Strips every non-alphanumeric character and lowercases the rest. Returns
/// `None` when nothing survives the stripping (e.g. a fragment that was all
/// punctuation).
fn normalize_word(fragment: &str) -> Option<Token> {
    let stripped: String = fragment.chars().filter(|c| c.is_alphanumeric()).collect();
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_lowercase())
    }
}
