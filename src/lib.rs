//! phrasefreq — find the most frequently repeated phrases in a document.
//!
//! A phrase is a contiguous run of normalized words, of bounded length, that
//! never crosses a sentence boundary. The pipeline tokenizes the document,
//! enumerates every in-bounds n-gram per sentence, counts occurrences,
//! suppresses phrases that are proper prefixes of longer counted phrases,
//! and reports the top-K survivors by count.
//!
//! Two documented quirks are part of the contract and deliberately kept:
//! punctuation stripping collapses contractions into their base word
//! (`we'll` → `well`), and suppression is prefix-only — a phrase that is
//! merely a suffix of a longer phrase still ranks. Tie order among
//! equal-count phrases is unspecified.
//!
//! # Example
//!
//! ```
//! use phrasefreq::pipeline::observer::NoopObserver;
//! use phrasefreq::pipeline::runner::PhraseFreqPipeline;
//! use phrasefreq::types::PhraseConfig;
//!
//! let cfg = PhraseConfig::new()
//!     .with_min_len(2)
//!     .with_max_len(3)
//!     .with_top_k(1);
//!
//! let pipeline = PhraseFreqPipeline::standard();
//! let text = "The quick fox jumps. The quick fox runs. The quick fox jumps.";
//! let result = pipeline.run(text, &cfg, &mut NoopObserver);
//!
//! assert_eq!(result.lines, vec!["#1:  (3) the quick fox"]);
//! ```

pub mod error;
pub mod nlp;
pub mod phrase;
pub mod pipeline;
pub mod types;

pub use error::{Error, Result};
pub use types::PhraseConfig;

use pipeline::artifacts::FormattedResult;
use pipeline::observer::NoopObserver;
use pipeline::runner::PhraseFreqPipeline;

/// Run the standard pipeline over `text` with `cfg`.
///
/// Convenience entry point for callers that don't need custom stages or
/// observers. Assumes a validated config.
pub fn top_phrases(text: &str, cfg: &PhraseConfig) -> FormattedResult {
    PhraseFreqPipeline::standard().run(text, cfg, &mut NoopObserver)
}
