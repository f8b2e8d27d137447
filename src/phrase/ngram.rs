//! N-gram candidate generation
//!
//! Enumerates every contiguous token run of bounded length within a single
//! sentence. Because candidates are drawn from one sentence's token slice,
//! no candidate can span a sentence boundary; the invariant holds by
//! construction and nothing downstream needs to re-check it.

use crate::types::{Phrase, Sentence};

/// Append every candidate phrase from `sentence` to `out`.
///
/// For a sentence of N tokens, this yields every contiguous subsequence of
/// length L for each L in `[min_len, min(max_len, N)]`, at every valid
/// starting offset. A sentence shorter than `min_len` contributes nothing.
///
/// Assumes `min_len >= 1` and `max_len >= min_len`; the bounds are validated
/// once at startup, not here.
pub fn extend_candidates(
    sentence: &Sentence,
    min_len: usize,
    max_len: usize,
    out: &mut Vec<Phrase>,
) {
    let tokens = sentence.tokens();
    let n = tokens.len();
    if n < min_len {
        return;
    }

    for start in 0..=(n - min_len) {
        let longest_end = (start + max_len).min(n);
        for end in (start + min_len)..=longest_end {
            out.push(Phrase::new(tokens[start..end].to_vec()));
        }
    }
}

/// Collect every candidate phrase from `sentence` into a fresh vector.
pub fn sentence_candidates(sentence: &Sentence, min_len: usize, max_len: usize) -> Vec<Phrase> {
    let mut out = Vec::new();
    extend_candidates(sentence, min_len, max_len, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(words: &[&str]) -> Sentence {
        Sentence::new(words.iter().map(|w| w.to_string()).collect())
    }

    fn texts(phrases: &[Phrase]) -> Vec<String> {
        phrases.iter().map(|p| p.text()).collect()
    }

    #[test]
    fn test_enumerates_all_lengths_and_offsets() {
        let s = sentence(&["the", "quick", "fox", "jumps"]);
        let candidates = sentence_candidates(&s, 2, 3);
        assert_eq!(
            texts(&candidates),
            vec![
                "the quick",
                "the quick fox",
                "quick fox",
                "quick fox jumps",
                "fox jumps",
            ]
        );
    }

    #[test]
    fn test_short_sentence_contributes_nothing() {
        let s = sentence(&["hello", "there"]);
        assert!(sentence_candidates(&s, 3, 10).is_empty());
    }

    #[test]
    fn test_sentence_exactly_min_len() {
        let s = sentence(&["one", "two", "three"]);
        let candidates = sentence_candidates(&s, 3, 10);
        assert_eq!(texts(&candidates), vec!["one two three"]);
    }

    #[test]
    fn test_max_len_clamped_to_sentence_length() {
        let s = sentence(&["a", "b"]);
        let candidates = sentence_candidates(&s, 1, 10);
        assert_eq!(texts(&candidates), vec!["a", "a b", "b"]);
    }

    #[test]
    fn test_min_equals_max() {
        let s = sentence(&["a", "b", "c", "d"]);
        let candidates = sentence_candidates(&s, 2, 2);
        assert_eq!(texts(&candidates), vec!["a b", "b c", "c d"]);
    }

    #[test]
    fn test_every_candidate_length_within_bounds() {
        let s = sentence(&["a", "b", "c", "d", "e", "f"]);
        for candidate in sentence_candidates(&s, 2, 4) {
            assert!((2..=4).contains(&candidate.len()));
        }
    }

    #[test]
    fn test_candidate_count_matches_closed_form() {
        // For N=5, min=2, max=3: starts with len 2 = 4, len 3 = 3.
        let s = sentence(&["a", "b", "c", "d", "e"]);
        assert_eq!(sentence_candidates(&s, 2, 3).len(), 7);
    }

    #[test]
    fn test_empty_sentence() {
        let s = sentence(&[]);
        assert!(sentence_candidates(&s, 1, 10).is_empty());
    }
}
