//! Subphrase suppression and count-based ranking
//!
//! A phrase that is a proper prefix of any other counted phrase is dropped
//! from the ranking, regardless of the two counts. Proper suffixes are NOT
//! checked: a phrase that only ever appears as the tail of a longer phrase
//! still ranks. The asymmetry is a documented property of this tool and is
//! reproduced here exactly; do not "fix" it.
//!
//! Survivors are sorted by count descending with no secondary key, so
//! equal-count phrases surface in whatever order the frequency table yields.
//! Callers (and tests) must treat tie order as unspecified.

use rustc_hash::FxHashSet;

use crate::phrase::counter::FrequencyTable;
use crate::types::{RankedPhrase, Token};

/// Rank the table's phrases: suppress proper prefixes, sort the survivors
/// by count descending, and keep the top `top_k`.
///
/// Fewer than `top_k` survivors means all of them are returned. An empty
/// table yields an empty result; there are no error conditions.
pub fn rank(table: &FrequencyTable, top_k: usize) -> Vec<RankedPhrase> {
    let suppressed = proper_prefixes(table);

    let mut ranked: Vec<RankedPhrase> = table
        .iter()
        .filter(|(phrase, _)| !suppressed.contains(phrase.tokens()))
        .map(|(phrase, count)| RankedPhrase {
            phrase: phrase.clone(),
            count,
        })
        .collect();

    // Stable sort on count only. Tie order is whatever the table iteration
    // produced, and that is part of the contract.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(top_k);
    ranked
}

/// Collect every proper prefix of every counted phrase.
///
/// The prefixes borrow from the table's own keys, so membership checks are
/// slice comparisons with no extra allocation.
fn proper_prefixes(table: &FrequencyTable) -> FxHashSet<&[Token]> {
    let mut prefixes = FxHashSet::default();
    for (phrase, _) in table.iter() {
        let tokens = phrase.tokens();
        for len in 1..tokens.len() {
            prefixes.insert(&tokens[..len]);
        }
    }
    prefixes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Phrase;

    fn phrase(words: &[&str]) -> Phrase {
        Phrase::from(words)
    }

    fn table_of(entries: &[(&[&str], u64)]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for &(words, count) in entries {
            for _ in 0..count {
                table.record(phrase(words));
            }
        }
        table
    }

    fn texts(ranked: &[RankedPhrase]) -> Vec<String> {
        ranked.iter().map(|r| r.phrase.text()).collect()
    }

    #[test]
    fn test_proper_prefix_is_suppressed() {
        let table = table_of(&[(&["the", "cat"], 1), (&["the", "cat", "sat"], 1)]);
        let ranked = rank(&table, 10);
        assert_eq!(texts(&ranked), vec!["the cat sat"]);
    }

    #[test]
    fn test_prefix_suppressed_even_with_higher_count() {
        // "the cat" occurs more often than "the cat sat", but being a proper
        // prefix of a counted phrase still removes it.
        let table = table_of(&[(&["the", "cat"], 5), (&["the", "cat", "sat"], 1)]);
        let ranked = rank(&table, 10);
        assert_eq!(texts(&ranked), vec!["the cat sat"]);
    }

    #[test]
    fn test_proper_suffix_is_not_suppressed() {
        // "sat on" is a suffix of "cat sat on" and a prefix of nothing, so
        // it survives alongside the longer phrase.
        let table = table_of(&[(&["sat", "on"], 2), (&["cat", "sat", "on"], 1)]);
        let mut survivors = texts(&rank(&table, 10));
        survivors.sort();
        assert_eq!(survivors, vec!["cat sat on", "sat on"]);
    }

    #[test]
    fn test_infix_is_not_suppressed() {
        // "sat on" appears inside "cat sat on the" but never as its prefix.
        let table = table_of(&[(&["sat", "on"], 1), (&["cat", "sat", "on", "the"], 1)]);
        let mut survivors = texts(&rank(&table, 10));
        survivors.sort();
        assert_eq!(survivors, vec!["cat sat on the", "sat on"]);
    }

    #[test]
    fn test_suppression_chain() {
        // Each phrase is a proper prefix of the next; only the longest one
        // survives.
        let table = table_of(&[
            (&["a", "b"], 9),
            (&["a", "b", "c"], 4),
            (&["a", "b", "c", "d"], 2),
        ]);
        let ranked = rank(&table, 10);
        assert_eq!(texts(&ranked), vec!["a b c d"]);
    }

    #[test]
    fn test_sorted_by_count_descending() {
        let table = table_of(&[
            (&["rare", "pair"], 1),
            (&["common", "pair"], 7),
            (&["middling", "pair"], 3),
        ]);
        let ranked = rank(&table, 10);
        assert_eq!(
            texts(&ranked),
            vec!["common pair", "middling pair", "rare pair"]
        );
    }

    #[test]
    fn test_truncates_to_top_k() {
        let table = table_of(&[
            (&["one", "two"], 5),
            (&["three", "four"], 4),
            (&["five", "six"], 3),
        ]);
        let ranked = rank(&table, 2);
        assert_eq!(texts(&ranked), vec!["one two", "three four"]);
    }

    #[test]
    fn test_fewer_survivors_than_top_k() {
        let table = table_of(&[(&["lone", "phrase"], 2)]);
        let ranked = rank(&table, 10);
        assert_eq!(texts(&ranked), vec!["lone phrase"]);
    }

    #[test]
    fn test_empty_table_yields_empty_result() {
        let table = FrequencyTable::new();
        assert!(rank(&table, 10).is_empty());
    }

    #[test]
    fn test_tie_order_is_unconstrained_but_counts_are_exact() {
        let table = table_of(&[(&["a", "b"], 2), (&["c", "d"], 2), (&["e", "f"], 2)]);
        let ranked = rank(&table, 10);
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|r| r.count == 2));
        // Set membership only; relative order among equal counts is
        // deliberately unspecified.
        let mut survivors = texts(&ranked);
        survivors.sort();
        assert_eq!(survivors, vec!["a b", "c d", "e f"]);
    }

    #[test]
    fn test_counts_carried_through() {
        let table = table_of(&[(&["the", "quick", "fox"], 3), (&["fox", "jumps"], 2)]);
        let ranked = rank(&table, 10);
        assert_eq!(ranked[0].count, 3);
        assert_eq!(ranked[0].phrase.text(), "the quick fox");
        assert_eq!(ranked[1].count, 2);
    }
}
