//! Phrase extraction components
//!
//! This module provides n-gram candidate generation, frequency counting,
//! and subphrase suppression with count-based ranking.

pub mod counter;
pub mod ngram;
pub mod suppress;
