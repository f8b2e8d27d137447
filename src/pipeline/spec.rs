//! Run specification types.
//!
//! A [`PhraseSpec`] is the JSON-facing configuration surface: every knob is
//! optional and falls back to the documented default when omitted. These
//! types are the input to the [`super::validation::ValidationEngine`];
//! [`PhraseSpec::resolve`] produces the concrete
//! [`PhraseConfig`](crate::types::PhraseConfig) the pipeline runs with.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "min_len": 3,
//!   "max_len": 10,
//!   "top_k": 10,
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::PhraseConfig;

/// Top-level run specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Minimum phrase length in words. Omitted → default 3.
    #[serde(default)]
    pub min_len: Option<usize>,

    /// Maximum phrase length in words. Omitted → default 10.
    #[serde(default)]
    pub max_len: Option<usize>,

    /// Number of top-ranked phrases to report. Omitted → default 10.
    #[serde(default)]
    pub top_k: Option<usize>,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for PhraseSpec {
    fn default() -> Self {
        Self {
            v: 1,
            min_len: None,
            max_len: None,
            top_k: None,
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl PhraseSpec {
    /// Parse a spec from JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Overlay explicit values (e.g. from CLI flags) onto the spec.
    ///
    /// `None` arguments leave the corresponding field untouched.
    pub fn apply_overrides(
        &mut self,
        min_len: Option<usize>,
        max_len: Option<usize>,
        top_k: Option<usize>,
    ) {
        if min_len.is_some() {
            self.min_len = min_len;
        }
        if max_len.is_some() {
            self.max_len = max_len;
        }
        if top_k.is_some() {
            self.top_k = top_k;
        }
    }

    /// Produce the concrete config, filling omitted fields with defaults.
    pub fn resolve(&self) -> PhraseConfig {
        let defaults = PhraseConfig::default();
        PhraseConfig {
            min_len: self.min_len.unwrap_or(defaults.min_len),
            max_len: self.max_len.unwrap_or(defaults.max_len),
            top_k: self.top_k.unwrap_or(defaults.top_k),
        }
    }
}
