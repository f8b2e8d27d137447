//! Validation engine for run specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`PhraseSpec`](super::spec::PhraseSpec) and collects every diagnostic
//! into a [`ValidationReport`] — it never short-circuits on the first error,
//! so users see all problems at once.
//!
//! The pipeline assumes a spec that passed validation; the stages do not
//! defensively re-check the bounds mid-run.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use phrasefreq::pipeline::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&spec);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::PhraseSpecError;
use super::spec::PhraseSpec;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding — an error or warning attached to a
/// [`PhraseSpecError`] that carries the code, path, message, and hint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: PhraseSpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: PhraseSpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: PhraseSpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &PhraseSpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &PhraseSpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let label = match diag.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            write!(f, "{label}: {}", diag.error)?;
        }
        Ok(())
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`PhraseSpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so they can be shared
/// across threads (e.g., in a long-lived validation engine).
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"length_bounds"`).
    fn name(&self) -> &str;

    /// Inspect `spec` and return any findings.
    fn validate(&self, spec: &PhraseSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`PhraseSpec`] and collects
/// all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(LengthBoundsRule));
        engine.add_rule(Box::new(TopKRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &PhraseSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Length bounds: min_len >= 1, max_len >= min_len ─────────────────────

struct LengthBoundsRule;

impl ValidationRule for LengthBoundsRule {
    fn name(&self) -> &str {
        "length_bounds"
    }

    fn validate(&self, spec: &PhraseSpec) -> Vec<ValidationDiagnostic> {
        let cfg = spec.resolve();
        let mut out = Vec::new();

        if cfg.min_len < 1 {
            out.push(ValidationDiagnostic::error(
                PhraseSpecError::new(
                    ErrorCode::InvalidBounds,
                    "/min_len",
                    "min_len must be at least 1",
                )
                .with_hint("A phrase needs at least one word; set min_len to 1 or more"),
            ));
        }

        if cfg.max_len < cfg.min_len {
            out.push(ValidationDiagnostic::error(
                PhraseSpecError::new(
                    ErrorCode::InvalidBounds,
                    "/max_len",
                    format!(
                        "max_len ({}) is less than min_len ({})",
                        cfg.max_len, cfg.min_len
                    ),
                )
                .with_hint("Raise max_len or lower min_len"),
            ));
        }

        out
    }
}

// ─── 2. top_k must be positive ──────────────────────────────────────────────

struct TopKRule;

impl ValidationRule for TopKRule {
    fn name(&self) -> &str {
        "top_k"
    }

    fn validate(&self, spec: &PhraseSpec) -> Vec<ValidationDiagnostic> {
        if spec.resolve().top_k == 0 {
            vec![ValidationDiagnostic::error(
                PhraseSpecError::new(ErrorCode::ZeroLimit, "/top_k", "top_k must be greater than 0")
                    .with_hint("Set top_k to the number of phrases to report"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 3. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &PhraseSpec) -> Vec<ValidationDiagnostic> {
        spec.unknown_fields
            .keys()
            .map(|key| {
                let diag_fn = if spec.strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    PhraseSpecError::new(
                        ErrorCode::UnknownField,
                        format!("/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
