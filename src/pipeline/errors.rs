//! Diagnostic payload for configuration validation.

use serde::Serialize;

use super::error_code::ErrorCode;

/// One configuration problem: a stable code, the JSON-pointer-style path of
/// the offending field, a human-readable message, and an optional hint on
/// how to fix it.
#[derive(Debug, Clone, Serialize)]
pub struct PhraseSpecError {
    /// Machine-readable code.
    pub code: ErrorCode,
    /// JSON-pointer-style location of the offending field.
    pub path: String,
    /// Human-readable description of the problem.
    pub message: String,
    /// Optional fix suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl PhraseSpecError {
    /// Create a diagnostic without a hint.
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    /// Attach a fix suggestion.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl std::fmt::Display for PhraseSpecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "[{}] {}", self.code, self.message)?;
        } else {
            write!(f, "[{}] {}: {}", self.code, self.path, self.message)?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " ({hint})")?;
        }
        Ok(())
    }
}
