//! Stable machine-readable codes for configuration diagnostics.

use serde::Serialize;

/// Identifies the kind of problem a diagnostic reports, independent of its
/// human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A length bound is out of range or the bounds are inverted.
    InvalidBounds,
    /// A limit that must be positive was set to zero.
    ZeroLimit,
    /// A config field the schema does not recognize.
    UnknownField,
    /// Catch-all for rules with no more specific code.
    ValidationFailed,
}

impl ErrorCode {
    /// The user-facing name used in JSON and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidBounds => "invalid_bounds",
            Self::ZeroLimit => "zero_limit",
            Self::UnknownField => "unknown_field",
            Self::ValidationFailed => "validation_failed",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
