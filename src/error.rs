//! Crate-level error type.
//!
//! The error taxonomy is deliberately small: the tool reads one file, runs a
//! pure transformation, and writes one stream. Configuration problems are
//! collected into a [`ValidationReport`] before the pipeline ever runs; the
//! pipeline itself has no error conditions.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::validation::ValidationReport;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong before or after the pipeline runs.
#[derive(Debug, Error)]
pub enum Error {
    /// The input document could not be read.
    #[error("cannot read input file {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The JSON config file could not be read.
    #[error("cannot read config file {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The JSON config file could not be parsed.
    #[error("cannot parse config file {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration validation produced at least one error diagnostic.
    #[error("invalid configuration:\n{0}")]
    InvalidConfig(ValidationReport),

    /// Ranked lines could not be written to the output stream.
    #[error("cannot write results: {source}")]
    WriteOutput {
        #[source]
        source: io::Error,
    },
}
