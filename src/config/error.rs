use thiserror::Error;

use crate::types::Degree;

/// Errors raised while constructing or editing a configuration.
///
/// Every variant surfaces synchronously at the editing surface; a validated
/// configuration can no longer fail inside the pipeline.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A quoted phrase was opened but never closed.
    #[error("unterminated quoted phrase in '{input}'")]
    UnterminatedPhrase { input: String },

    /// A term resolved to the empty string (e.g. bare `""`).
    #[error("empty term in '{input}'")]
    EmptyTerm { input: String },

    /// A weight was NaN or infinite.
    #[error("{context} weight must be a finite number, got {value}")]
    NonFiniteWeight { context: &'static str, value: f64 },

    /// Degree weights express preference strength and cannot be negative.
    #[error("degree weight for '{degree}' must not be negative, got {value}")]
    NegativeDegreeWeight { degree: Degree, value: f64 },

    /// The term matcher could not be built from the parsed terms.
    #[error("term matcher construction failed: {reason}")]
    Matcher { reason: String },
}
