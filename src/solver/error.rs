//! Failure outcomes of a ladder query

use std::fmt;

/// Why a ladder query produced no path
///
/// Every variant is an expected, recoverable outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    /// A word is absent from the dictionary
    NotFound(String),
    /// Source and destination have different lengths
    LengthMismatch { source_len: usize, dest_len: usize },
    /// Source and destination are the same word
    TrivialQuery,
    /// Different networks, or no path within the step budget
    Unreachable,
}

impl fmt::Display for LadderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(word) => write!(f, "Word '{word}' is not in the dictionary"),
            Self::LengthMismatch {
                source_len,
                dest_len,
            } => write!(
                f,
                "Words differ in length ({source_len} vs {dest_len} letters)"
            ),
            Self::TrivialQuery => write!(f, "Source and destination are the same word"),
            Self::Unreachable => write!(f, "No ladder exists within the step budget"),
        }
    }
}

impl std::error::Error for LadderError {}
