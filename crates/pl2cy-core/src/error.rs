//! Error types for fact conversion.

use std::fmt;

use thiserror::Error;

/// What is structurally wrong with a raw fact fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatProblem {
    /// The fragment does not end with `.`.
    MissingTerminator,
    /// No `(` present, or the fact body does not end with `)`.
    MissingParentheses,
    /// Nothing in front of the opening parenthesis.
    EmptyPredicate,
}

impl fmt::Display for FormatProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::MissingTerminator => "fact missing terminating '.'",
            Self::MissingParentheses => "invalid fact format, expected predicate(args)",
            Self::EmptyPredicate => "fact has an empty predicate name",
        };
        f.write_str(msg)
    }
}

/// Conversion failure. The first one encountered aborts the whole conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("{problem}: {fragment}")]
    Format {
        fragment: String,
        problem: FormatProblem,
    },

    #[error("only unary or binary predicates are supported: '{predicate}' has {count} argument(s)")]
    Arity { predicate: String, count: usize },
}

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

impl ConvertError {
    /// Create a format error for an offending fragment.
    pub fn format(fragment: impl Into<String>, problem: FormatProblem) -> Self {
        Self::Format {
            fragment: fragment.into(),
            problem,
        }
    }

    /// Create an arity error.
    pub fn arity(predicate: impl Into<String>, count: usize) -> Self {
        Self::Arity {
            predicate: predicate.into(),
            count,
        }
    }

    /// The raw fragment that failed, when the error is a format error.
    pub fn fragment(&self) -> Option<&str> {
        match self {
            Self::Format { fragment, .. } => Some(fragment),
            Self::Arity { .. } => None,
        }
    }
}
