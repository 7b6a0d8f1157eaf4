//! Error types for formula analysis
//!
//! User mistakes in a formula are never errors: they are reported as
//! [`Diagnostic`](crate::validate::Diagnostic)s. [`AnalysisError`] covers the
//! internal-consistency faults that abort an analysis after the validator has
//! accepted the formula, e.g. `P^` (a dangling connective) or `(P)(Q)`
//! (two operands with no connective between them).

use std::io;
use thiserror::Error;

/// Internal-consistency fault raised by the conversion, build or evaluation stages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The tree builder needed another token but the prefix sequence was exhausted
    #[error("prefix sequence exhausted at token {position} while an operand was still expected")]
    PrefixExhausted {
        /// Cursor position when the read failed
        position: usize,
    },

    /// The tree was complete before every prefix token was consumed
    #[error("expression tree completed after {consumed} of {total} prefix tokens")]
    TrailingTokens {
        /// Tokens consumed by the tree
        consumed: usize,
        /// Length of the prefix sequence
        total: usize,
    },

    /// A character that has no meaning in the canonical alphabet
    #[error("unexpected token '{token}' at position {position}")]
    UnexpectedToken {
        /// The offending character
        token: char,
        /// Index in the sequence being processed
        position: usize,
    },

    /// Evaluation met a variable the assignment does not bind
    #[error("variable '{variable}' has no value in the assignment")]
    UnboundVariable {
        /// The unbound variable
        variable: char,
    },
}

impl From<AnalysisError> for io::Error {
    fn from(err: AnalysisError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
