//! # Propositional Formula Analyzer
//!
//! This crate checks strings as well-formed propositional-logic formulas, rewrites
//! accepted formulas with canonical connectives, converts them to prefix (Polish)
//! notation, builds an evaluable expression tree and enumerates the complete truth
//! table.
//!
//! ## Alphabet
//!
//! | Kind | Input | Canonical |
//! |------|-------|-----------|
//! | Variables | `A`–`Z` except `F` and `V` | unchanged |
//! | Constants | `V` (true), `F` (false) | unchanged |
//! | Negation | `~` | `¬` |
//! | Conjunction | `^` | `∧` |
//! | Disjunction | `v` | `v` |
//! | Implication | `>` | `→` |
//! | Bi-implication | `<>` | `↔` |
//! | Brackets | `()`, `[]`, `{}` | unchanged |
//!
//! ## Pipeline
//!
//! 1. [`validate`](validate::validate) scans the raw input and collects
//!    [`Diagnostic`]s. Any diagnostic rejects the formula and stops the pipeline.
//! 2. [`translate`](translate::translate) substitutes the canonical connectives.
//! 3. [`to_prefix`](prefix::to_prefix) converts infix to prefix notation.
//! 4. [`ExprTree::from_prefix`] builds the expression tree.
//! 5. [`TruthTable::generate`] evaluates every subexpression under every assignment.
//!
//! ## Quick Start
//!
//! ```
//! use prop_analyzer::analyze;
//!
//! # fn main() -> Result<(), prop_analyzer::AnalysisError> {
//! let analysis = analyze("((PvQ)>R)<>P")?;
//! assert!(analysis.is_valid());
//! assert_eq!(analysis.canonical.as_deref(), Some("((PvQ)→R)↔P"));
//! assert_eq!(analysis.prefix.as_ref().unwrap().to_string(), "↔→vPQRP");
//!
//! let table = analysis.truth_table.as_ref().unwrap();
//! assert_eq!(table.len(), 8);
//! println!("{}", table);
//!
//! let rejected = analyze("(P^Q))")?;
//! for message in rejected.messages() {
//!     println!("{}", message);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Problems in the input are [`Diagnostic`]s inside an `Ok` [`Analysis`]. The
//! validator only checks immediate neighbours, so a few odd inputs (`P^`, `(P)(Q)`,
//! a lone `<`) pass validation and then fail a later stage; those come back as an
//! [`AnalysisError`].
//!
//! ## Logging
//!
//! Every stage reports through [`tracing`] under an `analyze` span. The library never
//! installs a subscriber.

pub mod alphabet;
pub mod analysis;
pub mod error;
pub mod prefix;
pub mod table;
pub mod translate;
pub mod tree;
pub mod validate;

pub use analysis::{analyze, Analysis, Analyzer};
pub use error::AnalysisError;
pub use prefix::PrefixSequence;
pub use table::{TruthRow, TruthTable};
pub use tree::ExprTree;
pub use validate::{Diagnostic, DiagnosticKind, UnclosedBracketReport};

/// Configuration for an [`Analyzer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// How leftover openers are cited in unclosed-bracket diagnostics
    pub unclosed_bracket_report: UnclosedBracketReport,
    /// Generate the truth table for accepted formulas
    pub truth_table: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            unclosed_bracket_report: UnclosedBracketReport::Opener,
            truth_table: true,
        }
    }
}

impl AnalyzerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::new();
        assert_eq!(config.unclosed_bracket_report, UnclosedBracketReport::Opener);
        assert!(config.truth_table);
    }

    #[test]
    fn test_analyzer_keeps_config() {
        let config = AnalyzerConfig {
            truth_table: false,
            ..Default::default()
        };
        let analyzer = Analyzer::new(config.clone());
        assert_eq!(analyzer.config(), &config);
    }
}
