//! Analysis sessions
//!
//! [`Analyzer`] runs the whole pipeline for one formula: validation, translation,
//! prefix conversion, tree construction and truth-table generation. The result is
//! an [`Analysis`], the complete output surface handed back to the caller.

use crate::error::AnalysisError;
use crate::prefix::{to_prefix, PrefixSequence};
use crate::table::TruthTable;
use crate::translate::translate;
use crate::tree::ExprTree;
use crate::validate::{validate_with, Diagnostic};
use crate::AnalyzerConfig;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::{debug, debug_span, info, warn};

/// Everything derived from one input formula
///
/// A rejected formula carries its diagnostics and no derived fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// The raw input
    pub formula: String,
    /// Problems found by the validator, in scan order
    pub diagnostics: Vec<Diagnostic>,
    /// Formula rewritten with canonical connectives
    pub canonical: Option<String>,
    pub prefix: Option<PrefixSequence>,
    /// `None` when rejected or when the formula has no operands
    pub tree: Option<ExprTree>,
    /// `None` when rejected or when table generation is disabled
    pub truth_table: Option<TruthTable>,
}

impl Analysis {
    fn rejected(formula: &str, diagnostics: Vec<Diagnostic>) -> Self {
        Analysis {
            formula: formula.to_string(),
            diagnostics,
            canonical: None,
            prefix: None,
            tree: None,
            truth_table: None,
        }
    }

    /// Whether the validator accepted the formula
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostic messages in scan order
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(Diagnostic::message).collect()
    }
}

impl Serialize for Analysis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Analysis", 7)?;
        state.serialize_field("formula", &self.formula)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("diagnostics", &self.diagnostics)?;
        state.serialize_field("canonical", &self.canonical)?;
        state.serialize_field("prefix", &self.prefix)?;
        state.serialize_field("tree", &self.tree)?;
        state.serialize_field("truth_table", &self.truth_table)?;
        state.end()
    }
}

/// Runs the analysis pipeline with a fixed configuration
///
/// An analyzer holds no state between calls, so one instance can serve any number
/// of formulas, from any number of threads.
///
/// # Examples
///
/// ```
/// use prop_analyzer::{Analyzer, AnalyzerConfig};
///
/// # fn main() -> Result<(), prop_analyzer::AnalysisError> {
/// let analyzer = Analyzer::new(AnalyzerConfig {
///     truth_table: false,
///     ..Default::default()
/// });
///
/// let analysis = analyzer.analyze("((PvQ)>R)<>P")?;
/// assert!(analysis.is_valid());
/// assert_eq!(analysis.canonical.as_deref(), Some("((PvQ)→R)↔P"));
/// assert_eq!(analysis.prefix.unwrap().to_string(), "↔→vPQRP");
/// assert!(analysis.truth_table.is_none());
///
/// let rejected = analyzer.analyze("(P^Q))")?;
/// assert!(!rejected.is_valid());
/// assert!(rejected.canonical.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Analyzer { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze one formula from start to finish
    ///
    /// Validation problems are not errors: they come back inside an `Ok` analysis
    /// and stop the pipeline before translation.
    ///
    /// # Errors
    ///
    /// An [`AnalysisError`] when a later stage hits an internal-consistency fault on
    /// a formula the validator accepted, such as `P^` or `(P)(Q)`.
    pub fn analyze(&self, formula: &str) -> Result<Analysis, AnalysisError> {
        let span = debug_span!("analyze", formula = %formula);
        let _guard = span.enter();

        let diagnostics = validate_with(formula, self.config.unclosed_bracket_report);
        if !diagnostics.is_empty() {
            info!(diagnostics = diagnostics.len(), "formula rejected");
            return Ok(Analysis::rejected(formula, diagnostics));
        }

        self.run_stages(formula).map_err(|err| {
            warn!(error = %err, "analysis aborted");
            err
        })
    }

    fn run_stages(&self, formula: &str) -> Result<Analysis, AnalysisError> {
        let canonical = translate(formula);
        debug!(%canonical, "translated");

        let prefix = to_prefix(&canonical)?;
        debug!(%prefix, tokens = prefix.len(), "converted to prefix notation");

        let tree = if prefix.is_empty() {
            None
        } else {
            Some(ExprTree::from_prefix(&prefix)?)
        };
        if let Some(tree) = &tree {
            debug!(rendered = %tree, depth = tree.depth(), "built expression tree");
        }

        let truth_table = if self.config.truth_table {
            let table = TruthTable::generate(&canonical, tree.as_ref())?;
            debug!(
                rows = table.len(),
                columns = table.columns().len(),
                "generated truth table"
            );
            Some(table)
        } else {
            None
        };

        info!("formula accepted");
        Ok(Analysis {
            formula: formula.to_string(),
            diagnostics: Vec::new(),
            canonical: Some(canonical),
            prefix: Some(prefix),
            tree,
            truth_table,
        })
    }
}

/// Analyze a formula with the default configuration
///
/// ```
/// # fn main() -> Result<(), prop_analyzer::AnalysisError> {
/// let analysis = prop_analyzer::analyze("~P")?;
/// assert_eq!(analysis.canonical.as_deref(), Some("¬P"));
/// # Ok(())
/// # }
/// ```
pub fn analyze(formula: &str) -> Result<Analysis, AnalysisError> {
    Analyzer::default().analyze(formula)
}
