//! Evaluation of expression trees under a variable assignment

use super::ExprTree;
use crate::error::AnalysisError;
use std::collections::BTreeMap;

/// Truth value bound to each variable for one evaluation
pub type Assignment = BTreeMap<char, bool>;

impl ExprTree {
    /// Evaluate the tree under `assignment`
    ///
    /// Both operands of a binary connective are always evaluated.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::UnboundVariable`] when a variable of the tree has no value in
    /// `assignment`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prop_analyzer::alphabet::BinaryOp;
    /// use prop_analyzer::tree::{Assignment, ExprTree};
    ///
    /// let tree = ExprTree::binary(BinaryOp::Iff, ExprTree::variable('P'), ExprTree::constant(false));
    /// let assignment = Assignment::from([('P', false)]);
    /// assert_eq!(tree.evaluate(&assignment), Ok(true));
    /// ```
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, AnalysisError> {
        match self {
            ExprTree::Constant(value) => Ok(*value),
            ExprTree::Variable(name) => assignment
                .get(name)
                .copied()
                .ok_or(AnalysisError::UnboundVariable { variable: *name }),
            ExprTree::Not(inner) => Ok(!inner.evaluate(assignment)?),
            ExprTree::Binary { op, left, right } => {
                let left = left.evaluate(assignment)?;
                let right = right.evaluate(assignment)?;
                Ok(op.apply(left, right))
            }
        }
    }
}
