//! Fully parenthesized rendering of expression trees

use super::ExprTree;
use crate::alphabet::NOT_SYMBOL;
use serde::{Serialize, Serializer};
use std::fmt;

impl ExprTree {
    /// Render the tree as fully parenthesized infix text
    ///
    /// Leaves render as their token, negation as `(¬X)` and binary connectives as
    /// `(L op R)`. The rendering doubles as the key identifying a subexpression.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Display formatting for expression trees
///
/// ```
/// use prop_analyzer::alphabet::BinaryOp;
/// use prop_analyzer::tree::ExprTree;
///
/// let tree = ExprTree::binary(
///     BinaryOp::Implies,
///     ExprTree::not(ExprTree::variable('P')),
///     ExprTree::constant(true),
/// );
/// assert_eq!(tree.to_string(), "((¬P) → V)");
/// ```
impl fmt::Display for ExprTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprTree::Variable(_) | ExprTree::Constant(_) => write!(f, "{}", self.token()),
            ExprTree::Not(inner) => write!(f, "({}{})", NOT_SYMBOL, inner),
            ExprTree::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}

/// Trees serialize as their rendering
impl Serialize for ExprTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
