//! Expression trees built from prefix notation
//!
//! An [`ExprTree`] is an owned binary tree: leaves hold a variable or a constant,
//! negation nodes hold one child and every other connective holds two. Children
//! belong exclusively to their parent.
//!
//! # Quick Start
//!
//! ```
//! use prop_analyzer::prefix::to_prefix;
//! use prop_analyzer::tree::{Assignment, ExprTree};
//!
//! # fn main() -> Result<(), prop_analyzer::AnalysisError> {
//! let prefix = to_prefix("P→F")?;
//! let tree = ExprTree::from_prefix(&prefix)?;
//! assert_eq!(tree.to_string(), "(P → F)");
//!
//! let mut assignment = Assignment::new();
//! assignment.insert('P', true);
//! assert!(!tree.evaluate(&assignment)?);
//!
//! assignment.insert('P', false);
//! assert!(tree.evaluate(&assignment)?);
//! # Ok(())
//! # }
//! ```

mod build;
mod display;
mod eval;
mod subexpr;

pub use build::Cursor;
pub use eval::Assignment;
pub use subexpr::SubexpressionMap;

use crate::alphabet::{BinaryOp, NOT_SYMBOL};
use std::collections::BTreeSet;

/// A node of a propositional expression tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprTree {
    /// A propositional variable
    Variable(char),
    /// `V` (true) or `F` (false)
    Constant(bool),
    /// Negation of its only child
    Not(Box<ExprTree>),
    /// A binary connective; left/right order is significant
    Binary {
        op: BinaryOp,
        left: Box<ExprTree>,
        right: Box<ExprTree>,
    },
}

/// Node shape passed to [`ExprTree::fold`], carrying the children's results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode<T> {
    Variable(char),
    Constant(bool),
    Not(T),
    Binary(BinaryOp, T, T),
}

impl ExprTree {
    pub fn variable(name: char) -> Self {
        ExprTree::Variable(name)
    }

    pub fn constant(value: bool) -> Self {
        ExprTree::Constant(value)
    }

    pub fn not(inner: ExprTree) -> Self {
        ExprTree::Not(Box::new(inner))
    }

    pub fn binary(op: BinaryOp, left: ExprTree, right: ExprTree) -> Self {
        ExprTree::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The canonical character this node was built from
    pub fn token(&self) -> char {
        match self {
            ExprTree::Variable(name) => *name,
            ExprTree::Constant(true) => 'V',
            ExprTree::Constant(false) => 'F',
            ExprTree::Not(_) => NOT_SYMBOL,
            ExprTree::Binary { op, .. } => op.symbol(),
        }
    }

    /// First child: the operand of a negation or the left side of a binary node
    pub fn left(&self) -> Option<&ExprTree> {
        match self {
            ExprTree::Not(inner) => Some(inner),
            ExprTree::Binary { left, .. } => Some(left),
            _ => None,
        }
    }

    pub fn right(&self) -> Option<&ExprTree> {
        match self {
            ExprTree::Binary { right, .. } => Some(right),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ExprTree::Variable(_) | ExprTree::Constant(_))
    }

    /// Fold the tree bottom-up, left child before right child
    ///
    /// ```
    /// use prop_analyzer::tree::{ExprTree, TreeNode};
    /// use prop_analyzer::alphabet::BinaryOp;
    ///
    /// let tree = ExprTree::binary(
    ///     BinaryOp::And,
    ///     ExprTree::variable('P'),
    ///     ExprTree::not(ExprTree::variable('Q')),
    /// );
    /// let connectives = tree.fold(&|node: TreeNode<usize>| match node {
    ///     TreeNode::Variable(_) | TreeNode::Constant(_) => 0,
    ///     TreeNode::Not(inner) => inner + 1,
    ///     TreeNode::Binary(_, left, right) => left + right + 1,
    /// });
    /// assert_eq!(connectives, 2);
    /// ```
    pub fn fold<T, F>(&self, f: &F) -> T
    where
        F: Fn(TreeNode<T>) -> T,
    {
        match self {
            ExprTree::Variable(name) => f(TreeNode::Variable(*name)),
            ExprTree::Constant(value) => f(TreeNode::Constant(*value)),
            ExprTree::Not(inner) => {
                let inner = inner.fold(f);
                f(TreeNode::Not(inner))
            }
            ExprTree::Binary { op, left, right } => {
                let left = left.fold(f);
                let right = right.fold(f);
                f(TreeNode::Binary(*op, left, right))
            }
        }
    }

    /// Distinct variables appearing in the tree, sorted
    pub fn variables(&self) -> BTreeSet<char> {
        self.fold(&|node| match node {
            TreeNode::Variable(name) => BTreeSet::from([name]),
            TreeNode::Constant(_) => BTreeSet::new(),
            TreeNode::Not(inner) => inner,
            TreeNode::Binary(_, mut left, right) => {
                left.extend(right);
                left
            }
        })
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        self.fold(&|node: TreeNode<usize>| match node {
            TreeNode::Variable(_) | TreeNode::Constant(_) => 1,
            TreeNode::Not(inner) => inner + 1,
            TreeNode::Binary(_, left, right) => left.max(right) + 1,
        })
    }

    /// Total number of nodes, equal to the length of the prefix sequence
    pub fn size(&self) -> usize {
        self.fold(&|node: TreeNode<usize>| match node {
            TreeNode::Variable(_) | TreeNode::Constant(_) => 1,
            TreeNode::Not(inner) => inner + 1,
            TreeNode::Binary(_, left, right) => left + right + 1,
        })
    }
}
