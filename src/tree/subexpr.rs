//! Text-keyed subexpression collection
//!
//! Subexpressions are identified by their rendering, not by node identity: two
//! different subtrees that render the same collapse into one entry, and the first
//! one met in post-order is kept. Every node counts, leaves and the root included.

use super::ExprTree;
use crate::alphabet::NOT_SYMBOL;
use std::collections::HashMap;
use std::sync::Arc;

/// Ordered map from rendered subexpression text to the subtree it came from
///
/// Keeps both insertion order (Vec) and fast text lookup (HashMap).
#[derive(Debug, Clone, Default)]
pub struct SubexpressionMap<'t> {
    entries: Vec<(Arc<str>, &'t ExprTree)>,
    index: HashMap<Arc<str>, usize>,
}

impl<'t> SubexpressionMap<'t> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the text is already present; returns whether it was added
    fn insert(&mut self, text: String, node: &'t ExprTree) -> bool {
        if self.index.contains_key(text.as_str()) {
            return false;
        }
        let key: Arc<str> = Arc::from(text);
        self.index.insert(Arc::clone(&key), self.entries.len());
        self.entries.push((key, node));
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Subtree registered under `text`
    pub fn get(&self, text: &str) -> Option<&'t ExprTree> {
        self.index.get(text).map(|&i| self.entries[i].1)
    }

    /// Insertion position of `text`
    pub fn position(&self, text: &str) -> Option<usize> {
        self.index.get(text).copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Arc<str>> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &'t ExprTree)> {
        self.entries.iter().map(|(key, node)| (key.as_ref(), *node))
    }
}

impl ExprTree {
    /// Collect every subtree in post-order (left, right, self)
    ///
    /// ```
    /// use prop_analyzer::prefix::PrefixSequence;
    /// use prop_analyzer::tree::ExprTree;
    ///
    /// # fn main() -> Result<(), prop_analyzer::AnalysisError> {
    /// let tree = ExprTree::from_prefix(&PrefixSequence::from("∧¬P¬P"))?;
    /// let map = tree.subexpressions();
    /// let keys: Vec<&str> = map.iter().map(|(text, _)| text).collect();
    /// assert_eq!(keys, vec!["P", "(¬P)", "((¬P) ∧ (¬P))"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn subexpressions(&self) -> SubexpressionMap<'_> {
        let mut map = SubexpressionMap::new();
        self.collect_into(&mut map);
        map
    }

    /// Registers every node and returns this subtree's rendering, built from the
    /// children's renderings so no subtree is rendered twice
    fn collect_into<'t>(&'t self, map: &mut SubexpressionMap<'t>) -> String {
        let text = match self {
            ExprTree::Variable(_) | ExprTree::Constant(_) => self.token().to_string(),
            ExprTree::Not(inner) => {
                let inner = inner.collect_into(map);
                format!("({}{})", NOT_SYMBOL, inner)
            }
            ExprTree::Binary { op, left, right } => {
                let left = left.collect_into(map);
                let right = right.collect_into(map);
                format!("({} {} {})", left, op, right)
            }
        };
        map.insert(text.clone(), self);
        text
    }
}
