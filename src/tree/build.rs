//! Tree construction from a prefix sequence

use super::ExprTree;
use crate::alphabet::Symbol;
use crate::error::AnalysisError;
use crate::prefix::PrefixSequence;

/// Read position over a prefix sequence, shared by every level of the recursion
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens: &'a [char],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [char]) -> Self {
        Cursor {
            tokens,
            position: 0,
        }
    }

    /// Number of tokens consumed so far
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Take the token under the cursor and advance past it
    fn advance(&mut self) -> Result<char, AnalysisError> {
        let token = self
            .tokens
            .get(self.position)
            .copied()
            .ok_or(AnalysisError::PrefixExhausted {
                position: self.position,
            })?;
        self.position += 1;
        Ok(token)
    }
}

impl ExprTree {
    /// Build a tree from a complete prefix sequence
    ///
    /// # Errors
    ///
    /// All failures are internal-consistency faults: the sequence running out while
    /// an operand is expected ([`AnalysisError::PrefixExhausted`]), tokens left over
    /// once the root is complete ([`AnalysisError::TrailingTokens`]) or a character
    /// outside the canonical alphabet ([`AnalysisError::UnexpectedToken`]).
    pub fn from_prefix(prefix: &PrefixSequence) -> Result<Self, AnalysisError> {
        let mut cursor = Cursor::new(prefix.tokens());
        let tree = Self::from_cursor(&mut cursor)?;
        if !cursor.is_exhausted() {
            return Err(AnalysisError::TrailingTokens {
                consumed: cursor.position(),
                total: prefix.len(),
            });
        }
        Ok(tree)
    }

    /// Build one subtree starting at the cursor, leaving the cursor just past it
    pub fn from_cursor(cursor: &mut Cursor<'_>) -> Result<Self, AnalysisError> {
        let position = cursor.position();
        let token = cursor.advance()?;
        match Symbol::classify(token) {
            Some(Symbol::Variable(name)) => Ok(ExprTree::Variable(name)),
            Some(Symbol::Constant(value)) => Ok(ExprTree::Constant(value)),
            Some(Symbol::Not) => Ok(ExprTree::not(Self::from_cursor(cursor)?)),
            Some(Symbol::Binary(op)) => {
                let left = Self::from_cursor(cursor)?;
                let right = Self::from_cursor(cursor)?;
                Ok(ExprTree::binary(op, left, right))
            }
            Some(Symbol::Open) | Some(Symbol::Close) | None => {
                Err(AnalysisError::UnexpectedToken { token, position })
            }
        }
    }
}
