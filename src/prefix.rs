//! Infix to prefix (Polish) notation conversion
//!
//! The converter walks the canonical formula from right to left with an operator
//! stack, then reverses what it produced. Reading right to left, a closer opens a
//! group and an opener ends it, so both are handled without distinguishing the
//! three bracket kinds; the validator already guaranteed correct nesting.

use crate::alphabet::{Symbol, NOT_PRECEDENCE};
use crate::error::AnalysisError;
use serde::{Serialize, Serializer};
use std::fmt;

/// A formula in prefix order, one character per token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixSequence {
    tokens: Vec<char>,
}

impl PrefixSequence {
    pub fn tokens(&self) -> &[char] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<&str> for PrefixSequence {
    fn from(text: &str) -> Self {
        PrefixSequence {
            tokens: text.chars().collect(),
        }
    }
}

impl From<Vec<char>> for PrefixSequence {
    fn from(tokens: Vec<char>) -> Self {
        PrefixSequence { tokens }
    }
}

impl fmt::Display for PrefixSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tokens.iter().try_for_each(|token| write!(f, "{}", token))
    }
}

impl Serialize for PrefixSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy)]
enum StackEntry {
    /// Start of a bracketed group (a closer in reading order)
    Boundary,
    Connective { token: char, precedence: u8 },
}

/// Convert a canonical formula into prefix notation
///
/// # Errors
///
/// Returns [`AnalysisError::UnexpectedToken`] for characters outside the canonical
/// alphabet, such as a lone `<` that the validator let through.
///
/// # Examples
///
/// ```
/// use prop_analyzer::prefix::to_prefix;
///
/// let prefix = to_prefix("((PvQ)→R)↔P").unwrap();
/// assert_eq!(prefix.to_string(), "↔→vPQRP");
/// assert_eq!(prefix.len(), 7);
/// ```
pub fn to_prefix(canonical: &str) -> Result<PrefixSequence, AnalysisError> {
    let chars: Vec<char> = canonical.chars().collect();
    let mut output = Vec::with_capacity(chars.len());
    let mut stack: Vec<StackEntry> = Vec::new();

    for (position, &c) in chars.iter().enumerate().rev() {
        let symbol = Symbol::classify(c)
            .ok_or(AnalysisError::UnexpectedToken { token: c, position })?;
        match symbol {
            Symbol::Variable(_) | Symbol::Constant(_) => output.push(c),
            Symbol::Not => push_connective(&mut stack, &mut output, c, NOT_PRECEDENCE),
            Symbol::Binary(op) => push_connective(&mut stack, &mut output, c, op.precedence()),
            Symbol::Close => stack.push(StackEntry::Boundary),
            Symbol::Open => {
                while let Some(entry) = stack.pop() {
                    match entry {
                        StackEntry::Boundary => break,
                        StackEntry::Connective { token, .. } => output.push(token),
                    }
                }
            }
        }
    }

    while let Some(entry) = stack.pop() {
        if let StackEntry::Connective { token, .. } = entry {
            output.push(token);
        }
    }

    output.reverse();
    Ok(PrefixSequence::from(output))
}

/// Pop every stacked connective binding strictly tighter, then push `token`
fn push_connective(stack: &mut Vec<StackEntry>, output: &mut Vec<char>, token: char, precedence: u8) {
    while let Some(&StackEntry::Connective {
        token: top,
        precedence: top_precedence,
    }) = stack.last()
    {
        if top_precedence <= precedence {
            break;
        }
        output.push(top);
        stack.pop();
    }
    stack.push(StackEntry::Connective { token, precedence });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(canonical: &str) -> String {
        to_prefix(canonical).unwrap().to_string()
    }

    #[test]
    fn test_single_operand() {
        assert_eq!(prefix("P"), "P");
        assert_eq!(prefix("V"), "V");
    }

    #[test]
    fn test_empty_formula() {
        assert!(to_prefix("").unwrap().is_empty());
    }

    #[test]
    fn test_nested_example() {
        assert_eq!(prefix("((PvQ)→R)↔P"), "↔→vPQRP");
    }

    #[test]
    fn test_negation_binds_tightest() {
        assert_eq!(prefix("¬P∧Q"), "∧¬PQ");
        assert_eq!(prefix("P∧¬Q"), "∧P¬Q");
        assert_eq!(prefix("¬¬P"), "¬¬P");
        assert_eq!(prefix("¬(P∧Q)"), "¬∧PQ");
    }

    #[test]
    fn test_precedence_ladder() {
        assert_eq!(prefix("PvQ∧R"), "vP∧QR");
        assert_eq!(prefix("P∧QvR"), "v∧PQR");
        assert_eq!(prefix("P→QvR"), "→PvQR");
        assert_eq!(prefix("P↔Q→R"), "↔P→QR");
    }

    #[test]
    fn test_equal_precedence_groups_left() {
        assert_eq!(prefix("P→Q→R"), "→→PQR");
        assert_eq!(prefix("P∧Q∧R"), "∧∧PQR");
    }

    #[test]
    fn test_bracket_kinds_are_interchangeable() {
        assert_eq!(prefix("[P↔{Q}]"), "↔PQ");
        assert_eq!(prefix("(P∧Q)vR"), prefix("[P∧Q]vR"));
    }

    #[test]
    fn test_length_counts_non_bracket_tokens() {
        let canonical = "{(P→Q)∧[¬R]}";
        let tokens = canonical
            .chars()
            .filter(|c| !"()[]{}".contains(*c))
            .count();
        assert_eq!(to_prefix(canonical).unwrap().len(), tokens);
    }

    #[test]
    fn test_unknown_symbol_is_a_fault() {
        assert_eq!(
            to_prefix("P<Q"),
            Err(AnalysisError::UnexpectedToken {
                token: '<',
                position: 1
            })
        );
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&PrefixSequence::from("→PF")).unwrap();
        assert_eq!(json, "\"→PF\"");
    }
}
