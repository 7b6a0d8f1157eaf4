//! Alphabet and symbol tables
//!
//! Every table here is immutable data shared by all analyses. Two symbol sets are
//! involved:
//!
//! - the **input** alphabet the validator accepts: variables, the shorthand
//!   connectives `~ ^ v > <`, three bracket pairs and the constants `V`/`F`;
//! - the **canonical** alphabet produced by translation: `¬ ∧ v → ↔` in place of
//!   the shorthand connectives, with everything else unchanged.
//!
//! `F` and `V` are constants, so they are missing from [`VARIABLES`]; lowercase
//! `v` is disjunction.

use serde::Serialize;
use std::fmt;

/// Characters usable as propositional variables
pub const VARIABLES: &str = "ABCDEGHIJKLMNOPQRSTUWXYZ";

/// Shorthand connective characters accepted in raw input
pub const CONNECTIVES: &str = "^v~><";

/// Logical constants: `V` (true) and `F` (false)
pub const CONSTANTS: &str = "FV";

/// Bracket pairs as `(opener, closer)`
pub const BRACKETS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

/// Shorthand negation in raw input
pub const NEGATION: char = '~';

/// Shorthand to canonical rewrites, applied in this order.
///
/// `<>` precedes `>` so the bi-implication is never split into `<` and `→`.
pub const TRANSLATIONS: [(&str, &str); 4] = [("~", "¬"), ("^", "∧"), ("<>", "↔"), (">", "→")];

/// Canonical negation symbol
pub const NOT_SYMBOL: char = '¬';

/// Precedence of negation; binds tighter than every binary connective
pub const NOT_PRECEDENCE: u8 = 5;

pub fn is_variable(c: char) -> bool {
    VARIABLES.contains(c)
}

pub fn is_connective(c: char) -> bool {
    CONNECTIVES.contains(c)
}

pub fn is_constant(c: char) -> bool {
    CONSTANTS.contains(c)
}

pub fn is_opener(c: char) -> bool {
    BRACKETS.iter().any(|&(open, _)| open == c)
}

pub fn is_closer(c: char) -> bool {
    BRACKETS.iter().any(|&(_, close)| close == c)
}

/// Opener expected for the given closer
pub fn opener_for(closer: char) -> Option<char> {
    BRACKETS
        .iter()
        .find(|&&(_, close)| close == closer)
        .map(|&(open, _)| open)
}

/// Whether `c` belongs to the input alphabet at all
pub fn in_alphabet(c: char) -> bool {
    is_variable(c) || is_connective(c) || is_constant(c) || is_opener(c) || is_closer(c)
}

/// Binary connectives in canonical form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    /// Conjunction `∧`
    And,
    /// Disjunction `v`
    Or,
    /// Implication `→`
    Implies,
    /// Bi-implication `↔`
    Iff,
}

impl BinaryOp {
    /// Canonical display symbol
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::And => '∧',
            BinaryOp::Or => 'v',
            BinaryOp::Implies => '→',
            BinaryOp::Iff => '↔',
        }
    }

    /// Parse a canonical symbol
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '∧' => Some(BinaryOp::And),
            'v' => Some(BinaryOp::Or),
            '→' => Some(BinaryOp::Implies),
            '↔' => Some(BinaryOp::Iff),
            _ => None,
        }
    }

    /// Conversion precedence; higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::And => 4,
            BinaryOp::Or => 3,
            BinaryOp::Implies => 2,
            BinaryOp::Iff => 1,
        }
    }

    /// Truth function of the connective
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            BinaryOp::And => left && right,
            BinaryOp::Or => left || right,
            BinaryOp::Implies => !left || right,
            BinaryOp::Iff => left == right,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Classification of a single character of a canonical formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Variable(char),
    Constant(bool),
    Not,
    Binary(BinaryOp),
    Open,
    Close,
}

impl Symbol {
    /// Classify a canonical character, `None` for anything outside the canonical alphabet
    pub fn classify(c: char) -> Option<Self> {
        match c {
            'V' => Some(Symbol::Constant(true)),
            'F' => Some(Symbol::Constant(false)),
            NOT_SYMBOL => Some(Symbol::Not),
            c if is_variable(c) => Some(Symbol::Variable(c)),
            c if is_opener(c) => Some(Symbol::Open),
            c if is_closer(c) => Some(Symbol::Close),
            c => BinaryOp::from_symbol(c).map(Symbol::Binary),
        }
    }

    /// Precedence for connectives, `None` for operands and brackets
    pub fn precedence(self) -> Option<u8> {
        match self {
            Symbol::Not => Some(NOT_PRECEDENCE),
            Symbol::Binary(op) => Some(op.precedence()),
            _ => None,
        }
    }
}
