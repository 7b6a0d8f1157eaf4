//! Structural validation of raw formulas
//!
//! The validator scans the input once, left to right, classifying each character
//! and checking it against its immediate neighbours. Grammar rules are encoded as
//! adjacency checks rather than a formal grammar, and every problem found is
//! collected so the caller can report them all at once.
//!
//! ```
//! use prop_analyzer::validate::{validate, DiagnosticKind};
//!
//! assert!(validate("(P^Q)>R").is_empty());
//!
//! let diagnostics = validate("AB");
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].position, Some(1));
//! assert!(matches!(
//!     diagnostics[0].kind,
//!     DiagnosticKind::VariableAfterVariable { .. }
//! ));
//! ```

use crate::alphabet::{
    in_alphabet, is_closer, is_connective, is_constant, is_opener, is_variable, opener_for,
    NEGATION,
};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// How leftover openers are reported once the scan has finished
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnclosedBracketReport {
    /// Cite each leftover opener's own character and position
    #[default]
    Opener,
    /// Cite the scan's final character and index for every leftover opener,
    /// matching the behaviour of the legacy analyzer
    ScanEnd,
}

/// What went wrong at a position of the formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Character outside the input alphabet
    InvalidCharacter { ch: char },
    /// Closer with an empty bracket stack
    UnmatchedCloser { ch: char },
    /// Closer whose partner is not the most recent opener
    MismatchedBracket {
        ch: char,
        opener: char,
        opener_position: usize,
    },
    /// `~` after an operand or a closer
    MisplacedNegation,
    /// Binary connective as the first character
    ConnectiveAtStart { ch: char },
    /// Binary connective right after another connective
    ConsecutiveConnectives { previous_position: usize },
    /// Binary connective right before a closer
    IncompleteSubexpression { ch: char },
    VariableAfterVariable { ch: char, previous: char },
    VariableAfterConstant { ch: char, previous: char },
    VariableBeforeOpener { ch: char, next: char },
    VariableAfterCloser { ch: char, previous: char },
    ConstantAfterVariable { ch: char, previous: char },
    ConstantAfterConstant { ch: char, previous: char },
    ConstantBeforeOpener { ch: char, next: char },
    ConstantAfterCloser { ch: char, previous: char },
    /// Opener still on the stack when the scan ends
    UnclosedBracket { ch: char },
}

impl DiagnosticKind {
    /// Stable machine-readable identifier
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::InvalidCharacter { .. } => "invalid_character",
            DiagnosticKind::UnmatchedCloser { .. } => "unmatched_closer",
            DiagnosticKind::MismatchedBracket { .. } => "mismatched_bracket",
            DiagnosticKind::MisplacedNegation => "misplaced_negation",
            DiagnosticKind::ConnectiveAtStart { .. } => "connective_at_start",
            DiagnosticKind::ConsecutiveConnectives { .. } => "consecutive_connectives",
            DiagnosticKind::IncompleteSubexpression { .. } => "incomplete_subexpression",
            DiagnosticKind::VariableAfterVariable { .. } => "variable_after_variable",
            DiagnosticKind::VariableAfterConstant { .. } => "variable_after_constant",
            DiagnosticKind::VariableBeforeOpener { .. } => "variable_before_opener",
            DiagnosticKind::VariableAfterCloser { .. } => "variable_after_closer",
            DiagnosticKind::ConstantAfterVariable { .. } => "constant_after_variable",
            DiagnosticKind::ConstantAfterConstant { .. } => "constant_after_constant",
            DiagnosticKind::ConstantBeforeOpener { .. } => "constant_before_opener",
            DiagnosticKind::ConstantAfterCloser { .. } => "constant_after_closer",
            DiagnosticKind::UnclosedBracket { .. } => "unclosed_bracket",
        }
    }
}

/// A single problem found in a formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 0-based character index the diagnostic refers to, if any
    pub position: Option<usize>,
}

impl Diagnostic {
    fn at(kind: DiagnosticKind, position: usize) -> Self {
        Diagnostic {
            kind,
            position: Some(position),
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Renders " at position N" when a position is known
struct At(Option<usize>);

impl fmt::Display for At {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(i) => write!(f, " at position {}", i),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = At(self.position);
        match &self.kind {
            DiagnosticKind::InvalidCharacter { ch } => {
                write!(f, "Invalid character '{}'{}.", ch, at)
            }
            DiagnosticKind::UnmatchedCloser { ch } => {
                write!(f, "Bracket '{}'{} has no matching opener.", ch, at)
            }
            DiagnosticKind::MismatchedBracket {
                ch,
                opener,
                opener_position,
            } => write!(
                f,
                "Bracket '{}'{} does not match opener '{}' at position {}.",
                ch, at, opener, opener_position
            ),
            DiagnosticKind::MisplacedNegation => {
                write!(f, "Negation '{}'{} is in an invalid position.", NEGATION, at)
            }
            DiagnosticKind::ConnectiveAtStart { ch } => write!(
                f,
                "Connective '{}' at the start of the formula is not allowed.",
                ch
            ),
            DiagnosticKind::ConsecutiveConnectives { previous_position } => match self.position {
                Some(i) => write!(
                    f,
                    "Two consecutive connectives at positions {} and {}.",
                    previous_position, i
                ),
                None => write!(
                    f,
                    "Two consecutive connectives after position {}.",
                    previous_position
                ),
            },
            DiagnosticKind::IncompleteSubexpression { ch } => write!(
                f,
                "Connective '{}'{} does not form a valid sub-expression.",
                ch, at
            ),
            DiagnosticKind::VariableAfterVariable { ch, previous } => write!(
                f,
                "Variable '{}'{} follows another variable ({}).",
                ch, at, previous
            ),
            DiagnosticKind::VariableAfterConstant { ch, previous } => write!(
                f,
                "Variable '{}'{} follows a logical constant ({}).",
                ch, at, previous
            ),
            DiagnosticKind::VariableBeforeOpener { ch, next } => {
                write!(f, "Variable '{}'{} cannot precede '{}'.", ch, at, next)
            }
            DiagnosticKind::VariableAfterCloser { ch, previous } => {
                write!(f, "Variable '{}'{} cannot follow '{}'.", ch, at, previous)
            }
            DiagnosticKind::ConstantAfterVariable { ch, previous } => write!(
                f,
                "Constant '{}'{} follows a variable ({}).",
                ch, at, previous
            ),
            DiagnosticKind::ConstantAfterConstant { ch, previous } => write!(
                f,
                "Constant '{}'{} follows another constant ({}).",
                ch, at, previous
            ),
            DiagnosticKind::ConstantBeforeOpener { ch, next } => {
                write!(f, "Constant '{}'{} cannot precede '{}'.", ch, at, next)
            }
            DiagnosticKind::ConstantAfterCloser { ch, previous } => {
                write!(f, "Constant '{}'{} cannot follow '{}'.", ch, at, previous)
            }
            DiagnosticKind::UnclosedBracket { ch } => {
                write!(f, "Bracket '{}'{} is never closed.", ch, at)
            }
        }
    }
}

impl Serialize for Diagnostic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Diagnostic", 3)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.message())?;
        state.serialize_field("position", &self.position)?;
        state.end()
    }
}

/// Validate a formula, reporting leftover openers at their own position
pub fn validate(formula: &str) -> Vec<Diagnostic> {
    validate_with(formula, UnclosedBracketReport::default())
}

/// Validate a formula with an explicit unclosed-bracket reporting mode
pub fn validate_with(formula: &str, report: UnclosedBracketReport) -> Vec<Diagnostic> {
    let chars: Vec<char> = formula.chars().collect();
    let mut diagnostics = Vec::new();
    let mut stack: Vec<(char, usize)> = Vec::new();

    for (i, &c) in chars.iter().enumerate() {
        let previous = i.checked_sub(1).map(|j| chars[j]);
        let next = chars.get(i + 1).copied();

        let kind = if !in_alphabet(c) {
            Some(DiagnosticKind::InvalidCharacter { ch: c })
        } else if is_opener(c) {
            stack.push((c, i));
            None
        } else if is_closer(c) {
            check_closer(c, &mut stack)
        } else if is_connective(c) {
            check_connective(c, i, previous, next)
        } else if is_variable(c) {
            check_variable(c, previous, next)
        } else {
            check_constant(c, previous, next)
        };

        if let Some(kind) = kind {
            diagnostics.push(Diagnostic::at(kind, i));
        }
    }

    let scan_end = chars.last().copied().map(|c| (c, chars.len() - 1));
    for (opener, position) in stack {
        let (ch, position) = match (report, scan_end) {
            (UnclosedBracketReport::ScanEnd, Some(end)) => end,
            _ => (opener, position),
        };
        diagnostics.push(Diagnostic::at(DiagnosticKind::UnclosedBracket { ch }, position));
    }

    diagnostics
}

fn check_closer(c: char, stack: &mut Vec<(char, usize)>) -> Option<DiagnosticKind> {
    let (opener, opener_position) = match stack.pop() {
        Some(top) => top,
        None => return Some(DiagnosticKind::UnmatchedCloser { ch: c }),
    };
    if opener_for(c) == Some(opener) {
        None
    } else {
        Some(DiagnosticKind::MismatchedBracket {
            ch: c,
            opener,
            opener_position,
        })
    }
}

fn check_connective(
    c: char,
    i: usize,
    previous: Option<char>,
    next: Option<char>,
) -> Option<DiagnosticKind> {
    if c == NEGATION {
        return match previous {
            None => None,
            Some(p) if is_connective(p) || is_opener(p) => None,
            Some(_) => Some(DiagnosticKind::MisplacedNegation),
        };
    }

    match previous {
        None => Some(DiagnosticKind::ConnectiveAtStart { ch: c }),
        // `<` followed by `>` spells the bi-implication
        Some(p) if is_connective(p) => (p != '<' || c != '>').then(|| {
            DiagnosticKind::ConsecutiveConnectives {
                previous_position: i - 1,
            }
        }),
        Some(_) if next.is_some_and(is_closer) => {
            Some(DiagnosticKind::IncompleteSubexpression { ch: c })
        }
        Some(_) => None,
    }
}

fn check_variable(c: char, previous: Option<char>, next: Option<char>) -> Option<DiagnosticKind> {
    match (previous, next) {
        (Some(p), _) if is_variable(p) => Some(DiagnosticKind::VariableAfterVariable {
            ch: c,
            previous: p,
        }),
        (Some(p), _) if is_constant(p) => Some(DiagnosticKind::VariableAfterConstant {
            ch: c,
            previous: p,
        }),
        (_, Some(n)) if is_opener(n) => Some(DiagnosticKind::VariableBeforeOpener { ch: c, next: n }),
        (Some(p), _) if is_closer(p) => Some(DiagnosticKind::VariableAfterCloser {
            ch: c,
            previous: p,
        }),
        _ => None,
    }
}

fn check_constant(c: char, previous: Option<char>, next: Option<char>) -> Option<DiagnosticKind> {
    match (previous, next) {
        (Some(p), _) if is_variable(p) => Some(DiagnosticKind::ConstantAfterVariable {
            ch: c,
            previous: p,
        }),
        (Some(p), _) if is_constant(p) => Some(DiagnosticKind::ConstantAfterConstant {
            ch: c,
            previous: p,
        }),
        (_, Some(n)) if is_opener(n) => Some(DiagnosticKind::ConstantBeforeOpener { ch: c, next: n }),
        (Some(p), _) if is_closer(p) => Some(DiagnosticKind::ConstantAfterCloser {
            ch: c,
            previous: p,
        }),
        _ => None,
    }
}
