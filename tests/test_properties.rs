//! Property-based tests for the analysis pipeline
//!
//! Fully parenthesized formulas are generated in the input alphabet, so every one of
//! them must pass validation and survive the whole pipeline.

use prop_analyzer::translate::translate;
use prop_analyzer::tree::TreeNode;
use prop_analyzer::validate::validate;
use prop_analyzer::{analyze, AnalysisError};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Strategies
// ============================================================================

/// Fully parenthesized formulas over four variables and both constants
fn formula() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        3 => prop::sample::select(vec!['P', 'Q', 'R', 'S']).prop_map(String::from),
        1 => prop::sample::select(vec!['V', 'F']).prop_map(String::from),
    ];
    leaf.prop_recursive(5, 48, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| format!("(~{})", e)),
            (
                inner.clone(),
                prop::sample::select(vec!["^", "v", ">", "<>"]),
                inner
            )
                .prop_map(|(l, op, r)| format!("({}{}{})", l, op, r)),
        ]
    })
}

/// Arbitrary strings over the input alphabet plus a few outsiders
fn noise() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select("PQVF^v~<>()[]{} #".chars().collect::<Vec<_>>()),
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Back to the input alphabet from a canonical rendering
fn to_shorthand(rendered: &str) -> String {
    rendered
        .replace(' ', "")
        .replace('¬', "~")
        .replace('∧', "^")
        .replace('↔', "<>")
        .replace('→', ">")
}

fn distinct_variables(formula: &str) -> usize {
    formula
        .chars()
        .filter(|c| "PQRS".contains(*c))
        .collect::<BTreeSet<_>>()
        .len()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn validation_is_deterministic(input in noise()) {
        prop_assert_eq!(validate(&input), validate(&input));
    }

    #[test]
    fn translation_is_idempotent(input in formula()) {
        let once = translate(&input);
        prop_assert_eq!(translate(&once), once);
    }

    #[test]
    fn generated_formulas_are_valid(input in formula()) {
        prop_assert!(validate(&input).is_empty());
    }

    #[test]
    fn rendering_round_trips(input in formula()) {
        let analysis = analyze(&input).unwrap();
        let tree = analysis.tree.as_ref().unwrap();
        prop_assert_eq!(to_shorthand(&tree.render()), input);
    }

    #[test]
    fn prefix_length_matches_tree_size(input in formula()) {
        let analysis = analyze(&input).unwrap();
        let prefix = analysis.prefix.as_ref().unwrap();
        let tree = analysis.tree.as_ref().unwrap();
        prop_assert_eq!(prefix.len(), tree.size());

        let operands = input.chars().filter(|c| "PQRSVF".contains(*c)).count();
        let connectives = input.chars().filter(|c| "~^v>".contains(*c)).count();
        prop_assert_eq!(prefix.len(), operands + connectives);
    }

    #[test]
    fn row_count_is_two_to_the_variables(input in formula()) {
        let analysis = analyze(&input).unwrap();
        let table = analysis.truth_table.as_ref().unwrap();
        prop_assert_eq!(table.len(), 1usize << distinct_variables(&input));
        prop_assert_eq!(table.variables().len(), distinct_variables(&input));
    }

    #[test]
    fn last_column_is_the_whole_formula(input in formula()) {
        let analysis = analyze(&input).unwrap();
        let tree = analysis.tree.as_ref().unwrap();
        let table = analysis.truth_table.as_ref().unwrap();
        let last = table.columns().last().unwrap();
        prop_assert_eq!(last.as_ref(), tree.render());
        let column = table.column(last).unwrap();
        prop_assert_eq!(column.as_slice(), table.outcomes());
    }

    #[test]
    fn tree_leaves_are_the_prefix_operands(input in formula()) {
        let analysis = analyze(&input).unwrap();
        let tree = analysis.tree.as_ref().unwrap();
        let leaves = tree.fold(&|node: TreeNode<Vec<char>>| match node {
            TreeNode::Variable(name) => vec![name],
            TreeNode::Constant(value) => vec![if value { 'V' } else { 'F' }],
            TreeNode::Not(inner) => inner,
            TreeNode::Binary(_, mut left, right) => {
                left.extend(right);
                left
            }
        });
        let operands: Vec<char> = analysis
            .prefix
            .as_ref()
            .unwrap()
            .tokens()
            .iter()
            .copied()
            .filter(|c| "PQRSVF".contains(*c))
            .collect();
        prop_assert_eq!(leaves, operands);
    }

    #[test]
    fn pipeline_never_panics(input in noise()) {
        match analyze(&input) {
            Ok(analysis) => {
                if !analysis.is_valid() {
                    prop_assert!(analysis.canonical.is_none());
                }
            }
            Err(
                AnalysisError::PrefixExhausted { .. }
                | AnalysisError::TrailingTokens { .. }
                | AnalysisError::UnexpectedToken { .. },
            ) => {}
            Err(other) => prop_assert!(false, "unexpected fault {:?}", other),
        }
    }
}
