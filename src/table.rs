//! Truth-table generation
//!
//! Columns are the formula's distinct variables in ascending order followed by
//! every other distinct subexpression in post-order, constants included, so the
//! whole formula is always the last column. Rows follow binary counting from
//! all-false to all-true with the last variable toggling fastest.
//!
//! ```
//! use prop_analyzer::analyze;
//!
//! # fn main() -> Result<(), prop_analyzer::AnalysisError> {
//! let analysis = analyze("P>Q")?;
//! let table = analysis.truth_table.as_ref().unwrap();
//!
//! assert_eq!(table.columns().len(), 3);
//! assert_eq!(table.len(), 4);
//!
//! let third = table.row(2).unwrap();
//! assert_eq!(third.get("P"), Some(true));
//! assert_eq!(third.get("Q"), Some(false));
//! assert_eq!(third.get("(P → Q)"), Some(false));
//! # Ok(())
//! # }
//! ```

use crate::alphabet::is_variable;
use crate::error::AnalysisError;
use crate::tree::{Assignment, ExprTree};
use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Complete truth table of a formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    columns: Vec<Arc<str>>,
    variable_count: usize,
    rows: Vec<Vec<bool>>,
    /// Value of the whole formula per row; empty when there is no tree
    outcomes: Vec<bool>,
}

/// One row of a [`TruthTable`], viewed as an ordered column → value mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthRow<'a> {
    columns: &'a [Arc<str>],
    values: &'a [bool],
}

impl<'a> TruthRow<'a> {
    /// Value of the named column
    pub fn get(&self, column: &str) -> Option<bool> {
        self.columns
            .iter()
            .position(|c| c.as_ref() == column)
            .map(|i| self.values[i])
    }

    pub fn values(&self) -> &'a [bool] {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(column, value)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, bool)> + 'a {
        let columns = self.columns;
        let values = self.values;
        columns.iter().map(|c| c.as_ref()).zip(values.iter().copied())
    }
}

impl TruthTable {
    /// Enumerate every assignment of the variables in `canonical`
    ///
    /// `tree` is `None` only for formulas without operands (the empty formula), which
    /// yield a single row with no columns.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::UnboundVariable`] if the tree uses a variable that does not
    /// occur in `canonical`.
    pub fn generate(canonical: &str, tree: Option<&ExprTree>) -> Result<Self, AnalysisError> {
        let variables: BTreeSet<char> = canonical.chars().filter(|&c| is_variable(c)).collect();
        let subexpressions = tree.map(ExprTree::subexpressions).unwrap_or_default();
        // variables already have their own columns
        let derived: Vec<(&str, &ExprTree)> = subexpressions
            .iter()
            .filter(|(_, node)| !matches!(node, ExprTree::Variable(_)))
            .collect();

        let columns: Vec<Arc<str>> = variables
            .iter()
            .map(|v| Arc::<str>::from(v.to_string()))
            .chain(derived.iter().map(|&(text, _)| Arc::<str>::from(text)))
            .collect();

        let count = variables.len();
        let row_count = 1usize << count;
        debug!(
            variables = count,
            subexpressions = derived.len(),
            rows = row_count,
            "generating truth table"
        );

        let mut rows = Vec::with_capacity(row_count);
        let mut outcomes = Vec::with_capacity(if tree.is_some() { row_count } else { 0 });
        for row in 0..row_count {
            let bits: Vec<bool> = (0..count).map(|j| (row >> (count - 1 - j)) & 1 == 1).collect();
            let assignment: Assignment = variables.iter().copied().zip(bits.iter().copied()).collect();

            let mut values = bits;
            values.reserve(derived.len());
            values.extend(evaluate_all(&derived, &assignment)?);
            rows.push(values);

            if let Some(tree) = tree {
                outcomes.push(tree.evaluate(&assignment)?);
            }
        }

        Ok(TruthTable {
            columns,
            variable_count: count,
            rows,
            outcomes,
        })
    }

    /// Column labels: variables first, then subexpressions
    pub fn columns(&self) -> &[Arc<str>] {
        &self.columns
    }

    pub fn variables(&self) -> &[Arc<str>] {
        &self.columns[..self.variable_count]
    }

    pub fn subexpressions(&self) -> &[Arc<str>] {
        &self.columns[self.variable_count..]
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: even a formula without variables has one row
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<TruthRow<'_>> {
        self.rows.get(index).map(|values| TruthRow {
            columns: &self.columns,
            values,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = TruthRow<'_>> {
        self.rows.iter().map(move |values| TruthRow {
            columns: &self.columns,
            values,
        })
    }

    /// Every value of the named column, top to bottom
    pub fn column(&self, name: &str) -> Option<Vec<bool>> {
        let index = self.columns.iter().position(|c| c.as_ref() == name)?;
        Some(self.rows.iter().map(|values| values[index]).collect())
    }

    /// Value of the whole formula per row
    pub fn outcomes(&self) -> &[bool] {
        &self.outcomes
    }

    /// True under every assignment
    pub fn is_tautology(&self) -> bool {
        !self.outcomes.is_empty() && self.outcomes.iter().all(|&v| v)
    }

    /// False under every assignment
    pub fn is_contradiction(&self) -> bool {
        !self.outcomes.is_empty() && self.outcomes.iter().all(|&v| !v)
    }

    pub fn is_satisfiable(&self) -> bool {
        self.outcomes.iter().any(|&v| v)
    }
}

fn evaluate_all(
    derived: &[(&str, &ExprTree)],
    assignment: &Assignment,
) -> Result<Vec<bool>, AnalysisError> {
    derived
        .iter()
        .map(|(_, node)| node.evaluate(assignment))
        .collect()
}

/// Aligned text grid with `T`/`F` cells
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.columns.is_empty() {
            return Ok(());
        }
        let widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();

        let header: Vec<&str> = self.columns.iter().map(|c| c.as_ref()).collect();
        writeln!(f, "{}", header.join(" | "))?;
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;

        for values in &self.rows {
            let cells: Vec<String> = values
                .iter()
                .zip(&widths)
                .map(|(&v, &width)| format!("{:^width$}", if v { "T" } else { "F" }))
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}

/// A row serializes as a column → value map in column order
impl Serialize for TruthRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, &value)?;
        }
        map.end()
    }
}

impl Serialize for TruthTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let columns: Vec<&str> = self.columns.iter().map(|c| c.as_ref()).collect();
        let rows: Vec<TruthRow<'_>> = self.rows().collect();
        let mut state = serializer.serialize_struct("TruthTable", 2)?;
        state.serialize_field("columns", &columns)?;
        state.serialize_field("rows", &rows)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::to_prefix;
    use crate::translate::translate;

    fn table_of(formula: &str) -> TruthTable {
        let canonical = translate(formula);
        let prefix = to_prefix(&canonical).unwrap();
        let tree = if prefix.is_empty() {
            None
        } else {
            Some(ExprTree::from_prefix(&prefix).unwrap())
        };
        TruthTable::generate(&canonical, tree.as_ref()).unwrap()
    }

    #[test]
    fn test_empty_formula_has_one_row_without_columns() {
        let table = table_of("");
        assert_eq!(table.len(), 1);
        assert!(table.columns().is_empty());
        assert!(table.row(0).unwrap().is_empty());
        assert!(table.outcomes().is_empty());
    }

    #[test]
    fn test_row_count_is_power_of_two() {
        assert_eq!(table_of("P").len(), 2);
        assert_eq!(table_of("P^Q").len(), 4);
        assert_eq!(table_of("(P^Q)>(RvP)").len(), 8);
        assert_eq!(table_of("V>F").len(), 1);
    }

    #[test]
    fn test_binary_counting_order() {
        let table = table_of("QvP");
        assert_eq!(table.column("P"), Some(vec![false, false, true, true]));
        assert_eq!(table.column("Q"), Some(vec![false, true, false, true]));
        assert_eq!(table.column("(Q v P)"), Some(vec![false, true, true, true]));
    }

    #[test]
    fn test_columns_variables_then_post_order() {
        let table = table_of("((PvQ)>R)<>P");
        let columns: Vec<&str> = table.columns().iter().map(|c| c.as_ref()).collect();
        assert_eq!(
            columns,
            vec!["P", "Q", "R", "(P v Q)", "((P v Q) → R)", "(((P v Q) → R) ↔ P)"]
        );
        assert_eq!(table.variables().len(), 3);
        assert_eq!(table.subexpressions().len(), 3);
    }

    #[test]
    fn test_row_as_mapping() {
        let table = table_of("P>F");
        let first = table.row(0).unwrap();
        let pairs: Vec<(&str, bool)> = first.iter().collect();
        assert_eq!(pairs, vec![("P", false), ("F", false), ("(P → F)", true)]);
        let second = table.row(1).unwrap();
        assert_eq!(second.get("(P → F)"), Some(false));
        assert_eq!(second.get("missing"), None);
        assert!(table.row(2).is_none());
    }

    #[test]
    fn test_constant_formula() {
        let table = table_of("V^F");
        assert_eq!(table.len(), 1);
        let columns: Vec<&str> = table.columns().iter().map(|c| c.as_ref()).collect();
        assert_eq!(columns, vec!["V", "F", "(V ∧ F)"]);
        assert_eq!(table.column("(V ∧ F)"), Some(vec![false]));
        assert!(table.is_contradiction());
    }

    #[test]
    fn test_lone_constant_has_its_own_column() {
        let table = table_of("V");
        let columns: Vec<&str> = table.columns().iter().map(|c| c.as_ref()).collect();
        assert_eq!(columns, vec!["V"]);
        assert_eq!(table.column("V"), Some(vec![true]));
        assert!(table.is_tautology());
        assert_eq!(table.to_string(), "V\n-\nT\n");

        let table = table_of("F");
        assert_eq!(table.column("F"), Some(vec![false]));
        assert!(table.is_contradiction());
    }

    #[test]
    fn test_constant_operand_gets_a_column() {
        let table = table_of("P>F");
        let columns: Vec<&str> = table.columns().iter().map(|c| c.as_ref()).collect();
        assert_eq!(columns, vec!["P", "F", "(P → F)"]);
        assert_eq!(table.column("F"), Some(vec![false, false]));
        assert_eq!(table.variables().len(), 1);
        assert_eq!(table.subexpressions().len(), 2);
    }

    #[test]
    fn test_repeated_variable_is_not_duplicated() {
        let table = table_of("P^P");
        let columns: Vec<&str> = table.columns().iter().map(|c| c.as_ref()).collect();
        assert_eq!(columns, vec!["P", "(P ∧ P)"]);
    }

    #[test]
    fn test_single_variable_outcome_follows_variable() {
        let table = table_of("P");
        assert_eq!(table.columns().len(), 1);
        assert_eq!(table.outcomes(), &[false, true]);
        assert!(table.is_satisfiable());
        assert!(!table.is_tautology());
    }

    #[test]
    fn test_classification() {
        assert!(table_of("Pv~P").is_tautology());
        assert!(table_of("P^~P").is_contradiction());
        assert!(!table_of("P^~P").is_satisfiable());
        assert!(table_of("P>Q").is_satisfiable());
        assert!(!table_of("P>Q").is_tautology());
    }

    #[test]
    fn test_unbound_variable_in_tree() {
        let tree = ExprTree::variable('Q');
        assert_eq!(
            TruthTable::generate("P", Some(&tree)),
            Err(AnalysisError::UnboundVariable { variable: 'Q' })
        );
    }

    #[test]
    fn test_display_grid() {
        let rendered = table_of("P^Q").to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "P | Q | (P ∧ Q)");
        assert_eq!(lines[1], "--+---+--------");
        assert_eq!(lines[2], "F | F |    F   ");
        assert_eq!(lines[5], "T | T |    T   ");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_serialize_columns_and_rows() {
        let json = serde_json::to_value(table_of("~P")).unwrap();
        assert_eq!(json["columns"], serde_json::json!(["P", "(¬P)"]));
        assert_eq!(
            json["rows"],
            serde_json::json!([{"P": false, "(¬P)": true}, {"P": true, "(¬P)": false}])
        );
    }

    #[test]
    fn test_serialized_row_keeps_column_order() {
        let table = table_of("Q>P");
        let row = serde_json::to_string(&table.row(1).unwrap()).unwrap();
        assert_eq!(row, r#"{"P":false,"Q":true,"(Q → P)":false}"#);
    }
}
