//! Truth-table comparison.
//!
//! [`compare_tables`] decides equality of two row sequences whatever shape
//! their rows have: a bare `bool`, a record with a single `output`, or a
//! record with an ordered list of named `outputs`. [`TableComparison`] is the detailed
//! row-by-row report for two [`TruthTable`]s over the same ordering.

use std::fmt;

use crate::error::Error;
use crate::table::TruthTable;
use crate::types::Assignment;

/// A truth-table row that yields one boolean output.
pub trait RowValue {
    fn value(&self) -> bool;
}

impl RowValue for bool {
    fn value(&self) -> bool {
        *self
    }
}

impl<T: RowValue + ?Sized> RowValue for &T {
    fn value(&self) -> bool {
        (**self).value()
    }
}

/// Row shapes produced by the different table producers.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Row {
    Bare(bool),
    Output { output: bool },
    /// Named outputs in the order they were given. The first one is the row
    /// value; no outputs reads as `false`.
    Outputs { outputs: Vec<(String, bool)> },
}

impl Row {
    pub fn output(output: bool) -> Self {
        Row::Output { output }
    }

    pub fn outputs<I, S>(outputs: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        Row::Outputs {
            outputs: outputs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl RowValue for Row {
    fn value(&self) -> bool {
        match self {
            Row::Bare(value) => *value,
            Row::Output { output } => *output,
            Row::Outputs { outputs } => outputs.first().map_or(false, |&(_, value)| value),
        }
    }
}

impl From<bool> for Row {
    fn from(value: bool) -> Self {
        Row::Bare(value)
    }
}

/// Equal iff both tables have the same length and agree on every row.
///
/// ```
/// use logic_equiv::compare::{compare_tables, Row};
///
/// let plain = [true, false];
/// let records = [Row::output(true), Row::output(false)];
/// assert!(compare_tables(&plain, &records));
/// ```
pub fn compare_tables<A, B>(lhs: &[A], rhs: &[B]) -> bool
where
    A: RowValue,
    B: RowValue,
{
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(a, b)| a.value() == b.value())
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Mismatch {
    pub index: usize,
    pub assignment: Assignment,
    pub expected: bool,
    pub actual: bool,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} {}: expected {}, got {}",
            self.index, self.assignment, self.expected as u8, self.actual as u8
        )
    }
}

/// Row-by-row comparison of an `actual` table against an `expected` one.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TableComparison {
    pub matches: Vec<usize>,
    pub mismatches: Vec<Mismatch>,
}

impl TableComparison {
    pub fn new(expected: &TruthTable, actual: &TruthTable) -> Result<Self, Error> {
        if expected.variables() != actual.variables() {
            return Err(Error::OrderingMismatch);
        }
        let mut matches = Vec::new();
        let mut mismatches = Vec::new();
        for (index, ((assignment, e), a)) in expected.iter().zip(actual.rows()).enumerate() {
            if e == *a {
                matches.push(index);
            } else {
                mismatches.push(Mismatch {
                    index,
                    assignment,
                    expected: e,
                    actual: *a,
                });
            }
        }
        Ok(Self { matches, mismatches })
    }

    pub fn is_equivalent(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn total(&self) -> usize {
        self.matches.len() + self.mismatches.len()
    }

    /// Percentage of matching rows.
    pub fn accuracy(&self) -> f64 {
        if self.total() == 0 {
            return 100.0;
        }
        self.matches.len() as f64 * 100.0 / self.total() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TruthTableGenerator;
    use crate::types::VariableOrder;

    #[test]
    fn test_row_shapes_agree() {
        let bare = [true, false];
        let output = [Row::output(true), Row::output(false)];
        let outputs = [Row::outputs([("Y", true)]), Row::outputs([("Y", false)])];

        assert!(compare_tables(&bare, &output));
        assert!(compare_tables(&output, &outputs));
        assert!(compare_tables(&bare, &outputs));
        assert!(compare_tables(&outputs, &bare));
    }

    #[test]
    fn test_row_shapes_disagree_alike() {
        let bare = [true, true];
        let output = [Row::output(true), Row::output(false)];
        let outputs = [Row::outputs([("Y", true)]), Row::outputs([("Y", false)])];

        assert!(!compare_tables(&bare, &output));
        assert!(!compare_tables(&bare, &outputs));
    }

    #[test]
    fn test_mixed_shapes_in_one_table() {
        let mixed = [Row::Bare(false), Row::output(true), Row::outputs([("Z", true)])];
        assert!(compare_tables(&mixed, &[false, true, true]));
    }

    #[test]
    fn test_first_output_in_given_order() {
        let row = Row::outputs([("Y", false), ("X", true)]);
        assert!(!row.value());
        let row = Row::outputs([("Y", true), ("X", false)]);
        assert!(row.value());
        assert!(compare_tables(&[Row::outputs([("Z", true), ("A", false)])], &[true]));
        assert!(!Row::outputs(Vec::<(String, bool)>::new()).value());
    }

    #[test]
    fn test_length_mismatch() {
        assert!(!compare_tables(&[true], &[true, true]));
        let empty: [bool; 0] = [];
        assert!(compare_tables(&empty, &empty));
    }

    #[test]
    fn test_table_comparison() {
        let gen = TruthTableGenerator::default();
        let ab = VariableOrder::new(["A", "B"]);
        let expected = gen.generate("A OR B", &ab).unwrap();
        let actual = gen.generate("A AND B", &ab).unwrap();

        let cmp = TableComparison::new(&expected, &actual).unwrap();
        assert!(!cmp.is_equivalent());
        assert_eq!(cmp.matches, vec![0, 3]);
        assert_eq!(cmp.mismatches.len(), 2);
        assert_eq!(cmp.mismatches[0].index, 1);
        assert!(cmp.mismatches[0].expected);
        assert!(!cmp.mismatches[0].actual);
        assert_eq!(cmp.mismatches[0].to_string(), "row 1 {A=0, B=1}: expected 1, got 0");
        assert_eq!(cmp.accuracy(), 50.0);
    }

    #[test]
    fn test_table_comparison_requires_same_order() {
        let gen = TruthTableGenerator::default();
        let a = gen.generate("A", &VariableOrder::new(["A"])).unwrap();
        let b = gen.generate("B", &VariableOrder::new(["B"])).unwrap();
        assert_eq!(TableComparison::new(&a, &b), Err(Error::OrderingMismatch));
    }
}
