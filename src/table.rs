//! Truth tables and their generation.
//!
//! A [`TruthTable`] holds one output per assignment of a [`VariableOrder`],
//! in row order (see [`crate::types`] for the bit convention).
//! [`TruthTableGenerator`] builds tables from expressions, refusing orderings
//! longer than its configured maximum before any row is evaluated.

use std::fmt;
use std::fmt::Write as _;

use log::{debug, warn};
use num_bigint::BigUint;

use crate::ast::Expr;
use crate::error::Error;
use crate::eval::Eval;
use crate::parser::parse;
use crate::types::{Assignment, VariableOrder};

/// Default bound on the number of variables (1024 rows).
pub const DEFAULT_MAX_VARS: usize = 10;

/// Upper limit for any configured bound.
pub const MAX_VARS_LIMIT: usize = 20;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    variables: VariableOrder,
    rows: Vec<bool>,
}

impl TruthTable {
    /// # Panics
    ///
    /// Panics if `rows.len()` is not `2^n` for the `n` variables.
    pub fn new(variables: VariableOrder, rows: Vec<bool>) -> Self {
        assert_eq!(
            rows.len(),
            variables.num_rows(),
            "Truth table over {} variables must have {} rows",
            variables.len(),
            variables.num_rows()
        );
        Self { variables, rows }
    }

    pub fn variables(&self) -> &VariableOrder {
        &self.variables
    }

    pub fn rows(&self) -> &[bool] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.rows.get(index).copied()
    }

    /// Rows together with their assignments.
    pub fn iter(&self) -> impl Iterator<Item = (Assignment, bool)> + '_ {
        self.variables.assignments().zip(self.rows.iter().copied())
    }

    /// Indices of the rows where the function is true.
    pub fn minterms(&self) -> Vec<usize> {
        (0..self.rows.len()).filter(|&i| self.rows[i]).collect()
    }

    /// Indices of the rows where the function is false.
    pub fn maxterms(&self) -> Vec<usize> {
        (0..self.rows.len()).filter(|&i| !self.rows[i]).collect()
    }

    pub fn count_ones(&self) -> usize {
        self.rows.iter().filter(|&&v| v).count()
    }

    /// Function number: row `i` contributes `2^i`.
    ///
    /// Over `[A, B]`, `A AND B` is `8` and `A OR B` is `14`.
    pub fn signature(&self) -> BigUint {
        let mut bytes = vec![0u8; self.rows.len().div_ceil(8)];
        for i in self.minterms() {
            bytes[i / 8] |= 1 << (i % 8);
        }
        BigUint::from_bytes_le(&bytes)
    }

    /// Canonical sum of products (disjunction of minterms).
    pub fn sum_of_products(&self) -> String {
        let terms: Vec<String> = self
            .minterms()
            .into_iter()
            .map(|i| self.term(i, " AND ", |value| value, "1"))
            .collect();
        join_terms(&terms, " OR ", "0")
    }

    /// Canonical product of sums (conjunction of maxterms).
    pub fn product_of_sums(&self) -> String {
        let clauses: Vec<String> = self
            .maxterms()
            .into_iter()
            .map(|i| self.term(i, " OR ", |value| !value, "0"))
            .collect();
        join_terms(&clauses, " AND ", "1")
    }

    /// Literals of row `index`, each positive when `positive(value)` holds.
    fn term(&self, index: usize, sep: &str, positive: fn(bool) -> bool, empty: &str) -> String {
        let assignment = self.variables.assignment(index);
        let literals: Vec<String> = self
            .variables
            .names()
            .iter()
            .map(|name| {
                let value = assignment.get(name).unwrap_or(false);
                if positive(value) {
                    name.clone()
                } else {
                    format!("NOT {}", name)
                }
            })
            .collect();
        match literals.len() {
            0 => empty.to_string(),
            1 => literals[0].clone(),
            _ => format!("({})", literals.join(sep)),
        }
    }

    /// Comma-separated rendering: variable columns, an empty separator
    /// column, then the output column `F`.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();
        let mut header: Vec<&str> = self.variables.names().iter().map(|s| s.as_str()).collect();
        header.push("");
        header.push("F");
        csv.push_str(&header.join(","));
        csv.push('\n');
        for (assignment, value) in self.iter() {
            let mut cells: Vec<&str> = assignment.iter().map(|(_, v)| bit(v)).collect();
            cells.push("");
            cells.push(bit(value));
            csv.push_str(&cells.join(","));
            csv.push('\n');
        }
        csv
    }
}

fn bit(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

fn join_terms(terms: &[String], sep: &str, empty: &str) -> String {
    if terms.is_empty() {
        empty.to_string()
    } else {
        terms.join(sep)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.variables.names();
        let mut line = String::new();
        for name in names {
            write!(line, "{} ", name)?;
        }
        writeln!(f, "{}| F", line)?;
        for (assignment, value) in self.iter() {
            line.clear();
            for (name, v) in names.iter().zip(assignment.iter().map(|(_, v)| v)) {
                write!(line, "{:<width$} ", bit(v), width = name.len())?;
            }
            writeln!(f, "{}| {}", line, bit(value))?;
        }
        Ok(())
    }
}

/// Builds truth tables, bounded by a maximum variable count.
#[derive(Debug, Clone)]
pub struct TruthTableGenerator {
    max_vars: usize,
}

impl TruthTableGenerator {
    /// # Panics
    ///
    /// Panics if `max_vars` exceeds [`MAX_VARS_LIMIT`].
    pub fn new(max_vars: usize) -> Self {
        assert!(
            max_vars <= MAX_VARS_LIMIT,
            "Maximum variable count should be in the range 0..={}",
            MAX_VARS_LIMIT
        );
        Self { max_vars }
    }

    pub fn max_vars(&self) -> usize {
        self.max_vars
    }

    /// Rejects orderings longer than the configured maximum.
    pub fn check_bound(&self, variables: &VariableOrder) -> Result<(), Error> {
        if variables.len() > self.max_vars {
            return Err(Error::TooManyVariables {
                count: variables.len(),
                max: self.max_vars,
            });
        }
        Ok(())
    }

    /// Truth table of expression text over `variables`.
    ///
    /// Syntax errors, variables missing from the ordering, and an oversized
    /// ordering fail the whole table. A failure inside a single row only
    /// turns that row into `false`.
    pub fn generate(&self, expression: &str, variables: &VariableOrder) -> Result<TruthTable, Error> {
        self.check_bound(variables)?;
        let expr = parse(expression)?;
        self.generate_expr(&expr, variables)
    }

    pub fn generate_expr(&self, expr: &Expr, variables: &VariableOrder) -> Result<TruthTable, Error> {
        self.check_bound(variables)?;
        if let Some(name) = expr.variables().into_iter().find(|name| !variables.contains(name)) {
            return Err(Error::UnresolvedVariable(name.to_string()));
        }
        let expr = expr.clone().rewrite_nand_nor();
        self.tabulate(&expr, variables)
    }

    /// Evaluates `function` on every row of `variables`, mapping row failures
    /// to `false`.
    pub fn tabulate<E>(&self, function: &E, variables: &VariableOrder) -> Result<TruthTable, Error>
    where
        E: Eval + ?Sized,
    {
        self.check_bound(variables)?;
        let rows: Vec<bool> = variables
            .assignments()
            .enumerate()
            .map(|(row, assignment)| match function.eval(&assignment) {
                Ok(value) => value,
                Err(e) => {
                    let e = Error::RowEvaluation {
                        row,
                        source: Box::new(e),
                    };
                    warn!("{}; recording false", e);
                    false
                }
            })
            .collect();
        let table = TruthTable::new(variables.clone(), rows);
        debug!(
            "tabulate over {} -> {} ones of {} rows, signature {}",
            variables,
            table.count_ones(),
            table.len(),
            table.signature()
        );
        Ok(table)
    }
}

impl Default for TruthTableGenerator {
    fn default() -> Self {
        TruthTableGenerator::new(DEFAULT_MAX_VARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(names: &[&str]) -> VariableOrder {
        VariableOrder::new(names.iter().copied())
    }

    #[test]
    fn test_generate_and_or() {
        let gen = TruthTableGenerator::default();
        let ab = order(&["A", "B"]);
        // Rows: AB = 00, 01, 10, 11
        let or = gen.generate("A OR B", &ab).unwrap();
        assert_eq!(or.rows(), &[false, true, true, true]);
        let and = gen.generate("A AND B", &ab).unwrap();
        assert_eq!(and.rows(), &[false, false, false, true]);
        assert_ne!(or, and);
    }

    #[test]
    fn test_generate_over_wider_order() {
        let gen = TruthTableGenerator::default();
        let table = gen.generate("B", &order(&["A", "B"])).unwrap();
        assert_eq!(table.rows(), &[false, true, false, true]);
    }

    #[test]
    fn test_generate_constant() {
        let gen = TruthTableGenerator::default();
        let table = gen.generate("1", &VariableOrder::default()).unwrap();
        assert_eq!(table.rows(), &[true]);
    }

    #[test]
    fn test_bound_enforced() {
        let gen = TruthTableGenerator::new(3);
        let vars = order(&["A", "B", "C", "D"]);
        assert_eq!(
            gen.generate("A AND B AND C AND D", &vars),
            Err(Error::TooManyVariables { count: 4, max: 3 })
        );
        assert!(gen.generate("A AND B AND C", &order(&["A", "B", "C"])).is_ok());
    }

    #[test]
    fn test_default_bound_is_ten() {
        let gen = TruthTableGenerator::default();
        assert_eq!(gen.max_vars(), 10);
        let names: Vec<String> = (0..11).map(|i| format!("X{}", i)).collect();
        let vars = VariableOrder::new(&names);
        assert!(matches!(
            gen.generate("X0", &vars),
            Err(Error::TooManyVariables { count: 11, max: 10 })
        ));
    }

    #[test]
    #[should_panic(expected = "Maximum variable count")]
    fn test_limit_of_bound() {
        TruthTableGenerator::new(MAX_VARS_LIMIT + 1);
    }

    #[test]
    fn test_structural_errors_propagate() {
        let gen = TruthTableGenerator::default();
        assert!(matches!(gen.generate("A AND (B", &order(&["A", "B"])), Err(Error::Syntax(_))));
        assert_eq!(
            gen.generate("A AND C", &order(&["A", "B"])),
            Err(Error::UnresolvedVariable("C".to_string()))
        );
    }

    struct FailsWhenA;

    impl Eval for FailsWhenA {
        fn eval(&self, assignment: &Assignment) -> Result<bool, Error> {
            if assignment.get("A") == Some(true) {
                Err(Error::UnresolvedVariable("Q".to_string()))
            } else {
                Ok(true)
            }
        }
    }

    #[test_log::test]
    fn test_row_failure_is_false() {
        let gen = TruthTableGenerator::default();
        let table = gen.tabulate(&FailsWhenA, &order(&["A", "B"])).unwrap();
        assert_eq!(table.rows(), &[true, true, false, false]);
    }

    #[test]
    fn test_signature() {
        let gen = TruthTableGenerator::default();
        let ab = order(&["A", "B"]);
        assert_eq!(gen.generate("A AND B", &ab).unwrap().signature(), BigUint::from(8u32));
        assert_eq!(gen.generate("A OR B", &ab).unwrap().signature(), BigUint::from(14u32));
        assert_eq!(gen.generate("A XOR A", &ab).unwrap().signature(), BigUint::from(0u32));

        let wide: Vec<String> = (0..10).map(|i| format!("X{}", i)).collect();
        let table = gen.generate("X0 OR NOT X0", &VariableOrder::new(&wide)).unwrap();
        let expected = (BigUint::from(1u32) << 1024usize) - BigUint::from(1u32);
        assert_eq!(table.signature(), expected);
    }

    #[test]
    fn test_minterms_maxterms() {
        let gen = TruthTableGenerator::default();
        let table = gen.generate("A XOR B", &order(&["A", "B"])).unwrap();
        assert_eq!(table.minterms(), vec![1, 2]);
        assert_eq!(table.maxterms(), vec![0, 3]);
        assert_eq!(table.count_ones(), 2);
    }

    #[test]
    fn test_canonical_forms() {
        let gen = TruthTableGenerator::default();
        let ab = order(&["A", "B"]);
        let table = gen.generate("A XOR B", &ab).unwrap();
        assert_eq!(table.sum_of_products(), "(NOT A AND B) OR (A AND NOT B)");
        assert_eq!(table.product_of_sums(), "(A OR B) AND (NOT A OR NOT B)");

        // Both canonical forms describe the same function.
        assert_eq!(gen.generate(&table.sum_of_products(), &ab).unwrap(), table);
        assert_eq!(gen.generate(&table.product_of_sums(), &ab).unwrap(), table);
    }

    #[test]
    fn test_canonical_forms_of_constants() {
        let gen = TruthTableGenerator::default();
        let a = order(&["A"]);
        let tautology = gen.generate("A OR NOT A", &a).unwrap();
        assert_eq!(tautology.sum_of_products(), "NOT A OR A");
        assert_eq!(tautology.product_of_sums(), "1");
        let contradiction = gen.generate("A AND NOT A", &a).unwrap();
        assert_eq!(contradiction.sum_of_products(), "0");
        assert_eq!(contradiction.product_of_sums(), "A AND NOT A");

        let empty = VariableOrder::default();
        assert_eq!(gen.generate("1", &empty).unwrap().sum_of_products(), "1");
        assert_eq!(gen.generate("0", &empty).unwrap().product_of_sums(), "0");
    }

    #[test]
    fn test_csv() {
        let gen = TruthTableGenerator::default();
        let table = gen.generate("A AND B", &order(&["A", "B"])).unwrap();
        assert_eq!(table.to_csv(), "A,B,,F\n0,0,,0\n0,1,,0\n1,0,,0\n1,1,,1\n");
    }

    #[test]
    fn test_display() {
        let gen = TruthTableGenerator::default();
        let table = gen.generate("NOT A1", &order(&["A1"])).unwrap();
        assert_eq!(table.to_string(), "A1 | F\n0  | 1\n1  | 0\n");
    }

    #[test]
    #[should_panic(expected = "must have 4 rows")]
    fn test_new_checks_length() {
        TruthTable::new(order(&["A", "B"]), vec![true, false]);
    }
}
