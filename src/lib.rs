//! # logic-equiv: Truth-table equivalence of boolean expressions
//!
//! **`logic-equiv`** grades a free-form boolean expression against a canonical
//! answer. Two expressions are equivalent when their truth tables over the
//! same variable ordering are identical.
//!
//! ## Pipeline
//!
//! 1. **Normalize** both expressions: uppercase, operator glyphs replaced by
//!    keywords (`∧` becomes `AND`, `¬` becomes `NOT`, and so on), canonical spacing.
//! 2. **Extract variables** from both and merge them into one sorted ordering.
//! 3. **Parse** each expression into an [`Expr`] tree (precedence
//!    `NOT` > `NAND`/`NOR` > `AND` > `XOR` > `OR`).
//! 4. **Tabulate** each tree over the shared ordering, at most
//!    [`table::DEFAULT_MAX_VARS`] variables by default.
//! 5. **Compare** the tables row by row.
//!
//! ## Basic Usage
//!
//! ```rust
//! use logic_equiv::check_equivalence;
//!
//! assert!(check_equivalence("A AND B", "B AND A"));
//! assert!(check_equivalence("a ⊼ b", "NOT (A AND B)"));
//! assert!(!check_equivalence("A OR B", "A AND B"));
//!
//! // Malformed input is never an error here, just "not equivalent".
//! assert!(!check_equivalence("A AND (B", "A AND B"));
//! ```
//!
//! Use [`EquivalenceChecker::check`] to learn *why* two expressions differ:
//!
//! ```rust
//! use logic_equiv::{EquivalenceChecker, Verdict};
//!
//! let checker = EquivalenceChecker::default();
//! match checker.check("A OR B", "A XOR B") {
//!     Verdict::NotEquivalent(report) => {
//!         assert_eq!(report.mismatches.len(), 1);
//!         assert_eq!(report.mismatches[0].index, 3); // A=1, B=1
//!     }
//!     other => panic!("{:?}", other),
//! }
//! ```
//!
//! ## Core Components
//!
//! - **[`normalize`]** and **[`vars`]**: text-level canonicalization and variable extraction.
//! - **[`lexer`]**, **[`parser`]**, **[`ast`]**: tokens, grammar, expression trees.
//! - **[`eval`]**: evaluation under an [`Assignment`].
//! - **[`table`]**: truth tables, canonical forms, bounded generation.
//! - **[`compare`]**: row-shape-neutral comparison and mismatch reports.
//! - **[`checker`]**: the grading entry point, with an injectable [`diagnostics`] sink.

pub mod ast;
pub mod checker;
pub mod compare;
pub mod diagnostics;
pub mod error;
pub mod eval;
pub mod kmap;
pub mod lexer;
pub mod normalize;
pub mod notation;
pub mod parser;
pub mod table;
pub mod types;
pub mod vars;

pub use ast::Expr;
pub use checker::{CheckerConfig, EquivalenceChecker, Verdict};
pub use compare::{compare_tables, TableComparison};
pub use diagnostics::Diagnostics;
pub use error::{Error, SyntaxError};
pub use eval::evaluate;
pub use normalize::normalize;
pub use parser::parse;
pub use table::{TruthTable, TruthTableGenerator};
pub use types::{Assignment, VariableOrder};
pub use vars::extract_variables;

/// Grades `user` against `canonical` with the default configuration.
pub fn check_equivalence(user: &str, canonical: &str) -> bool {
    EquivalenceChecker::default().check_equivalence(user, canonical)
}
