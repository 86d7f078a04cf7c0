//! Equivalence checking of a user answer against a canonical answer.
//!
//! Both expressions are normalized, their variables are merged into one
//! shared [`VariableOrder`], and the truth tables over that ordering are
//! compared row by row. Malformed input never escapes as an error from
//! [`EquivalenceChecker::check_equivalence`]: it simply reads as "not
//! equivalent". [`EquivalenceChecker::check`] keeps the reason.

use log::debug;

use crate::compare::{compare_tables, TableComparison};
use crate::diagnostics::{Diagnostics, LogDiagnostics, Side};
use crate::error::Error;
use crate::normalize::normalize;
use crate::table::{TruthTableGenerator, DEFAULT_MAX_VARS, MAX_VARS_LIMIT};
use crate::types::VariableOrder;
use crate::vars::extract_variables;

/// Configuration options for [`EquivalenceChecker`].
///
/// # Examples
///
/// ```
/// use logic_equiv::checker::{CheckerConfig, EquivalenceChecker};
///
/// let config = CheckerConfig::default().with_max_vars(4);
/// let checker = EquivalenceChecker::with_config(config);
/// assert!(!checker.check_equivalence("A AND B AND C AND D AND E", "E AND D AND C AND B AND A"));
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CheckerConfig {
    /// Largest number of distinct variables a comparison may involve (default: 10)
    pub max_vars: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            max_vars: DEFAULT_MAX_VARS,
        }
    }
}

impl CheckerConfig {
    /// # Panics
    ///
    /// Panics if `max_vars` exceeds [`MAX_VARS_LIMIT`].
    pub fn with_max_vars(mut self, max_vars: usize) -> Self {
        assert!(
            max_vars <= MAX_VARS_LIMIT,
            "Maximum variable count should be in the range 0..={}",
            MAX_VARS_LIMIT
        );
        self.max_vars = max_vars;
        self
    }

    /// Like [`with_max_vars`](Self::with_max_vars), for values from outside
    /// the program: a bound above [`MAX_VARS_LIMIT`] is an error.
    pub fn try_with_max_vars(self, max_vars: usize) -> Result<Self, Error> {
        if max_vars > MAX_VARS_LIMIT {
            return Err(Error::TooManyVariables {
                count: max_vars,
                max: MAX_VARS_LIMIT,
            });
        }
        Ok(self.with_max_vars(max_vars))
    }
}

/// Outcome of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Equivalent,
    /// Both tables were built, and they differ.
    NotEquivalent(TableComparison),
    /// A table could not be built at all.
    Invalid { side: Option<Side>, error: Error },
}

impl Verdict {
    pub fn is_equivalent(&self) -> bool {
        matches!(self, Verdict::Equivalent)
    }
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> Self {
        verdict.is_equivalent()
    }
}

#[derive(Debug, Clone)]
pub struct EquivalenceChecker<D = LogDiagnostics> {
    generator: TruthTableGenerator,
    diagnostics: D,
}

impl EquivalenceChecker<LogDiagnostics> {
    pub fn new() -> Self {
        Self::with_config(CheckerConfig::default())
    }

    pub fn with_config(config: CheckerConfig) -> Self {
        Self::with_diagnostics(config, LogDiagnostics)
    }
}

impl Default for EquivalenceChecker<LogDiagnostics> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Diagnostics> EquivalenceChecker<D> {
    pub fn with_diagnostics(config: CheckerConfig, diagnostics: D) -> Self {
        Self {
            generator: TruthTableGenerator::new(config.max_vars),
            diagnostics,
        }
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn generator(&self) -> &TruthTableGenerator {
        &self.generator
    }

    /// Whether `user` and `canonical` denote the same boolean function.
    pub fn check_equivalence(&self, user: &str, canonical: &str) -> bool {
        self.check(user, canonical).is_equivalent()
    }

    pub fn check(&self, user: &str, canonical: &str) -> Verdict {
        let verdict = match self.try_check(user, canonical) {
            Ok(None) => Verdict::Equivalent,
            Ok(Some(comparison)) => Verdict::NotEquivalent(comparison),
            Err((side, error)) => {
                self.diagnostics.error(side, &error);
                Verdict::Invalid { side, error }
            }
        };
        debug!("check({:?}, {:?}) -> {}", user, canonical, verdict.is_equivalent());
        verdict
    }

    /// `Ok(None)` when equivalent, `Ok(Some(report))` when not.
    fn try_check(&self, user: &str, canonical: &str) -> Result<Option<TableComparison>, (Option<Side>, Error)> {
        let user = normalize(user);
        let canonical = normalize(canonical);
        self.diagnostics.normalized(&user, &canonical);

        let order = VariableOrder::union(&extract_variables(&user), &extract_variables(&canonical));
        self.diagnostics.variables(&order);
        self.generator.check_bound(&order).map_err(|e| (None, e))?;

        let user_table = self
            .generator
            .generate(&user, &order)
            .map_err(|e| (Some(Side::User), e))?;
        let canonical_table = self
            .generator
            .generate(&canonical, &order)
            .map_err(|e| (Some(Side::Canonical), e))?;
        self.diagnostics.tables(&user_table, &canonical_table);

        if compare_tables(user_table.rows(), canonical_table.rows()) {
            return Ok(None);
        }
        TableComparison::new(&canonical_table, &user_table)
            .map(Some)
            .map_err(|e| (None, e))
    }
}
