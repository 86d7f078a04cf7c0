//! Diagnostics sinks for the equivalence checker.
//!
//! The checker reports its intermediate results (normalized text, variable
//! ordering, truth tables, errors) to a [`Diagnostics`] value it owns. Every
//! method has an empty default body, so a sink implements only what it needs.

use std::cell::RefCell;

use log::debug;

use crate::error::Error;
use crate::table::TruthTable;
use crate::types::VariableOrder;

/// Which side of a comparison a diagnostic refers to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Side {
    User,
    Canonical,
}

pub trait Diagnostics {
    fn normalized(&self, _user: &str, _canonical: &str) {}

    fn variables(&self, _order: &VariableOrder) {}

    fn tables(&self, _user: &TruthTable, _canonical: &TruthTable) {}

    fn error(&self, _side: Option<Side>, _error: &Error) {}
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn normalized(&self, user: &str, canonical: &str) {
        (**self).normalized(user, canonical)
    }

    fn variables(&self, order: &VariableOrder) {
        (**self).variables(order)
    }

    fn tables(&self, user: &TruthTable, canonical: &TruthTable) {
        (**self).tables(user, canonical)
    }

    fn error(&self, side: Option<Side>, error: &Error) {
        (**self).error(side, error)
    }
}

/// Discards everything.
#[derive(Debug, Default, Copy, Clone)]
pub struct Silent;

impl Diagnostics for Silent {}

/// Forwards everything to the `log` facade at debug level.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn normalized(&self, user: &str, canonical: &str) {
        debug!("user (normalized): {}", user);
        debug!("canonical (normalized): {}", canonical);
    }

    fn variables(&self, order: &VariableOrder) {
        debug!("variables: {}", order);
    }

    fn tables(&self, user: &TruthTable, canonical: &TruthTable) {
        debug!("user table: {:?} (signature {})", user.rows(), user.signature());
        debug!("canonical table: {:?} (signature {})", canonical.rows(), canonical.signature());
    }

    fn error(&self, side: Option<Side>, error: &Error) {
        match side {
            Some(side) => debug!("error in {:?} expression: {}", side, error),
            None => debug!("error: {}", error),
        }
    }
}

/// Keeps every diagnostic as a line of text, in order.
#[derive(Debug, Default)]
pub struct Recorder {
    lines: RefCell<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    fn push(&self, line: String) {
        self.lines.borrow_mut().push(line);
    }
}

impl Diagnostics for Recorder {
    fn normalized(&self, user: &str, canonical: &str) {
        self.push(format!("normalized: {} | {}", user, canonical));
    }

    fn variables(&self, order: &VariableOrder) {
        self.push(format!("variables: {}", order));
    }

    fn tables(&self, user: &TruthTable, canonical: &TruthTable) {
        let bits = |t: &TruthTable| t.rows().iter().map(|&v| if v { '1' } else { '0' }).collect::<String>();
        self.push(format!("tables: {} | {}", bits(user), bits(canonical)));
    }

    fn error(&self, side: Option<Side>, error: &Error) {
        match side {
            Some(side) => self.push(format!("error ({:?}): {}", side, error)),
            None => self.push(format!("error: {}", error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_through_reference() {
        let recorder = Recorder::new();
        let sink = &recorder;
        sink.variables(&VariableOrder::new(["b", "a"]));
        sink.error(None, &Error::OrderingMismatch);
        assert_eq!(
            recorder.lines(),
            vec![
                "variables: [A, B]".to_string(),
                "error: Truth tables use different variable orderings".to_string(),
            ]
        );
    }

    #[test]
    fn test_silent_ignores_everything() {
        Silent.normalized("A", "B");
        Silent.error(Some(Side::User), &Error::UnresolvedVariable("A".to_string()));
    }
}
