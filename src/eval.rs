use log::debug;

use crate::ast::Expr;
use crate::error::Error;
use crate::parser::parse;
use crate::types::Assignment;

/// Something that evaluates to a boolean under an assignment.
pub trait Eval {
    fn eval(&self, assignment: &Assignment) -> Result<bool, Error>;
}

impl Eval for Expr {
    /// Substitutes the assignment, then folds the closed tree.
    fn eval(&self, assignment: &Assignment) -> Result<bool, Error> {
        let closed = self.substitute(assignment)?;
        eval_closed(&closed)
    }
}

impl Eval for str {
    fn eval(&self, assignment: &Assignment) -> Result<bool, Error> {
        parse(self)?.eval(assignment)
    }
}

impl Eval for bool {
    fn eval(&self, _assignment: &Assignment) -> Result<bool, Error> {
        Ok(*self)
    }
}

/// Evaluates expression text under `assignment`.
///
/// ```
/// use logic_equiv::{evaluate, Assignment};
///
/// let a: Assignment = [("A", true), ("B", true)].into_iter().collect();
/// assert_eq!(evaluate("A NAND B", &a), Ok(false));
/// ```
pub fn evaluate(expression: &str, assignment: &Assignment) -> Result<bool, Error> {
    let result = expression.eval(assignment);
    debug!("evaluate({:?}, {}) -> {:?}", expression, assignment, result);
    result
}

/// Folds a variable-free tree into its value.
pub fn eval_closed(expr: &Expr) -> Result<bool, Error> {
    Ok(match expr {
        Expr::Var(name) => return Err(Error::UnresolvedVariable(name.clone())),
        Expr::Literal(value) => *value,
        Expr::Not(e) => !eval_closed(e)?,
        Expr::And(l, r) => eval_closed(l)? & eval_closed(r)?,
        Expr::Or(l, r) => eval_closed(l)? | eval_closed(r)?,
        Expr::Xor(l, r) => eval_closed(l)? ^ eval_closed(r)?,
        Expr::Nand(l, r) => !(eval_closed(l)? & eval_closed(r)?),
        Expr::Nor(l, r) => !(eval_closed(l)? | eval_closed(r)?),
    })
}
