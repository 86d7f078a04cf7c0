use std::collections::BTreeSet;
use std::fmt;

use crate::error::Error;
use crate::types::Assignment;

/// Boolean expression tree.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    /// Uppercase variable name.
    Var(String),
    Literal(bool),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Xor(Box<Expr>, Box<Expr>),
    Nand(Box<Expr>, Box<Expr>),
    Nor(Box<Expr>, Box<Expr>),
}

// Constructors
impl Expr {
    pub fn var(name: &str) -> Self {
        Expr::Var(name.to_uppercase())
    }

    pub fn literal(value: bool) -> Self {
        Expr::Literal(value)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(value: Self) -> Self {
        Expr::Not(Box::new(value))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Expr::Xor(Box::new(lhs), Box::new(rhs))
    }

    pub fn nand(lhs: Self, rhs: Self) -> Self {
        Expr::Nand(Box::new(lhs), Box::new(rhs))
    }

    pub fn nor(lhs: Self, rhs: Self) -> Self {
        Expr::Nor(Box::new(lhs), Box::new(rhs))
    }
}

// Getters
impl Expr {
    /// Distinct variable names, ascending.
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables<'a>(&'a self, vars: &mut BTreeSet<&'a str>) {
        match self {
            Expr::Var(name) => {
                vars.insert(name.as_str());
            }
            Expr::Literal(_) => {}
            Expr::Not(e) => e.collect_variables(vars),
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Xor(l, r) | Expr::Nand(l, r) | Expr::Nor(l, r) => {
                l.collect_variables(vars);
                r.collect_variables(vars);
            }
        }
    }

    /// Depth of the expression tree (0 for leaves).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Var(_) | Expr::Literal(_) => 0,
            Expr::Not(e) => 1 + e.depth(),
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Xor(l, r) | Expr::Nand(l, r) | Expr::Nor(l, r) => {
                1 + l.depth().max(r.depth())
            }
        }
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        match self {
            Expr::Var(_) | Expr::Literal(_) => 1,
            Expr::Not(e) => 1 + e.size(),
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Xor(l, r) | Expr::Nand(l, r) | Expr::Nor(l, r) => {
                1 + l.size() + r.size()
            }
        }
    }

    /// Whether the tree contains no variables.
    pub fn is_closed(&self) -> bool {
        self.variables().is_empty()
    }
}

// Rewrites
impl Expr {
    /// Rewrites every `l NAND r` into `NOT (l AND r)` and every `l NOR r` into
    /// `NOT (l OR r)`, at any depth.
    pub fn rewrite_nand_nor(self) -> Self {
        match self {
            Expr::Var(_) | Expr::Literal(_) => self,
            Expr::Not(e) => Expr::not(e.rewrite_nand_nor()),
            Expr::And(l, r) => Expr::and(l.rewrite_nand_nor(), r.rewrite_nand_nor()),
            Expr::Or(l, r) => Expr::or(l.rewrite_nand_nor(), r.rewrite_nand_nor()),
            Expr::Xor(l, r) => Expr::xor(l.rewrite_nand_nor(), r.rewrite_nand_nor()),
            Expr::Nand(l, r) => Expr::not(Expr::and(l.rewrite_nand_nor(), r.rewrite_nand_nor())),
            Expr::Nor(l, r) => Expr::not(Expr::or(l.rewrite_nand_nor(), r.rewrite_nand_nor())),
        }
    }

    /// Replaces every variable with its literal value from `assignment`.
    ///
    /// Variables are matched by whole name, so `A` never touches `AB`.
    pub fn substitute(&self, assignment: &Assignment) -> Result<Expr, Error> {
        Ok(match self {
            Expr::Var(name) => match assignment.get(name) {
                Some(value) => Expr::Literal(value),
                None => return Err(Error::UnresolvedVariable(name.clone())),
            },
            Expr::Literal(value) => Expr::Literal(*value),
            Expr::Not(e) => Expr::not(e.substitute(assignment)?),
            Expr::And(l, r) => Expr::and(l.substitute(assignment)?, r.substitute(assignment)?),
            Expr::Or(l, r) => Expr::or(l.substitute(assignment)?, r.substitute(assignment)?),
            Expr::Xor(l, r) => Expr::xor(l.substitute(assignment)?, r.substitute(assignment)?),
            Expr::Nand(l, r) => Expr::nand(l.substitute(assignment)?, r.substitute(assignment)?),
            Expr::Nor(l, r) => Expr::nor(l.substitute(assignment)?, r.substitute(assignment)?),
        })
    }

    /// Local algebraic clean-up, applied bottom-up:
    ///
    /// - `NOT NOT a = a`
    /// - `a AND a = a`, `a OR a = a`
    /// - `a XOR a = 0`
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Var(_) | Expr::Literal(_) => self.clone(),
            Expr::Not(e) => match e.simplify() {
                Expr::Not(inner) => *inner,
                e => Expr::not(e),
            },
            Expr::And(l, r) => {
                let (l, r) = (l.simplify(), r.simplify());
                if l == r {
                    l
                } else {
                    Expr::and(l, r)
                }
            }
            Expr::Or(l, r) => {
                let (l, r) = (l.simplify(), r.simplify());
                if l == r {
                    l
                } else {
                    Expr::or(l, r)
                }
            }
            Expr::Xor(l, r) => {
                let (l, r) = (l.simplify(), r.simplify());
                if l == r {
                    Expr::Literal(false)
                } else {
                    Expr::xor(l, r)
                }
            }
            Expr::Nand(l, r) => Expr::nand(l.simplify(), r.simplify()),
            Expr::Nor(l, r) => Expr::nor(l.simplify(), r.simplify()),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Literal(value) => write!(f, "{}", *value as u8),
            Expr::Not(e) => write!(f, "NOT {}", e),
            Expr::And(l, r) => write!(f, "({} AND {})", l, r),
            Expr::Or(l, r) => write!(f, "({} OR {})", l, r),
            Expr::Xor(l, r) => write!(f, "({} XOR {})", l, r),
            Expr::Nand(l, r) => write!(f, "({} NAND {})", l, r),
            Expr::Nor(l, r) => write!(f, "({} NOR {})", l, r),
        }
    }
}
