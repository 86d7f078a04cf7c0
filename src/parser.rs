//! Recursive-descent parser.
//!
//! Grammar, from the loosest to the tightest binding level (all binary
//! operators are left-associative):
//!
//! ```text
//! or       := xor      ("OR"  xor)*
//! xor      := and      ("XOR" and)*
//! and      := nand_nor ("AND" nand_nor)*
//! nand_nor := unary    (("NAND" | "NOR") unary)*
//! unary    := "NOT" unary | primary
//! primary  := IDENT | "0" | "1" | "(" or ")"
//! ```
//!
//! Input is bounded twice: parentheses and `NOT`s may nest at most
//! [`MAX_NESTING`] levels, and the resulting tree may be at most
//! [`MAX_HEIGHT`] levels high. Deeper input is a [`SyntaxError::TooDeep`].

use log::debug;

use crate::ast::Expr;
use crate::error::{Error, SyntaxError};
use crate::lexer::{tokenize, Token, TokenKind};
use crate::notation::Operator;

/// Maximum nesting of parentheses and `NOT` operators.
pub const MAX_NESTING: usize = 256;

/// Maximum height of a parsed expression tree.
pub const MAX_HEIGHT: usize = 2048;

/// Parses expression text (raw or normalized) into an [`Expr`].
///
/// ```
/// use logic_equiv::ast::Expr;
/// use logic_equiv::parse;
///
/// let e = parse("a ∧ ¬b").unwrap();
/// assert_eq!(e, Expr::and(Expr::var("A"), Expr::not(Expr::var("B"))));
/// ```
pub fn parse(input: &str) -> Result<Expr, Error> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(SyntaxError::Empty.into());
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        nesting: 0,
    };
    let (expr, height) = parser.parse_or()?;
    if let Some(token) = parser.peek() {
        return Err(match token.kind {
            TokenKind::RParen => SyntaxError::UnmatchedParen {
                position: token.position,
            },
            _ => SyntaxError::UnexpectedToken {
                position: token.position,
                found: token.kind.to_string(),
            },
        }
        .into());
    }
    debug!("parse: {} tokens -> tree of height {}", parser.tokens.len(), height);
    Ok(expr)
}

/// A subtree together with its height.
type Parsed = (Expr, usize);

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    nesting: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the next token if it is one of `ops`, returning it with its position.
    fn match_op(&mut self, ops: &[Operator]) -> Option<(Operator, usize)> {
        let found = match self.peek() {
            Some(Token {
                kind: TokenKind::Op(op),
                position,
            }) if ops.contains(op) => (*op, *position),
            _ => return None,
        };
        self.pos += 1;
        Some(found)
    }

    fn enter(&mut self, position: usize) -> Result<(), SyntaxError> {
        self.nesting += 1;
        if self.nesting > MAX_NESTING {
            return Err(SyntaxError::TooDeep {
                position,
                max: MAX_NESTING,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    fn grow(height: usize, position: usize) -> Result<usize, SyntaxError> {
        if height > MAX_HEIGHT {
            return Err(SyntaxError::TooDeep {
                position,
                max: MAX_HEIGHT,
            });
        }
        Ok(height)
    }

    fn combine(op: Operator, position: usize, lhs: Parsed, rhs: Parsed) -> Result<Parsed, SyntaxError> {
        let height = Self::grow(1 + lhs.1.max(rhs.1), position)?;
        let (l, r) = (lhs.0, rhs.0);
        let expr = match op {
            Operator::And => Expr::and(l, r),
            Operator::Or => Expr::or(l, r),
            Operator::Xor => Expr::xor(l, r),
            Operator::Nand => Expr::nand(l, r),
            Operator::Nor => Expr::nor(l, r),
            Operator::Not => unreachable!("NOT is unary"),
        };
        Ok((expr, height))
    }

    fn parse_or(&mut self) -> Result<Parsed, SyntaxError> {
        let mut lhs = self.parse_xor()?;
        while let Some((op, position)) = self.match_op(&[Operator::Or]) {
            let rhs = self.parse_xor()?;
            lhs = Self::combine(op, position, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn parse_xor(&mut self) -> Result<Parsed, SyntaxError> {
        let mut lhs = self.parse_and()?;
        while let Some((op, position)) = self.match_op(&[Operator::Xor]) {
            let rhs = self.parse_and()?;
            lhs = Self::combine(op, position, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<Parsed, SyntaxError> {
        let mut lhs = self.parse_nand_nor()?;
        while let Some((op, position)) = self.match_op(&[Operator::And]) {
            let rhs = self.parse_nand_nor()?;
            lhs = Self::combine(op, position, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn parse_nand_nor(&mut self) -> Result<Parsed, SyntaxError> {
        let mut lhs = self.parse_unary()?;
        while let Some((op, position)) = self.match_op(&[Operator::Nand, Operator::Nor]) {
            let rhs = self.parse_unary()?;
            lhs = Self::combine(op, position, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Parsed, SyntaxError> {
        if let Some((_, position)) = self.match_op(&[Operator::Not]) {
            self.enter(position)?;
            let (operand, height) = self.parse_unary()?;
            self.leave();
            let height = Self::grow(height + 1, position)?;
            return Ok((Expr::not(operand), height));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Parsed, SyntaxError> {
        let token = self.advance().ok_or(SyntaxError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Ident(name) => Ok((Expr::Var(name), 0)),
            TokenKind::Literal(value) => Ok((Expr::Literal(value), 0)),
            TokenKind::LParen => {
                self.enter(token.position)?;
                let inner = self.parse_or()?;
                self.leave();
                match self.advance() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(SyntaxError::UnexpectedToken {
                        position: other.position,
                        found: other.kind.to_string(),
                    }),
                    None => Err(SyntaxError::UnclosedParen {
                        position: token.position,
                    }),
                }
            }
            TokenKind::RParen => Err(SyntaxError::UnmatchedParen {
                position: token.position,
            }),
            TokenKind::Op(_) => Err(SyntaxError::UnexpectedToken {
                position: token.position,
                found: token.kind.to_string(),
            }),
        }
    }
}
