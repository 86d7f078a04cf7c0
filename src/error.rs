//! Error types.

use std::fmt;

/// Reasons an expression text cannot be parsed.
///
/// Positions are byte offsets into the text that was handed to the parser.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SyntaxError {
    /// The expression contains no tokens at all.
    Empty,
    /// A character that is neither an operator, a parenthesis, nor part of a word.
    UnexpectedChar { position: usize, found: char },
    /// A word that is not a keyword, a `0`/`1` literal, or an identifier (e.g. `12`, `1A`).
    InvalidToken { position: usize, token: String },
    /// A well-formed token in a place where the grammar does not allow it.
    UnexpectedToken { position: usize, found: String },
    /// The expression ended where an operand was expected.
    UnexpectedEnd,
    /// An opening parenthesis without its closing one.
    UnclosedParen { position: usize },
    /// A closing parenthesis without an opening one.
    UnmatchedParen { position: usize },
    /// Nesting or tree height beyond `max` levels, first exceeded at `position`.
    TooDeep { position: usize, max: usize },
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::Empty => write!(f, "empty expression"),
            SyntaxError::UnexpectedChar { position, found } => {
                write!(f, "unexpected character '{}' at {}", found, position)
            }
            SyntaxError::InvalidToken { position, token } => {
                write!(f, "invalid token '{}' at {}", token, position)
            }
            SyntaxError::UnexpectedToken { position, found } => {
                write!(f, "unexpected '{}' at {}", found, position)
            }
            SyntaxError::UnexpectedEnd => write!(f, "unexpected end of expression"),
            SyntaxError::UnclosedParen { position } => {
                write!(f, "parenthesis opened at {} is never closed", position)
            }
            SyntaxError::UnmatchedParen { position } => {
                write!(f, "unmatched closing parenthesis at {}", position)
            }
            SyntaxError::TooDeep { position, max } => {
                write!(f, "expression nested deeper than {} levels at {}", max, position)
            }
        }
    }
}

/// Error type for parsing, evaluation and table generation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// Malformed expression text.
    Syntax(SyntaxError),
    /// A variable without a binding in the assignment (or in the variable ordering).
    UnresolvedVariable(String),
    /// Evaluation of a single truth-table row failed.
    RowEvaluation { row: usize, source: Box<Error> },
    /// More variables than the configured maximum.
    TooManyVariables { count: usize, max: usize },
    /// Two truth tables built over different variable orderings.
    OrderingMismatch,
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Error::Syntax(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(e) => write!(f, "Syntax error: {}", e),
            Error::UnresolvedVariable(name) => write!(f, "Unresolved variable: {}", name),
            Error::RowEvaluation { row, source } => {
                write!(f, "Evaluation of row {} failed: {}", row, source)
            }
            Error::TooManyVariables { count, max } => {
                write!(f, "Too many variables: {} (at most {} allowed)", count, max)
            }
            Error::OrderingMismatch => write!(f, "Truth tables use different variable orderings"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::RowEvaluation { source, .. } => Some(&**source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = Error::TooManyVariables { count: 12, max: 10 };
        assert_eq!(e.to_string(), "Too many variables: 12 (at most 10 allowed)");

        let e: Error = SyntaxError::UnmatchedParen { position: 4 }.into();
        assert_eq!(e.to_string(), "Syntax error: unmatched closing parenthesis at 4");

        let e: Error = SyntaxError::TooDeep { position: 9, max: 256 }.into();
        assert_eq!(e.to_string(), "Syntax error: expression nested deeper than 256 levels at 9");
    }

    #[test]
    fn test_row_error_source() {
        use std::error::Error as _;

        let e = Error::RowEvaluation {
            row: 3,
            source: Box::new(Error::UnresolvedVariable("B".to_string())),
        };
        assert_eq!(e.source().map(|s| s.to_string()), Some("Unresolved variable: B".to_string()));
    }
}
