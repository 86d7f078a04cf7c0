//! Tokenizer for expression text.
//!
//! Accepts both keyword and symbolic notation (see [`crate::notation`]), in
//! any letter case, so raw and normalized text produce the same tokens.

use std::fmt;

use crate::error::SyntaxError;
use crate::notation::{is_identifier, is_word_char, Operator};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TokenKind {
    /// Uppercase variable name.
    Ident(String),
    Literal(bool),
    Op(Operator),
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => write!(f, "{}", name),
            TokenKind::Literal(value) => write!(f, "{}", *value as u8),
            TokenKind::Op(op) => write!(f, "{}", op),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first character.
    pub position: usize,
}

/// Splits `input` into tokens.
pub fn tokenize(input: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        let kind = if is_word_char(c) {
            let mut end = position + c.len_utf8();
            while let Some(&(i, next)) = chars.peek() {
                if !is_word_char(next) {
                    break;
                }
                end = i + next.len_utf8();
                chars.next();
            }
            classify_word(&input[position..end], position)?
        } else if c == '(' {
            TokenKind::LParen
        } else if c == ')' {
            TokenKind::RParen
        } else if let Some(op) = Operator::from_symbol(c) {
            if Operator::is_doubled_symbol(c) && matches!(chars.peek(), Some(&(_, next)) if next == c) {
                chars.next();
            }
            TokenKind::Op(op)
        } else {
            return Err(SyntaxError::UnexpectedChar { position, found: c });
        };

        tokens.push(Token { kind, position });
    }

    Ok(tokens)
}

fn classify_word(word: &str, position: usize) -> Result<TokenKind, SyntaxError> {
    if let Some(op) = Operator::from_keyword(word) {
        return Ok(TokenKind::Op(op));
    }
    match word {
        "0" => Ok(TokenKind::Literal(false)),
        "1" => Ok(TokenKind::Literal(true)),
        _ if is_identifier(word) => Ok(TokenKind::Ident(word.to_uppercase())),
        _ => Err(SyntaxError::InvalidToken {
            position,
            token: word.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("a AND not Bc1"),
            vec![
                TokenKind::Ident("A".to_string()),
                TokenKind::Op(Operator::And),
                TokenKind::Op(Operator::Not),
                TokenKind::Ident("BC1".to_string()),
            ]
        );
    }

    #[test]
    fn test_symbols_and_parens() {
        assert_eq!(
            kinds("¬(A∧B)||1"),
            vec![
                TokenKind::Op(Operator::Not),
                TokenKind::LParen,
                TokenKind::Ident("A".to_string()),
                TokenKind::Op(Operator::And),
                TokenKind::Ident("B".to_string()),
                TokenKind::RParen,
                TokenKind::Op(Operator::Or),
                TokenKind::Literal(true),
            ]
        );
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("A  ⊕ B").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        // '⊕' is three bytes long.
        assert_eq!(positions, vec![0, 3, 7]);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(kinds("ORDER"), vec![TokenKind::Ident("ORDER".to_string())]);
        assert_eq!(kinds("NANDY"), vec![TokenKind::Ident("NANDY".to_string())]);
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            tokenize("A $ B"),
            Err(SyntaxError::UnexpectedChar { position: 2, found: '$' })
        );
        assert_eq!(
            tokenize("A AND 12"),
            Err(SyntaxError::InvalidToken {
                position: 6,
                token: "12".to_string()
            })
        );
        assert_eq!(
            tokenize("1A"),
            Err(SyntaxError::InvalidToken {
                position: 0,
                token: "1A".to_string()
            })
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(tokenize("   "), Ok(vec![]));
    }
}
