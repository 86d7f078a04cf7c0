//! Canonical spelling of expression text.
//!
//! [`normalize`] uppercases the text, replaces every operator glyph with its
//! keyword and re-spaces the result: one space between neighbouring tokens,
//! none just inside parentheses. Normalized text tokenizes to the same token
//! stream as the original, and normalizing it again changes nothing.

use crate::notation::{is_word_char, Operator};

/// Normalizes operator notation and whitespace.
///
/// ```
/// use logic_equiv::normalize;
///
/// assert_eq!(normalize("a∧b"), "A AND B");
/// assert_eq!(normalize("  not( x1 |  x2 ) "), "NOT (X1 OR X2)");
/// ```
pub fn normalize(expression: &str) -> String {
    let upper = expression.to_uppercase();

    let mut pieces: Vec<String> = Vec::new();
    let mut word = String::new();
    let mut chars = upper.chars().peekable();

    while let Some(c) = chars.next() {
        if is_word_char(c) {
            word.push(c);
            continue;
        }
        if !word.is_empty() {
            pieces.push(std::mem::take(&mut word));
        }
        if c.is_whitespace() {
            continue;
        }
        match Operator::from_symbol(c) {
            Some(op) => {
                if Operator::is_doubled_symbol(c) && chars.peek() == Some(&c) {
                    chars.next();
                }
                pieces.push(op.keyword().to_string());
            }
            // Parentheses, and anything unknown (left for the parser to reject).
            None => pieces.push(c.to_string()),
        }
    }
    if !word.is_empty() {
        pieces.push(word);
    }

    join_pieces(&pieces)
}

fn join_pieces(pieces: &[String]) -> String {
    let mut out = String::new();
    let mut prev: Option<&str> = None;
    for piece in pieces {
        if let Some(prev) = prev {
            if prev != "(" && piece != ")" {
                out.push(' ');
            }
        }
        out.push_str(piece);
        prev = Some(piece);
    }
    out
}
