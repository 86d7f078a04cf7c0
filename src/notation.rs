//! Operator notation shared by the normalizer and the tokenizer.
//!
//! Every operator has one keyword spelling (the canonical form) and any number
//! of symbolic glyphs:
//!
//! | Operator | Keyword | Glyphs              |
//! |----------|---------|---------------------|
//! | NOT      | `NOT`   | `¬` `!` `~`         |
//! | AND      | `AND`   | `∧` `·` `*` `&`     |
//! | OR       | `OR`    | `∨` `+` `\|`        |
//! | XOR      | `XOR`   | `⊕` `^`             |
//! | NAND     | `NAND`  | `⊼` `↑`             |
//! | NOR      | `NOR`   | `⊽` `↓`             |
//!
//! The C-style doubled forms `&&` and `||` spell a single AND / OR.

use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operator {
    Not,
    And,
    Or,
    Xor,
    Nand,
    Nor,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::Nand,
        Operator::Nor,
    ];

    /// Canonical (uppercase) keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            Operator::Not => "NOT",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Xor => "XOR",
            Operator::Nand => "NAND",
            Operator::Nor => "NOR",
        }
    }

    /// Case-insensitive keyword lookup. Only whole words match.
    pub fn from_keyword(word: &str) -> Option<Operator> {
        Operator::ALL
            .into_iter()
            .find(|op| op.keyword().eq_ignore_ascii_case(word))
    }

    pub fn from_symbol(c: char) -> Option<Operator> {
        match c {
            '¬' | '!' | '~' => Some(Operator::Not),
            '∧' | '·' | '*' | '&' => Some(Operator::And),
            '∨' | '+' | '|' => Some(Operator::Or),
            '⊕' | '^' => Some(Operator::Xor),
            '⊼' | '↑' => Some(Operator::Nand),
            '⊽' | '↓' => Some(Operator::Nor),
            _ => None,
        }
    }

    /// Whether a repeated `c` (as in `&&`) still denotes one operator.
    pub fn is_doubled_symbol(c: char) -> bool {
        matches!(c, '&' | '|')
    }

    pub fn is_binary(self) -> bool {
        self != Operator::Not
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Characters that may appear inside a word (identifier, keyword or literal).
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A letter followed by letters and digits.
pub fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}
