use std::collections::BTreeSet;

use crate::normalize::normalize;
use crate::notation::{is_identifier, Operator};

/// Distinct variables referenced by `expression`, uppercase and ascending.
///
/// Works on the text alone, so it also lists the variables of an expression
/// the parser would reject. Numeric literals are never variables.
///
/// ```
/// use logic_equiv::extract_variables;
///
/// assert_eq!(extract_variables("A AND B OR A"), vec!["A", "B"]);
/// assert_eq!(extract_variables("x2 ∨ ¬x1 ∨ 1"), vec!["X1", "X2"]);
/// ```
pub fn extract_variables(expression: &str) -> Vec<String> {
    let normalized = normalize(expression);
    normalized
        .split(|c: char| c.is_whitespace() || c == '(' || c == ')')
        .filter(|token| !token.is_empty())
        .filter(|token| Operator::from_keyword(token).is_none())
        .filter(|token| is_identifier(token))
        .map(|token| token.to_uppercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_dedup() {
        assert_eq!(extract_variables("A AND B OR A"), vec!["A", "B"]);
        assert_eq!(extract_variables("C OR B AND A"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_case_folded() {
        assert_eq!(extract_variables("a and A and b"), vec!["A", "B"]);
    }

    #[test]
    fn test_literals_are_not_variables() {
        assert_eq!(extract_variables("1 OR 0"), Vec::<String>::new());
        assert_eq!(extract_variables("A AND 1"), vec!["A"]);
    }

    #[test]
    fn test_parentheses_and_symbols() {
        assert_eq!(extract_variables("¬(X1∧Y)+(Z)"), vec!["X1", "Y", "Z"]);
    }

    #[test]
    fn test_keyword_like_identifiers() {
        assert_eq!(extract_variables("ORDER NAND BAND"), vec!["BAND", "ORDER"]);
    }

    #[test]
    fn test_malformed_tokens_are_skipped() {
        assert_eq!(extract_variables("A AND 12 OR 1B"), vec!["A"]);
        assert_eq!(extract_variables("(A AND"), vec!["A"]);
    }

    #[test]
    fn test_empty() {
        assert!(extract_variables("").is_empty());
    }
}
