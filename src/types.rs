//! Variable orderings and assignments.
//!
//! A truth table is always built over a [`VariableOrder`]. Row `i` of the
//! table corresponds to the [`Assignment`] obtained from the bits of `i`:
//! the variable at position `j` takes bit `n-1-j`, so position 0 is the most
//! significant bit and row 0 is the all-false assignment.
use std::collections::BTreeMap;
use std::fmt;

/// Sorted, deduplicated list of uppercase variable names.
///
/// # Invariants
///
/// - Names are uppercase and strictly ascending.
/// - Two tables built over equal orderings use the same row numbering.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct VariableOrder(Vec<String>);

impl VariableOrder {
    /// Builds an ordering from arbitrary names: case-folded, sorted, deduplicated.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = names.into_iter().map(|s| s.as_ref().to_uppercase()).collect();
        names.sort();
        names.dedup();
        VariableOrder(names)
    }

    /// Sorted union of two variable lists.
    pub fn union<A, B>(lhs: &[A], rhs: &[B]) -> Self
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let lhs = lhs.iter().map(|s| s.as_ref());
        let rhs = rhs.iter().map(|s| s.as_ref());
        VariableOrder::new(lhs.chain(rhs))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.binary_search_by(|v| v.as_str().cmp(name)).is_ok()
    }

    /// Position of `name` in the ordering.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.binary_search_by(|v| v.as_str().cmp(name)).ok()
    }

    /// Number of rows of a truth table over this ordering.
    ///
    /// # Panics
    ///
    /// Panics if the ordering has more variables than bits in `usize`.
    pub fn num_rows(&self) -> usize {
        assert!(self.len() < usize::BITS as usize, "Too many variables for a truth table");
        1 << self.len()
    }

    /// The assignment of row `index`.
    pub fn assignment(&self, index: usize) -> Assignment {
        let n = self.len();
        let values = self
            .0
            .iter()
            .enumerate()
            .map(|(j, name)| (name.clone(), (index >> (n - 1 - j)) & 1 == 1))
            .collect();
        Assignment { values }
    }

    /// All assignments, in row order.
    pub fn assignments(&self) -> impl Iterator<Item = Assignment> + '_ {
        (0..self.num_rows()).map(move |i| self.assignment(i))
    }
}

impl fmt::Display for VariableOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Binding of variable names to boolean values.
///
/// Names are case-insensitive: they are stored uppercase, and lookups fold
/// the case of the requested name.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Assignment {
    values: BTreeMap<String, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: bool) -> Option<bool> {
        self.values.insert(name.to_uppercase(), value)
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(&value) => Some(value),
            None => self.values.get(&name.to_uppercase()).copied(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl<S: AsRef<str>> FromIterator<(S, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        let mut assignment = Assignment::new();
        for (name, value) in iter {
            assignment.insert(name.as_ref(), value);
        }
        assignment
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value as u8)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_sorted_dedup() {
        let order = VariableOrder::new(["b", "A", "B", "c1"]);
        assert_eq!(order.names(), &["A", "B", "C1"]);
        assert!(order.contains("B"));
        assert!(!order.contains("b"));
        assert_eq!(order.position("C1"), Some(2));
    }

    #[test]
    fn test_union() {
        let order = VariableOrder::union(&["B", "A"], &["C", "A"]);
        assert_eq!(order.names(), &["A", "B", "C"]);
        let empty: [&str; 0] = [];
        assert_eq!(VariableOrder::union(&empty, &empty).len(), 0);
    }

    #[test]
    fn test_msb_first_bit_convention() {
        let order = VariableOrder::new(["A", "B"]);
        assert_eq!(order.num_rows(), 4);

        let rows: Vec<(bool, bool)> = order
            .assignments()
            .map(|a| (a.get("A").unwrap(), a.get("B").unwrap()))
            .collect();
        assert_eq!(rows, vec![(false, false), (false, true), (true, false), (true, true)]);
    }

    #[test]
    fn test_empty_order_has_one_row() {
        let order = VariableOrder::default();
        assert_eq!(order.num_rows(), 1);
        assert!(order.assignment(0).is_empty());
    }

    #[test]
    fn test_assignment_case_insensitive() {
        let a: Assignment = [("x", true), ("Y", false)].into_iter().collect();
        assert_eq!(a.get("X"), Some(true));
        assert_eq!(a.get("x"), Some(true));
        assert_eq!(a.get("y"), Some(false));
        assert_eq!(a.get("Z"), None);
        assert_eq!(a.to_string(), "{X=1, Y=0}");
    }
}
