//! Karnaugh maps of small truth tables.
//!
//! The first `n / 2` variables index the rows, the remaining ones the
//! columns, both in Gray-code order so that neighbouring cells differ in a
//! single variable:
//!
//! ```text
//!        CD=00 01 11 10
//! AB=00     .  .  .  .
//!    01     .  .  .  .
//!    11     .  .  .  .
//!    10     .  .  .  .
//! ```

use std::fmt;

use crate::table::TruthTable;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct KarnaughMap {
    row_vars: Vec<String>,
    col_vars: Vec<String>,
    cells: Vec<Vec<bool>>,
}

fn gray_code(bits: usize) -> &'static [usize] {
    match bits {
        1 => &[0, 1],
        2 => &[0, 1, 3, 2],
        _ => unreachable!("Karnaugh map axes span one or two variables"),
    }
}

impl KarnaughMap {
    pub fn row_vars(&self) -> &[String] {
        &self.row_vars
    }

    pub fn col_vars(&self) -> &[String] {
        &self.col_vars
    }

    pub fn cells(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// Cell at Gray-code positions (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }
}

impl TruthTable {
    /// Karnaugh map of a table over 2 to 4 variables, `None` otherwise.
    pub fn karnaugh_map(&self) -> Option<KarnaughMap> {
        let n = self.variables().len();
        if !(2..=4).contains(&n) {
            return None;
        }
        let row_bits = n / 2;
        let col_bits = n - row_bits;
        let names = self.variables().names();

        let cells = gray_code(row_bits)
            .iter()
            .map(|&r| {
                gray_code(col_bits)
                    .iter()
                    .map(|&c| self.rows()[(r << col_bits) | c])
                    .collect()
            })
            .collect();

        Some(KarnaughMap {
            row_vars: names[..row_bits].to_vec(),
            col_vars: names[row_bits..].to_vec(),
            cells,
        })
    }
}

fn label(bits: usize, value: usize) -> String {
    format!("{:0width$b}", value, width = bits)
}

impl fmt::Display for KarnaughMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row_bits = self.row_vars.len();
        let col_bits = self.col_vars.len();
        let row_head = self.row_vars.join("");
        let col_head = self.col_vars.join("");
        let margin = row_head.len() + 1 + row_bits;

        write!(f, "{:margin$} {}=", "", col_head, margin = margin)?;
        for (i, &c) in gray_code(col_bits).iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", label(col_bits, c))?;
        }
        writeln!(f)?;

        let pad = col_head.len() + 1;
        for (i, (&r, cells)) in gray_code(row_bits).iter().zip(&self.cells).enumerate() {
            if i == 0 {
                write!(f, "{}={}", row_head, label(row_bits, r))?;
            } else {
                write!(f, "{:width$}{}", "", label(row_bits, r), width = row_head.len() + 1)?;
            }
            write!(f, " {:pad$}", "", pad = pad)?;
            for (j, &cell) in cells.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:<width$}", cell as u8, width = col_bits)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::table::TruthTableGenerator;
    use crate::types::VariableOrder;

    fn table(expr: &str, names: &[&str]) -> crate::table::TruthTable {
        TruthTableGenerator::default()
            .generate(expr, &VariableOrder::new(names.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_two_vars() {
        let kmap = table("A AND NOT B", &["A", "B"]).karnaugh_map().unwrap();
        assert_eq!(kmap.row_vars(), &["A"]);
        assert_eq!(kmap.col_vars(), &["B"]);
        assert_eq!(kmap.cells(), &[vec![false, false], vec![true, false]]);
    }

    #[test]
    fn test_three_vars_gray_columns() {
        // Only the row A=0, B=1, C=1 is true.
        let kmap = table("NOT A AND B AND C", &["A", "B", "C"]).karnaugh_map().unwrap();
        assert_eq!(kmap.col_vars(), &["B", "C"]);
        // Columns are ordered 00, 01, 11, 10: BC=11 is column 2.
        assert_eq!(kmap.get(0, 2), Some(true));
        assert_eq!(kmap.cells().iter().flatten().filter(|&&v| v).count(), 1);
    }

    #[test]
    fn test_four_vars() {
        let kmap = table("A AND B AND NOT C AND D", &["A", "B", "C", "D"]).karnaugh_map().unwrap();
        assert_eq!(kmap.row_vars(), &["A", "B"]);
        // AB=11 is row 2, CD=01 is column 1.
        assert_eq!(kmap.get(2, 1), Some(true));
        assert_eq!(kmap.cells().len(), 4);
        assert!(kmap.cells().iter().all(|row| row.len() == 4));
    }

    #[test]
    fn test_unsupported_sizes() {
        assert!(table("A", &["A"]).karnaugh_map().is_none());
        assert!(table("A", &["A", "B", "C", "D", "E"]).karnaugh_map().is_none());
    }

    #[test]
    fn test_display() {
        let kmap = table("A XOR B", &["A", "B"]).karnaugh_map().unwrap();
        let text = kmap.to_string();
        assert_eq!(text, "    B=0 1\nA=0   0 1\n  1   1 0\n");
    }
}
