//! Spreadsheet grid primitives.
//!
//! The whole engine works in 1-based grid coordinates (row 1 is the top
//! row, column 1 is "A"), matching how the generated formulas address
//! cells. Renderers translate to whatever their spreadsheet library
//! expects at the write boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Convert a 1-based column index to its spreadsheet letter label
/// (1 -> A, 26 -> Z, 27 -> AA).
///
/// Formulas embed these labels as text, so the mapping must be exact.
pub fn col_to_letter(col: u32) -> String {
    debug_assert!(col >= 1, "grid columns are 1-based");
    let mut result = String::new();
    let mut n = col;
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        result.insert(0, (b'A' + rem) as char);
        n = (n - 1) / 26;
    }
    result
}

/// A single cell coordinate, 1-based in both dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: u32,
    pub col: u32,
}

impl CellRef {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Column letter label for this cell.
    pub fn letter(&self) -> String {
        col_to_letter(self.col)
    }

    /// Fully absolute reference, e.g. `$E$2`.
    pub fn absolute(&self) -> String {
        format!("${}${}", self.letter(), self.row)
    }

    /// Row-anchored reference, e.g. `D$7`. Copying a rule down a column
    /// keeps it pointing at that row's own field cell.
    pub fn row_anchored(&self) -> String {
        format!("{}${}", self.letter(), self.row)
    }
}

impl fmt::Display for CellRef {
    /// Plain relative reference, e.g. `F3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter(), self.row)
    }
}
