//! Timeline band layout.
//!
//! One grid column per calendar day. Date cells form a forward chain:
//! the first column references the project-start anchor cell, every
//! later column is "previous date cell + 1". The chain (rather than
//! `anchor + i` everywhere) is the contract the rendered sheet relies
//! on for live recalculation when the start date is edited.

use ganttab_core::{layout, CellRef};
use serde::{Deserialize, Serialize};

/// Recipe for a day column's date cell value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormula {
    /// First column: direct reference to the project-start anchor cell.
    Anchor(CellRef),
    /// Every later column: the previous column's date cell plus one day.
    PrevPlusOne(CellRef),
}

impl DateFormula {
    /// Render to the exact formula text embedded in the sheet.
    pub fn formula(&self) -> String {
        match self {
            Self::Anchor(anchor) => anchor.absolute(),
            Self::PrevPlusOne(prev) => format!("{prev}+1"),
        }
    }
}

/// One timeline day column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayColumn {
    /// 0-based offset from the project start
    pub day_index: usize,
    /// Absolute 1-based grid column
    pub column: u32,
    /// True exactly at day indices 0, 7, 14, ...
    pub is_week_start: bool,
    /// Date cell value recipe
    pub date: DateFormula,
    /// Merge span `(first_col, last_col)` for the week label row;
    /// present only on week-start columns
    pub week_merge: Option<(u32, u32)>,
}

impl DayColumn {
    /// This column's date cell.
    pub fn date_cell(&self) -> CellRef {
        CellRef::new(layout::DATE_ROW, self.column)
    }

    /// This column's weekday cell.
    pub fn weekday_cell(&self) -> CellRef {
        CellRef::new(layout::WEEKDAY_ROW, self.column)
    }

    /// This column's week-label cell (meaningful on week starts).
    pub fn week_cell(&self) -> CellRef {
        CellRef::new(layout::WEEK_ROW, self.column)
    }

    /// Formula extracting the one-letter weekday abbreviation from the
    /// date cell, e.g. `LEFT(TEXT(F3,"ddd"),1)`.
    pub fn weekday_formula(&self) -> String {
        format!("LEFT(TEXT({},\"ddd\"),1)", self.date_cell())
    }

    /// Week-label formula: an absolute reference to this column's date
    /// cell, so the merged week cell shows the week's first date.
    pub fn week_formula(&self) -> String {
        self.date_cell().absolute()
    }
}

/// Terminal column index: one past the last timeline column.
pub fn end_column(start_column: u32, total_days: i64) -> u32 {
    start_column + total_days.max(0) as u32
}

/// Build the ordered day-column descriptors for a timeline of
/// `total_days` days starting at `start_column`.
///
/// Pure and stateless: identical inputs produce structurally identical
/// output.
pub fn build_columns(start_column: u32, total_days: i64) -> Vec<DayColumn> {
    let end = end_column(start_column, total_days);
    let mut columns = Vec::with_capacity(total_days.max(0) as usize);

    for (day_index, column) in (start_column..end).enumerate() {
        let is_week_start = day_index % 7 == 0;
        let date = if day_index == 0 {
            DateFormula::Anchor(layout::start_anchor())
        } else {
            DateFormula::PrevPlusOne(CellRef::new(layout::DATE_ROW, column - 1))
        };
        // The merge span never runs past the final timeline column.
        // compute_span always hands us whole weeks, but callers may
        // not, so the guard stays.
        let week_merge = is_week_start.then(|| (column, (column + 6).min(end - 1)));

        columns.push(DayColumn {
            day_index,
            column,
            is_week_start,
            date,
            week_merge,
        });
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const START: u32 = layout::TIMELINE_COL; // 6, column "F"

    #[test]
    fn one_week_chain_starts_at_the_anchor() {
        let columns = build_columns(START, 7);
        assert_eq!(columns.len(), 7);

        // Column 0 references the external start cell directly.
        assert_eq!(columns[0].date.formula(), "$E$2");
        assert_eq!(columns[0].column, 6);

        // Columns 1-6 each reference their predecessor, never the anchor.
        assert_eq!(columns[1].date.formula(), "F3+1");
        assert_eq!(columns[2].date.formula(), "G3+1");
        assert_eq!(columns[6].date.formula(), "K3+1");
    }

    #[test]
    fn week_start_flags_at_multiples_of_seven() {
        let columns = build_columns(START, 21);
        let starts: Vec<_> = columns
            .iter()
            .filter(|c| c.is_week_start)
            .map(|c| c.day_index)
            .collect();
        assert_eq!(starts, vec![0, 7, 14]);
    }

    #[test]
    fn week_merges_cover_full_weeks() {
        let columns = build_columns(START, 14);
        assert_eq!(columns[0].week_merge, Some((6, 12)));
        assert_eq!(columns[7].week_merge, Some((13, 19)));
        assert!(columns[1].week_merge.is_none());
    }

    #[test]
    fn week_merge_never_exceeds_the_last_column() {
        // Not a multiple of 7: the final week is truncated, not
        // extended past the band.
        let columns = build_columns(START, 10);
        assert_eq!(columns[7].week_merge, Some((13, 15)));
    }

    #[test]
    fn weekday_and_week_formulas_reference_the_date_row() {
        let columns = build_columns(START, 7);
        assert_eq!(columns[0].weekday_formula(), "LEFT(TEXT(F3,\"ddd\"),1)");
        assert_eq!(columns[1].weekday_formula(), "LEFT(TEXT(G3,\"ddd\"),1)");
        assert_eq!(columns[0].week_formula(), "$F$3");
    }

    #[test]
    fn terminal_column_is_start_plus_total() {
        assert_eq!(end_column(START, 42), 48);
        let columns = build_columns(START, 42);
        assert_eq!(columns.last().unwrap().column, 47);
    }

    #[test]
    fn building_twice_is_idempotent() {
        assert_eq!(build_columns(START, 28), build_columns(START, 28));
    }

    #[test]
    fn zero_days_builds_nothing() {
        assert!(build_columns(START, 0).is_empty());
    }
}
