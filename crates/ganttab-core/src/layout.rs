//! Fixed grid geometry of the rendered roadmap.
//!
//! The sheet is split into a details block (task metadata columns) and
//! the timeline band that starts right after it. Rows 1-4 hold the
//! header: project title, company/project dates, lead, and the task
//! header row; the timeline band stacks its week/date/weekday rows over
//! the same region. Everything below row 4 is repo and task rows.
//!
//! These are immutable configuration values; nothing rewrites them at
//! runtime.

use crate::grid::CellRef;

/// First column of the details block.
pub const DETAILS_COL: u32 = 1;

/// Details block rows.
pub const TITLE_ROW: u32 = 1;
pub const COMPANY_ROW: u32 = 2;
pub const LEAD_ROW: u32 = 3;
pub const PROJECT_START_ROW: u32 = 2;
pub const PROJECT_END_ROW: u32 = 3;
pub const TASK_HEADER_ROW: u32 = 4;

/// Timeline band rows.
pub const WEEK_ROW: u32 = 2;
pub const DATE_ROW: u32 = 3;
pub const WEEKDAY_ROW: u32 = 4;

/// Task header captions with their column widths, in column order.
pub const TASK_HEADERS: [(&str, f64); 5] = [
    ("TASK", 45.0),
    ("ASSIGNEE", 20.0),
    ("PROGRESS", 10.0),
    ("START DATE", 15.0),
    ("END DATE", 15.0),
];

/// First timeline column; one grid column per calendar day from here.
pub const TIMELINE_COL: u32 = DETAILS_COL + TASK_HEADERS.len() as u32;

/// Width of each timeline day column.
pub const DAY_COL_WIDTH: f64 = 3.0;

/// Default row height.
pub const CELL_HEIGHT: f64 = 20.0;

/// Task-field columns referenced by the conditional-format formulas.
pub const PROGRESS_COL: u32 = DETAILS_COL + 2;
pub const START_DATE_COL: u32 = DETAILS_COL + 3;
pub const END_DATE_COL: u32 = DETAILS_COL + 4;

/// The project-start value cell that anchors the timeline's date
/// formula chain.
pub const fn start_anchor() -> CellRef {
    CellRef::new(PROJECT_START_ROW, TIMELINE_COL - 1)
}

/// First repo/task row, directly under the header block.
pub const fn first_body_row() -> u32 {
    TASK_HEADER_ROW + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_starts_after_detail_headers() {
        assert_eq!(TIMELINE_COL, 6);
        assert_eq!(first_body_row(), 5);
    }

    #[test]
    fn anchor_is_the_project_start_value_cell() {
        // Column E ("END DATE" header column), project-start row.
        assert_eq!(start_anchor().absolute(), "$E$2");
    }

    #[test]
    fn formula_field_columns() {
        use crate::grid::col_to_letter;
        assert_eq!(col_to_letter(PROGRESS_COL), "C");
        assert_eq!(col_to_letter(START_DATE_COL), "D");
        assert_eq!(col_to_letter(END_DATE_COL), "E");
    }
}
