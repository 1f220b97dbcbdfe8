//! Timeline band: the merged week labels, the date row and the weekday
//! row, one column per day.
//!
//! Date cells are written as the formula chain computed by
//! `ganttab-layout`; the sheet recalculates the whole band when the
//! project-start anchor cell is edited.

use crate::{format_err, styles, xl_col, xl_row};
use ganttab_core::RenderError;
use ganttab_layout::DayColumn;
use rust_xlsxwriter::{Formula, Worksheet};

pub(crate) fn build(sheet: &mut Worksheet, columns: &[DayColumn]) -> Result<(), RenderError> {
    let week = styles::week_label();
    let date = styles::date_digit();

    for col in columns {
        sheet
            .set_column_width(xl_col(col.column), ganttab_core::layout::DAY_COL_WIDTH)
            .map_err(format_err)?;

        let date_cell = col.date_cell();
        sheet
            .write_formula_with_format(
                xl_row(date_cell.row),
                xl_col(date_cell.col),
                Formula::new(col.date.formula()),
                &date,
            )
            .map_err(format_err)?;

        let weekday_cell = col.weekday_cell();
        sheet
            .write_formula_with_format(
                xl_row(weekday_cell.row),
                xl_col(weekday_cell.col),
                Formula::new(col.weekday_formula()),
                &week,
            )
            .map_err(format_err)?;

        if let Some((first, last)) = col.week_merge {
            let week_cell = col.week_cell();
            if last > first {
                // Merge first, then overwrite the lead cell with the
                // week formula (merge_range only takes strings).
                sheet
                    .merge_range(
                        xl_row(week_cell.row),
                        xl_col(first),
                        xl_row(week_cell.row),
                        xl_col(last),
                        "",
                        &week,
                    )
                    .map_err(format_err)?;
            }
            sheet
                .write_formula_with_format(
                    xl_row(week_cell.row),
                    xl_col(week_cell.col),
                    Formula::new(col.week_formula()),
                    &week,
                )
                .map_err(format_err)?;
        }
    }

    Ok(())
}
