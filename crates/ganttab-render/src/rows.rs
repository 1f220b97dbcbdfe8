//! Repo and task row emission.
//!
//! Each repository gets a merged title row followed by one row per
//! task; a summary row closes the grid at the bottom. Timeline cells
//! are blank but carry the border lattice the conditional rules later
//! paint over.

use crate::{format_err, styles, xl_col, xl_row};
use ganttab_core::{layout, RenderError, Repo, Task};
use ganttab_layout::DayColumn;
use rust_xlsxwriter::{Format, FormatBorder, Worksheet};

/// Row extents of the emitted body.
pub(crate) struct BodyLayout {
    /// First repo/task row
    pub first_row: u32,
    /// Last repo/task row; one less than `first_row` when there are no
    /// repos at all
    pub last_task_row: u32,
    /// The closing summary row
    pub summary_row: u32,
}

pub(crate) fn add_rows(
    sheet: &mut Worksheet,
    repos: &[Repo],
    columns: &[DayColumn],
) -> Result<BodyLayout, RenderError> {
    let first_row = layout::first_body_row();
    let mut row = first_row;

    for (index, repo) in repos.iter().enumerate() {
        let (title_fill, task_fill) = styles::REPO_PALETTE[index % styles::REPO_PALETTE.len()];
        add_repo_row(sheet, row, &repo.name, title_fill, columns)?;
        row += 1;
        for task in &repo.tasks {
            add_task_row(sheet, row, task, task_fill, columns)?;
            row += 1;
        }
    }

    let last_task_row = row - 1;
    add_summary_row(sheet, row, columns)?;

    Ok(BodyLayout {
        first_row,
        last_task_row,
        summary_row: row,
    })
}

fn add_repo_row(
    sheet: &mut Worksheet,
    row: u32,
    name: &str,
    fill: u32,
    columns: &[DayColumn],
) -> Result<(), RenderError> {
    sheet
        .set_row_height(xl_row(row), layout::CELL_HEIGHT)
        .map_err(format_err)?;
    sheet
        .merge_range(
            xl_row(row),
            xl_col(layout::DETAILS_COL),
            xl_row(row),
            xl_col(layout::TIMELINE_COL - 1),
            name,
            &styles::repo_title(fill),
        )
        .map_err(format_err)?;

    let band = dark_top_bottom(Format::new());
    let band_last = band.clone().set_border_right(FormatBorder::Thin).set_border_right_color(styles::color::BORDER_DARK);
    write_band(sheet, row, columns, &band, &band_last)
}

fn add_task_row(
    sheet: &mut Worksheet,
    row: u32,
    task: &Task,
    fill: u32,
    columns: &[DayColumn],
) -> Result<(), RenderError> {
    sheet
        .set_row_height(xl_row(row), layout::CELL_HEIGHT)
        .map_err(format_err)?;

    let title = if task.title.is_empty() {
        "Untitled Task".to_string()
    } else {
        task.title.clone()
    };
    sheet
        .write_with_format(
            xl_row(row),
            xl_col(layout::DETAILS_COL),
            format!("   {title}"),
            &styles::task_title(fill),
        )
        .map_err(format_err)?;
    sheet
        .write_with_format(
            xl_row(row),
            xl_col(layout::DETAILS_COL + 1),
            task.assignee.as_str(),
            &styles::task_cell(fill),
        )
        .map_err(format_err)?;
    sheet
        .write_with_format(
            xl_row(row),
            xl_col(layout::PROGRESS_COL),
            u32::from(task.progress()),
            &styles::task_progress(fill),
        )
        .map_err(format_err)?;

    let date_format = styles::task_date(fill);
    for (col, value) in [
        (layout::START_DATE_COL, task.start_date),
        (layout::END_DATE_COL, task.end_date),
    ] {
        match value {
            Some(date) => sheet
                .write_datetime_with_format(xl_row(row), xl_col(col), &date, &date_format)
                .map_err(format_err)?,
            None => sheet
                .write_blank(xl_row(row), xl_col(col), &date_format)
                .map_err(format_err)?,
        };
    }

    // Light lattice through the band; the block's outer edge stays dark.
    let light = Format::new()
        .set_border(FormatBorder::Thin)
        .set_border_color(styles::color::BORDER_LIGHT);
    let first = light
        .clone()
        .set_border_left(FormatBorder::Thin)
        .set_border_left_color(styles::color::BORDER_DARK);
    let last = light
        .clone()
        .set_border_right(FormatBorder::Thin)
        .set_border_right_color(styles::color::BORDER_DARK);

    for day in columns {
        let format = if day.column == layout::TIMELINE_COL {
            &first
        } else if day.column == columns[columns.len() - 1].column {
            &last
        } else {
            &light
        };
        sheet
            .write_blank(xl_row(row), xl_col(day.column), format)
            .map_err(format_err)?;
    }
    Ok(())
}

/// Closing row: light fill, dark top/bottom rails across details and
/// band alike.
fn add_summary_row(
    sheet: &mut Worksheet,
    row: u32,
    columns: &[DayColumn],
) -> Result<(), RenderError> {
    let end_col = columns.last().map_or(layout::TIMELINE_COL - 1, |c| c.column);
    let base = dark_top_bottom(Format::new().set_background_color(styles::color::FILL_LIGHT));

    for col in layout::DETAILS_COL..=end_col {
        let mut format = base.clone();
        if col == layout::DETAILS_COL {
            format = format
                .set_border_left(FormatBorder::Thin)
                .set_border_left_color(styles::color::BORDER_DARK);
        }
        if col == end_col {
            format = format
                .set_border_right(FormatBorder::Thin)
                .set_border_right_color(styles::color::BORDER_DARK);
        }
        sheet
            .write_blank(xl_row(row), xl_col(col), &format)
            .map_err(format_err)?;
    }
    Ok(())
}

fn dark_top_bottom(format: Format) -> Format {
    format
        .set_border_top(FormatBorder::Thin)
        .set_border_top_color(styles::color::BORDER_DARK)
        .set_border_bottom(FormatBorder::Thin)
        .set_border_bottom_color(styles::color::BORDER_DARK)
}

fn write_band(
    sheet: &mut Worksheet,
    row: u32,
    columns: &[DayColumn],
    format: &Format,
    last_format: &Format,
) -> Result<(), RenderError> {
    let Some(last) = columns.last() else {
        return Ok(());
    };
    for day in columns {
        let f = if day.column == last.column { last_format } else { format };
        sheet
            .write_blank(xl_row(row), xl_col(day.column), f)
            .map_err(format_err)?;
    }
    Ok(())
}
