//! Header block: title, company and lead lines, project date cells,
//! and the task header row.

use crate::{format_err, styles, xl_col, xl_row, RoadmapRenderer};
use ganttab_core::{layout, Project, RenderError};
use rust_xlsxwriter::Worksheet;

pub(crate) fn setup(
    sheet: &mut Worksheet,
    renderer: &RoadmapRenderer,
    project: &Project,
) -> Result<(), RenderError> {
    setup_title(sheet, &renderer.title)?;
    setup_subtitle(sheet, layout::COMPANY_ROW, &renderer.company)?;
    setup_subtitle(sheet, layout::LEAD_ROW, &renderer.lead)?;
    setup_project_dates(sheet, project)?;
    setup_task_headers(sheet)?;
    Ok(())
}

fn setup_title(sheet: &mut Worksheet, title: &str) -> Result<(), RenderError> {
    sheet
        .set_row_height(xl_row(layout::TITLE_ROW), layout::CELL_HEIGHT * 2.0)
        .map_err(format_err)?;
    sheet
        .merge_range(
            xl_row(layout::TITLE_ROW),
            xl_col(layout::DETAILS_COL),
            xl_row(layout::TITLE_ROW),
            xl_col(layout::TIMELINE_COL - 1),
            title,
            &styles::title(),
        )
        .map_err(format_err)?;
    Ok(())
}

fn setup_subtitle(sheet: &mut Worksheet, row: u32, text: &str) -> Result<(), RenderError> {
    sheet
        .set_row_height(xl_row(row), layout::CELL_HEIGHT)
        .map_err(format_err)?;
    sheet
        .merge_range(
            xl_row(row),
            xl_col(layout::DETAILS_COL),
            xl_row(row),
            xl_col(layout::DETAILS_COL + 1),
            text,
            &styles::subtitle(),
        )
        .map_err(format_err)?;
    Ok(())
}

/// The start value cell doubles as the anchor the timeline's date
/// formula chain references, so it must hold a real date serial.
fn setup_project_dates(sheet: &mut Worksheet, project: &Project) -> Result<(), RenderError> {
    let label_col = layout::DETAILS_COL + 3;
    let value_col = layout::DETAILS_COL + 4;

    sheet
        .write_with_format(
            xl_row(layout::PROJECT_START_ROW),
            xl_col(label_col),
            "Project Start:",
            &styles::date_label(),
        )
        .map_err(format_err)?;
    sheet
        .write_datetime_with_format(
            xl_row(layout::PROJECT_START_ROW),
            xl_col(value_col),
            &project.start_date,
            &styles::date_value(),
        )
        .map_err(format_err)?;

    sheet
        .write_with_format(
            xl_row(layout::PROJECT_END_ROW),
            xl_col(label_col),
            "Project End:",
            &styles::date_label(),
        )
        .map_err(format_err)?;
    sheet
        .write_datetime_with_format(
            xl_row(layout::PROJECT_END_ROW),
            xl_col(value_col),
            &project.end_date,
            &styles::date_value(),
        )
        .map_err(format_err)?;

    Ok(())
}

fn setup_task_headers(sheet: &mut Worksheet) -> Result<(), RenderError> {
    sheet
        .set_row_height(xl_row(layout::TASK_HEADER_ROW), layout::CELL_HEIGHT)
        .map_err(format_err)?;

    let format = styles::task_header();
    for (i, (caption, width)) in layout::TASK_HEADERS.iter().enumerate() {
        let col = layout::DETAILS_COL + i as u32;
        sheet
            .set_column_width(xl_col(col), *width)
            .map_err(format_err)?;
        sheet
            .write_with_format(xl_row(layout::TASK_HEADER_ROW), xl_col(col), *caption, &format)
            .map_err(format_err)?;
    }
    Ok(())
}
