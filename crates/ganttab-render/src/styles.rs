//! Visual design configuration.
//!
//! Immutable values only: colors, the font family, and constructors for
//! the `Format`s the sheet uses. Nothing here is rewritten at runtime;
//! renderers take what they need and clone.

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder};

pub const FONT: &str = "Calibri";

/// ARGB color constants.
pub mod color {
    /// Neutral dark border lines
    pub const BORDER_DARK: u32 = 0x80_80_80;
    /// Light border lattice inside the timeline band
    pub const BORDER_LIGHT: u32 = 0xDF_DF_DF;
    /// Accent for the current-day marker
    pub const ACCENT: u32 = 0x00_B0_50;
    /// Header band fill (date row)
    pub const FILL_DARK: u32 = 0xD9_D9_D9;
    /// Header band fill (week/weekday rows, summary row)
    pub const FILL_LIGHT: u32 = 0xF2_F2_F2;
    /// Completed-portion progress fill
    pub const DONE: u32 = 0x00_B0_F0;
    /// Remaining-portion progress fill
    pub const TODO: u32 = 0x00_70_C0;
}

/// Repo color pairs `(title_fill, subtask_fill)`, cycled by repo index.
pub const REPO_PALETTE: [(u32, u32); 4] = [
    (0xBD_D7_EE, 0xDD_EB_F7),
    (0xC6_E0_B4, 0xE2_EF_DA),
    (0xFF_E6_99, 0xFF_F2_CC),
    (0xF8_CB_AD, 0xFC_E4_D6),
];

fn base(size: f64) -> Format {
    Format::new().set_font_name(FONT).set_font_size(size)
}

fn left_aligned(format: Format) -> Format {
    format
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_indent(1)
}

fn dark_box(format: Format) -> Format {
    format
        .set_border(FormatBorder::Thin)
        .set_border_color(color::BORDER_DARK)
}

/// Sheet title, merged across the details block.
pub(crate) fn title() -> Format {
    left_aligned(base(22.0).set_bold())
}

/// Company / project-lead lines.
pub(crate) fn subtitle() -> Format {
    left_aligned(base(14.0))
}

/// "Project Start:" / "Project End:" labels.
pub(crate) fn date_label() -> Format {
    left_aligned(base(12.0))
}

/// Project start/end date values.
pub(crate) fn date_value() -> Format {
    base(12.0).set_num_format("dd.mm.yyyy")
}

/// Task header row cells.
pub(crate) fn task_header() -> Format {
    dark_box(left_aligned(base(11.0).set_bold()).set_background_color(color::FILL_LIGHT))
}

/// Merged week-label cells and the weekday row.
pub(crate) fn week_label() -> Format {
    dark_box(
        base(9.0)
            .set_background_color(color::FILL_LIGHT)
            .set_num_format("mmmm dd, yyyy")
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter),
    )
}

/// Date row cells: day-of-month digit only.
pub(crate) fn date_digit() -> Format {
    dark_box(
        base(9.0)
            .set_background_color(color::FILL_DARK)
            .set_num_format("d")
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter),
    )
}

/// Merged repo title cell.
pub(crate) fn repo_title(fill: u32) -> Format {
    left_aligned(base(11.0).set_bold())
        .set_background_color(fill)
        .set_border_top(FormatBorder::Thin)
        .set_border_top_color(color::BORDER_DARK)
        .set_border_left(FormatBorder::Thin)
        .set_border_left_color(color::BORDER_DARK)
        .set_border_bottom(FormatBorder::Thin)
        .set_border_bottom_color(color::BORDER_DARK)
}

/// Detail cell on a task row.
pub(crate) fn task_cell(fill: u32) -> Format {
    base(11.0)
        .set_align(FormatAlign::VerticalCenter)
        .set_background_color(fill)
}

/// First detail cell on a task row (carries the block's left edge).
pub(crate) fn task_title(fill: u32) -> Format {
    task_cell(fill)
        .set_border_left(FormatBorder::Thin)
        .set_border_left_color(color::BORDER_DARK)
}

/// Progress cell: integer rendered as a percentage.
pub(crate) fn task_progress(fill: u32) -> Format {
    task_cell(fill).set_num_format("0\"%\"")
}

/// Start/end date cell on a task row.
pub(crate) fn task_date(fill: u32) -> Format {
    task_cell(fill).set_num_format("dd.mm.yyyy")
}
