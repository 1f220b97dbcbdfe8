//! Conditional-format application.
//!
//! Forwards each engine rule to the workbook as-is. Rules land in list
//! order, which is also the priority order the spreadsheet engine uses
//! when several rules match one cell.

use crate::{format_err, styles, xl_col, xl_row};
use ganttab_core::RenderError;
use ganttab_layout::{ConditionalRule, RuleEffect};
use rust_xlsxwriter::{ConditionalFormatFormula, Format, FormatBorder, Formula, Worksheet};

pub(crate) fn apply(sheet: &mut Worksheet, rules: &[ConditionalRule]) -> Result<(), RenderError> {
    for rule in rules {
        let conditional = ConditionalFormatFormula::new()
            .set_rule(Formula::new(format!("={}", rule.condition.formula())))
            .set_format(effect_format(rule.effect));

        let row = xl_row(rule.target.row);
        let col = xl_col(rule.target.col);
        sheet
            .add_conditional_format(row, col, row, col, &conditional)
            .map_err(format_err)?;
    }
    Ok(())
}

/// Map a semantic rule effect to its concrete style. Border sides a
/// conditional format leaves unset keep whatever the cell already has,
/// so the today outline is additive by construction.
fn effect_format(effect: RuleEffect) -> Format {
    match effect {
        RuleEffect::DoneFill => Format::new().set_background_color(styles::color::DONE),
        RuleEffect::TodoFill => Format::new().set_background_color(styles::color::TODO),
        RuleEffect::TodayOutline { close_bottom } => {
            let format = accent_sides(Format::new());
            if close_bottom {
                format
                    .set_border_bottom(FormatBorder::Thin)
                    .set_border_bottom_color(styles::color::BORDER_DARK)
            } else {
                format
            }
        }
        RuleEffect::HeaderOutline => accent_sides(Format::new())
            .set_border_top(FormatBorder::Thin)
            .set_border_top_color(styles::color::BORDER_DARK)
            .set_border_bottom(FormatBorder::Thin)
            .set_border_bottom_color(styles::color::BORDER_DARK),
    }
}

fn accent_sides(format: Format) -> Format {
    format
        .set_border_left(FormatBorder::Medium)
        .set_border_left_color(styles::color::ACCENT)
        .set_border_right(FormatBorder::Medium)
        .set_border_right_color(styles::color::ACCENT)
}
