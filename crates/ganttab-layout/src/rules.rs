//! Conditional-formatting rule generation.
//!
//! Rules are structured values, not opaque strings: the condition keeps
//! its operand cell references so tests can assert on them, and
//! [`Condition::formula`] renders the exact Excel expression text the
//! sheet embeds. The spreadsheet engine evaluates every rule on a cell
//! independently; where two fills hold at once, list order decides
//! (done is emitted before todo, so done wins ties).
//!
//! Formula references are deliberately mixed: the day column's date
//! cell is fully relative, the task's field cells are row-anchored
//! (`D$7`) so a rule copied down a column keeps reading its own row.

use crate::timeline::DayColumn;
use ganttab_core::{layout, CellRef};
use serde::{Deserialize, Serialize};

/// Formula predicate of a rule, with structured operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// Today's date falls within `[date, date + 1)`.
    TodayInColumn { date: CellRef },
    /// The day lies in the completed fraction of the task's range:
    /// start ≤ date and start + floor(duration × progress / 100) − 1 ≥ date.
    DoneThroughColumn {
        start: CellRef,
        end: CellRef,
        progress: CellRef,
        date: CellRef,
    },
    /// The day lies within the task's scheduled range at all:
    /// end ≥ date and start < date + 1.
    ScheduledInColumn {
        start: CellRef,
        end: CellRef,
        date: CellRef,
    },
}

impl Condition {
    /// Render the exact formula text for the spreadsheet engine.
    pub fn formula(&self) -> String {
        match self {
            Self::TodayInColumn { date } => {
                format!("AND(TODAY()>={date},TODAY()<{date}+1)")
            }
            Self::DoneThroughColumn {
                start,
                end,
                progress,
                date,
            } => {
                let (s, e, p) = (
                    start.row_anchored(),
                    end.row_anchored(),
                    progress.row_anchored(),
                );
                format!("AND({s}<={date},ROUNDDOWN(({e}-{s}+1)*{p}/100,0)+{s}-1>={date})")
            }
            Self::ScheduledInColumn { start, end, date } => {
                let (s, e) = (start.row_anchored(), end.row_anchored());
                format!("AND({e}>={date},{s}<{date}+1)")
            }
        }
    }
}

/// What a matched rule does to its target cell. Colors and border
/// weights belong to the renderer's style configuration; the engine
/// only names the semantic effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleEffect {
    /// Solid fill in the "done" progress color.
    DoneFill,
    /// Solid fill in the "todo" progress color.
    TodoFill,
    /// Accent left/right border overlaid on the cell's existing
    /// borders. `close_bottom` is set on the last task row, which also
    /// forces a dark bottom border so the marker doesn't break the
    /// grid's bottom edge.
    TodayOutline { close_bottom: bool },
    /// Header-row variant: accent left/right over dark top/bottom.
    HeaderOutline,
}

/// One conditional-formatting rule for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalRule {
    pub target: CellRef,
    pub condition: Condition,
    pub effect: RuleEffect,
}

/// Inclusive row range of the repo/task region (between the header
/// block and the closing summary row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRowRange {
    pub first: u32,
    pub last: u32,
}

impl TaskRowRange {
    pub const fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    fn rows(self) -> impl Iterator<Item = u32> {
        self.first..=self.last
    }
}

/// Build the full rule list for a timeline and task-row region.
///
/// Per timeline column: one today rule for each of the two header rows
/// (the weekday row's condition references the *date row's* cell, not
/// its own), then per region row the done fill, todo fill and today
/// outline, in that order.
pub fn build_rules(columns: &[DayColumn], rows: TaskRowRange) -> Vec<ConditionalRule> {
    let mut out = Vec::with_capacity(columns.len() * (2 + 3 * rows.rows().count()));

    for col in columns {
        let date = col.date_cell();
        let today = Condition::TodayInColumn { date };

        out.push(ConditionalRule {
            target: date,
            condition: today,
            effect: RuleEffect::HeaderOutline,
        });
        out.push(ConditionalRule {
            target: col.weekday_cell(),
            condition: today,
            effect: RuleEffect::HeaderOutline,
        });

        for row in rows.rows() {
            let start = CellRef::new(row, layout::START_DATE_COL);
            let end = CellRef::new(row, layout::END_DATE_COL);
            let progress = CellRef::new(row, layout::PROGRESS_COL);
            let target = CellRef::new(row, col.column);

            out.push(ConditionalRule {
                target,
                condition: Condition::DoneThroughColumn {
                    start,
                    end,
                    progress,
                    date,
                },
                effect: RuleEffect::DoneFill,
            });
            out.push(ConditionalRule {
                target,
                condition: Condition::ScheduledInColumn { start, end, date },
                effect: RuleEffect::TodoFill,
            });
            out.push(ConditionalRule {
                target,
                condition: today,
                effect: RuleEffect::TodayOutline {
                    close_bottom: row == rows.last,
                },
            });
        }
    }

    out
}

/// Reference model for the done-fill predicate over day serial numbers:
/// true when `day` is within the completed fraction of `[start, end]`
/// at `progress` percent. The generated formula computes exactly this
/// in cell arithmetic.
pub fn done_fill_covers(start: i64, end: i64, progress: u8, day: i64) -> bool {
    let completed_days = (end - start + 1) * i64::from(progress) / 100;
    start <= day && start + completed_days - 1 >= day
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::build_columns;
    use pretty_assertions::assert_eq;

    const START_COL: u32 = layout::TIMELINE_COL;

    fn rules_for(total_days: i64, rows: TaskRowRange) -> Vec<ConditionalRule> {
        build_rules(&build_columns(START_COL, total_days), rows)
    }

    #[test]
    fn today_formula_text_is_exact() {
        let date = CellRef::new(layout::DATE_ROW, 6);
        let cond = Condition::TodayInColumn { date };
        assert_eq!(cond.formula(), "AND(TODAY()>=F3,TODAY()<F3+1)");
    }

    #[test]
    fn done_formula_text_is_exact() {
        let cond = Condition::DoneThroughColumn {
            start: CellRef::new(7, layout::START_DATE_COL),
            end: CellRef::new(7, layout::END_DATE_COL),
            progress: CellRef::new(7, layout::PROGRESS_COL),
            date: CellRef::new(layout::DATE_ROW, 6),
        };
        assert_eq!(
            cond.formula(),
            "AND(D$7<=F3,ROUNDDOWN((E$7-D$7+1)*C$7/100,0)+D$7-1>=F3)"
        );
    }

    #[test]
    fn todo_formula_text_is_exact() {
        let cond = Condition::ScheduledInColumn {
            start: CellRef::new(7, layout::START_DATE_COL),
            end: CellRef::new(7, layout::END_DATE_COL),
            date: CellRef::new(layout::DATE_ROW, 6),
        };
        assert_eq!(cond.formula(), "AND(E$7>=F3,D$7<F3+1)");
    }

    #[test]
    fn header_rules_come_first_per_column() {
        let rules = rules_for(7, TaskRowRange::new(5, 6));

        // 2 header rules + 3 rules × 2 rows, per column.
        assert_eq!(rules.len(), 7 * (2 + 3 * 2));

        let first = &rules[0];
        assert_eq!(first.target, CellRef::new(layout::DATE_ROW, 6));
        assert_eq!(first.effect, RuleEffect::HeaderOutline);

        // The weekday-row rule targets row 4 but its condition still
        // references the date row's cell.
        let second = &rules[1];
        assert_eq!(second.target, CellRef::new(layout::WEEKDAY_ROW, 6));
        assert_eq!(
            second.condition.formula(),
            "AND(TODAY()>=F3,TODAY()<F3+1)"
        );
    }

    #[test]
    fn task_cell_rules_are_done_todo_today_in_order() {
        let rules = rules_for(7, TaskRowRange::new(5, 5));
        let cell_rules: Vec<_> = rules
            .iter()
            .filter(|r| r.target == CellRef::new(5, 6))
            .collect();

        assert_eq!(cell_rules.len(), 3);
        assert_eq!(cell_rules[0].effect, RuleEffect::DoneFill);
        assert_eq!(cell_rules[1].effect, RuleEffect::TodoFill);
        assert_eq!(
            cell_rules[2].effect,
            RuleEffect::TodayOutline { close_bottom: true }
        );
    }

    #[test]
    fn only_the_last_row_closes_the_bottom_border() {
        let rules = rules_for(7, TaskRowRange::new(5, 8));
        let outlines: Vec<_> = rules
            .iter()
            .filter_map(|r| match r.effect {
                RuleEffect::TodayOutline { close_bottom } => Some((r.target.row, close_bottom)),
                _ => None,
            })
            .collect();

        for (row, close_bottom) in outlines {
            assert_eq!(close_bottom, row == 8, "row {row}");
        }
    }

    #[test]
    fn rules_reference_their_own_row_fields() {
        let rules = rules_for(7, TaskRowRange::new(5, 7));
        for rule in &rules {
            if let Condition::DoneThroughColumn { start, progress, .. } = rule.condition {
                assert_eq!(start.row, rule.target.row);
                assert_eq!(progress.row, rule.target.row);
                assert_eq!(start.letter(), "D");
                assert_eq!(progress.letter(), "C");
            }
        }
    }

    #[test]
    fn column_letter_advances_with_the_timeline() {
        let rules = rules_for(28, TaskRowRange::new(5, 5));
        // Column 27 ("AA") exists in a 28-day band starting at F (6).
        let wide: Vec<_> = rules
            .iter()
            .filter(|r| r.target == CellRef::new(5, 27))
            .collect();
        assert_eq!(
            wide[1].condition.formula(),
            "AND(E$5>=AA3,D$5<AA3+1)"
        );
    }

    #[test]
    fn done_fill_reference_model() {
        // 100% progress over days 3..=5 covers exactly 3, 4, 5.
        for day in 3..=5 {
            assert!(done_fill_covers(3, 5, 100, day), "day {day}");
        }
        assert!(!done_fill_covers(3, 5, 100, 6));
        assert!(!done_fill_covers(3, 5, 100, 2));

        // 50% of a 4-day range completes 2 days.
        assert!(done_fill_covers(10, 13, 50, 11));
        assert!(!done_fill_covers(10, 13, 50, 12));

        // 0% progress never fills, not even the start day.
        assert!(!done_fill_covers(3, 5, 0, 3));
    }

    #[test]
    fn done_and_todo_can_both_hold_and_done_is_listed_first() {
        // A fully-done single-day task satisfies both fills on its one
        // visible day; the engine applies rules in list order, so the
        // done fill must precede the todo fill for that cell.
        let rules = rules_for(7, TaskRowRange::new(5, 5));
        let cell: Vec<_> = rules
            .iter()
            .filter(|r| r.target == CellRef::new(5, 6))
            .map(|r| r.effect)
            .collect();
        assert_eq!(cell[0], RuleEffect::DoneFill);
        assert_eq!(cell[1], RuleEffect::TodoFill);
    }
}
