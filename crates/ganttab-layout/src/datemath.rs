//! Project span computation.
//!
//! The rendered timeline always covers a whole number of weeks so the
//! merged week cells in the band line up. Span bounds come from two
//! independent reductions: the minimum over task start dates and the
//! maximum over task end dates. A task missing one date still
//! contributes the other.

use chrono::{Local, NaiveDate};
use ganttab_core::Task;
use serde::{Deserialize, Serialize};

/// Computed project span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Inclusive day count, rounded up to a multiple of 7; never below 7.
    pub total_days: i64,
}

/// Compute the project span from a task list.
///
/// Missing dates are skipped; if no task carries a valid start (or end)
/// date, that bound defaults to today. The degenerate empty-list span
/// is a single day, which rounds up to one week.
pub fn compute_span(tasks: &[Task]) -> Span {
    let today = Local::now().date_naive();
    compute_span_at(tasks, today)
}

/// `compute_span` with an explicit "now", so tests are deterministic.
pub fn compute_span_at(tasks: &[Task], today: NaiveDate) -> Span {
    let start = tasks
        .iter()
        .filter_map(|t| t.start_date)
        .min()
        .unwrap_or(today);
    let end = tasks
        .iter()
        .filter_map(|t| t.end_date)
        .max()
        .unwrap_or(today);

    span_between(start, end)
}

/// Span for explicit bounds (e.g. user-supplied overrides), with the
/// same week rounding as [`compute_span`].
pub fn span_between(start: NaiveDate, end: NaiveDate) -> Span {
    Span {
        start,
        end,
        total_days: round_to_weeks((end - start).num_days() + 1),
    }
}

/// Round an inclusive day count up to the next multiple of 7.
///
/// Inverted spans (end before start) produce a non-positive raw count;
/// those clamp to the one-week minimum rather than erroring, matching
/// the garbage-in/garbage-out stance of task rows themselves.
fn round_to_weeks(raw_days: i64) -> i64 {
    let rem = raw_days.rem_euclid(7);
    let rounded = if rem == 0 { raw_days } else { raw_days + 7 - rem };
    rounded.max(7)
}
