//! # ganttab-parser
//!
//! Parser for tab-separated task exports (the format project trackers
//! produce when exporting a board).
//!
//! The first line names the columns; recognized headers are `Title`,
//! `URL`, `Assignees`, `Status`, `Start Date` and `Target Date`. Field
//! extraction is deliberately forgiving: missing cells default, broken
//! date cells become `None` and are later excluded from span
//! computation. The one strict path is [`parse_human_date`], used for
//! explicit user-supplied dates, where silently defaulting would
//! corrupt the timeline.
//!
//! ## Example
//!
//! ```rust
//! use ganttab_parser::parse_project;
//!
//! let input = "Title\tURL\tAssignees\tStatus\tStart Date\tTarget Date\n\
//!     Ship it\thttps://github.com/acme/widget\talice\tDone\t2021-01-01T00:00:00\t2021-01-05T00:00:00\n";
//!
//! let project = parse_project(input);
//! assert_eq!(project.repos[0].name, "acme/widget");
//! assert_eq!(project.total_days, 7);
//! ```

pub mod dates;
pub mod tsv;

use ganttab_core::Project;
use ganttab_layout::{compute_span, group_by_repo};
use thiserror::Error;

pub use dates::{parse_human_date, parse_iso_date};
pub use tsv::parse_tasks;

/// Parsing error
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),
}

/// Parse a full export into a renderable [`Project`]: field extraction,
/// repository grouping, span computation.
///
/// Total over any input text; rows that carry nothing useful simply
/// produce empty-ish tasks and a degenerate one-week span.
pub fn parse_project(input: &str) -> Project {
    let tasks = parse_tasks(input);
    let span = compute_span(&tasks);
    Project {
        start_date: span.start,
        end_date: span.end,
        total_days: span.total_days,
        repos: group_by_repo(tasks),
    }
}
