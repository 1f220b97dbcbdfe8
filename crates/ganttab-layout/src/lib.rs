//! # ganttab-layout
//!
//! Layout and rule engine for the ganttab roadmap generator.
//!
//! This crate answers the two questions a roadmap sheet has to get
//! exactly right:
//! - *where* things go: project span, per-day column positions, week
//!   merges, the date-formula chain (`datemath`, `timeline`, `grouper`)
//! - *which* highlighting rules govern the grid: today marker, done and
//!   todo progress fills, as structured formula/effect pairs (`rules`)
//!
//! Everything here is pure computation over in-memory task lists; IO and
//! workbook concerns live in `ganttab-render`.
//!
//! ## Example
//!
//! ```rust
//! use ganttab_core::Task;
//! use ganttab_layout::{compute_span, group_by_repo};
//! use chrono::NaiveDate;
//!
//! let tasks = vec![
//!     Task::new("a")
//!         .url("https://github.com/acme/widget")
//!         .dates(
//!             NaiveDate::from_ymd_opt(2021, 1, 1),
//!             NaiveDate::from_ymd_opt(2021, 1, 5),
//!         ),
//! ];
//!
//! let span = compute_span(&tasks);
//! assert_eq!(span.total_days, 7);
//!
//! let repos = group_by_repo(tasks);
//! assert_eq!(repos[0].name, "acme/widget");
//! ```

pub mod datemath;
pub mod grouper;
pub mod rules;
pub mod timeline;

pub use datemath::{compute_span, span_between, Span};
pub use grouper::{group_by_repo, repo_name};
pub use rules::{build_rules, Condition, ConditionalRule, RuleEffect, TaskRowRange};
pub use timeline::{build_columns, end_column, DateFormula, DayColumn};
