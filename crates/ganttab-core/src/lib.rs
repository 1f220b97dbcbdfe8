//! # ganttab-core
//!
//! Core domain model and traits for the ganttab roadmap generator.
//!
//! This crate provides:
//! - Domain types: `Project`, `Repo`, `Task`, `TaskStatus`
//! - Grid primitives: `CellRef`, `col_to_letter`, the roadmap `layout` constants
//! - The `Renderer` trait and error types
//!
//! ## Example
//!
//! ```rust
//! use ganttab_core::{Task, TaskStatus};
//! use chrono::NaiveDate;
//!
//! let task = Task::new("Ship the parser")
//!     .url("https://github.com/acme/widget")
//!     .assignee("alice")
//!     .status("In Progress")
//!     .dates(
//!         NaiveDate::from_ymd_opt(2021, 1, 1),
//!         NaiveDate::from_ymd_opt(2021, 1, 5),
//!     );
//!
//! assert_eq!(task.progress(), 50);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod grid;
pub mod layout;

pub use grid::{col_to_letter, CellRef};

// ============================================================================
// Task
// ============================================================================

/// A single exported task row.
///
/// Dates are `Option` because exports routinely contain empty or
/// unparseable date cells; a `None` date is excluded from span
/// computation but the task itself is still rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task title as exported
    pub title: String,
    /// Source URL, used to derive the repository bucket
    pub url: String,
    /// Assignee display name (may be empty)
    pub assignee: String,
    /// Free-text status; unknown values are tolerated
    pub status: String,
    /// Planned start date
    pub start_date: Option<NaiveDate>,
    /// Planned end (target) date
    pub end_date: Option<NaiveDate>,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: String::new(),
            assignee: String::new(),
            status: "Todo".into(),
            start_date: None,
            end_date: None,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = assignee.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Progress percentage derived from the task status.
    pub fn progress(&self) -> u8 {
        progress_percent(&self.status)
    }
}

// ============================================================================
// Status
// ============================================================================

/// The closed set of statuses with a known progress mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Parse an export status label. Unknown labels yield `None`;
    /// callers decide the fallback (rendering treats unknown as 0%).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Todo" => Some(Self::Todo),
            "In Progress" => Some(Self::InProgress),
            "Done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Progress percentage for the status.
    pub const fn progress(self) -> u8 {
        match self {
            Self::Todo => 0,
            Self::InProgress => 50,
            Self::Done => 100,
        }
    }
}

/// Total status → progress mapping: known statuses map to 0/50/100,
/// everything else to 0.
pub fn progress_percent(status: &str) -> u8 {
    TaskStatus::from_label(status).map_or(0, TaskStatus::progress)
}

// ============================================================================
// Repo
// ============================================================================

/// Tasks bucketed under one source repository.
///
/// Built once per parse pass and immutable afterward; task order is the
/// order tasks appeared in the export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    /// "owner/repo", or "Unknown" when the URL shape is unrecognized
    pub name: String,
    pub tasks: Vec<Task>,
}

impl Repo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }
}

// ============================================================================
// Project
// ============================================================================

/// A fully assembled roadmap project, ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Earliest valid task start date (today when no task has one)
    pub start_date: NaiveDate,
    /// Latest valid task end date (today when no task has one)
    pub end_date: NaiveDate,
    /// Rendered timeline length in days; always a positive multiple of 7
    pub total_days: i64,
    /// Repositories in first-seen order
    pub repos: Vec<Repo>,
}

impl Project {
    /// Total number of tasks across all repositories.
    pub fn task_count(&self) -> usize {
        self.repos.iter().map(|r| r.tasks.len()).sum()
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Output rendering
pub trait Renderer {
    type Output;

    /// Render a project roadmap to the output format
    fn render(&self, project: &Project) -> Result<Self::Output, RenderError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Rendering error
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

// ============================================================================
// Tests
// ============================================================================
