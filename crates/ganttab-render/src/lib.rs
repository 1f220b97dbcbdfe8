//! # ganttab-render
//!
//! XLSX rendering backend for ganttab roadmaps.
//!
//! The renderer is a thin orchestrator: it threads the layouts computed
//! by `ganttab-layout` through four writing stages (header block,
//! timeline band, repo/task rows, conditional formatting) and hands the
//! finished workbook back as bytes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ganttab_core::Renderer;
//! use ganttab_parser::parse_project;
//! use ganttab_render::RoadmapRenderer;
//!
//! let project = parse_project(&std::fs::read_to_string("tasks.tsv")?);
//! let renderer = RoadmapRenderer::new().title("Q3 Roadmap");
//! std::fs::write("roadmap.xlsx", renderer.render(&project)?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod band;
mod formatting;
mod header;
mod rows;
pub mod styles;

use ganttab_core::{layout, Project, RenderError, Renderer};
use ganttab_layout::{build_columns, build_rules, TaskRowRange};
use rust_xlsxwriter::Workbook;

/// Roadmap workbook renderer.
#[derive(Clone, Debug)]
pub struct RoadmapRenderer {
    /// Sheet title text
    pub title: String,
    /// Company line under the title
    pub company: String,
    /// Project lead line
    pub lead: String,
}

impl Default for RoadmapRenderer {
    fn default() -> Self {
        Self {
            title: "PROJECT TITLE".into(),
            company: "COMPANY NAME".into(),
            lead: "PROJECT LEAD".into(),
        }
    }
}

impl RoadmapRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the sheet title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Configure the company line
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    /// Configure the project-lead line
    pub fn lead(mut self, lead: impl Into<String>) -> Self {
        self.lead = lead.into();
        self
    }

    /// Render a roadmap and save it to `path`.
    pub fn render_to_file(
        &self,
        project: &Project,
        path: &std::path::Path,
    ) -> Result<(), RenderError> {
        let bytes = self.render(project)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Renderer for RoadmapRenderer {
    type Output = Vec<u8>;

    fn render(&self, project: &Project) -> Result<Self::Output, RenderError> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Gantt").map_err(format_err)?;
        sheet.set_screen_gridlines(false);

        let columns = build_columns(layout::TIMELINE_COL, project.total_days);

        header::setup(sheet, self, project)?;
        band::build(sheet, &columns)?;
        let body = rows::add_rows(sheet, &project.repos, &columns)?;
        let rules = build_rules(
            &columns,
            TaskRowRange::new(body.first_row, body.last_task_row),
        );
        formatting::apply(sheet, &rules)?;

        workbook.save_to_buffer().map_err(format_err)
    }
}

pub(crate) fn format_err(e: rust_xlsxwriter::XlsxError) -> RenderError {
    RenderError::Format(e.to_string())
}

/// Engine coordinates are 1-based; rust_xlsxwriter's are 0-based.
pub(crate) fn xl_row(row: u32) -> u32 {
    row - 1
}

pub(crate) fn xl_col(col: u32) -> u16 {
    (col - 1) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ganttab_core::{Repo, Task};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_project() -> Project {
        let mut repo_a = Repo::new("acme/widget");
        repo_a.tasks.push(
            Task::new("Design")
                .assignee("alice")
                .status("Done")
                .dates(Some(date(2021, 1, 1)), Some(date(2021, 1, 5))),
        );
        repo_a.tasks.push(
            Task::new("Build")
                .assignee("bob")
                .status("In Progress")
                .dates(Some(date(2021, 1, 6)), Some(date(2021, 1, 10))),
        );
        let mut repo_b = Repo::new("acme/gadget");
        repo_b.tasks.push(
            Task::new("Ship")
                .status("Todo")
                .dates(Some(date(2021, 2, 1)), Some(date(2021, 2, 5))),
        );

        Project {
            start_date: date(2021, 1, 1),
            end_date: date(2021, 2, 5),
            total_days: 42,
            repos: vec![repo_a, repo_b],
        }
    }

    #[test]
    fn renderer_builders() {
        let renderer = RoadmapRenderer::new()
            .title("Q3")
            .company("ACME")
            .lead("carol");
        assert_eq!(renderer.title, "Q3");
        assert_eq!(renderer.company, "ACME");
        assert_eq!(renderer.lead, "carol");
    }

    #[test]
    fn render_produces_valid_xlsx_bytes() {
        let bytes = RoadmapRenderer::new().render(&sample_project()).unwrap();
        // XLSX files start with PK (ZIP header)
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn empty_project_still_renders() {
        let today = date(2021, 6, 1);
        let project = Project {
            start_date: today,
            end_date: today,
            total_days: 7,
            repos: vec![],
        };
        let bytes = RoadmapRenderer::new().render(&project).unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn tasks_with_missing_dates_render() {
        let mut repo = Repo::new("Unknown");
        repo.tasks.push(Task::new("Dateless"));
        let project = Project {
            start_date: date(2021, 1, 1),
            end_date: date(2021, 1, 1),
            total_days: 7,
            repos: vec![repo],
        };
        let bytes = RoadmapRenderer::new().render(&project).unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn coordinate_translation() {
        assert_eq!(xl_row(1), 0);
        assert_eq!(xl_col(1), 0);
        assert_eq!(xl_col(27), 26);
    }
}
