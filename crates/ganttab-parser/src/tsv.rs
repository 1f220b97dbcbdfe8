//! Header-driven TSV field extraction.

use crate::dates::parse_iso_date;
use ganttab_core::Task;

const TITLE: &str = "Title";
const URL: &str = "URL";
const ASSIGNEES: &str = "Assignees";
const STATUS: &str = "Status";
const START_DATE: &str = "Start Date";
const TARGET_DATE: &str = "Target Date";

struct HeaderMap {
    columns: Vec<String>,
}

impl HeaderMap {
    fn parse(line: &str) -> Self {
        Self {
            columns: line.split('\t').map(|h| h.trim().to_string()).collect(),
        }
    }

    fn field<'a>(&self, row: &[&'a str], name: &str) -> Option<&'a str> {
        let idx = self.columns.iter().position(|c| c == name)?;
        row.get(idx).copied()
    }
}

/// Extract tasks from an export. The first non-empty line is the
/// header; every following non-empty line is one task row. Missing
/// cells default (`""`, status `"Todo"`), unparseable dates become
/// `None`.
pub fn parse_tasks(input: &str) -> Vec<Task> {
    let mut lines = input.lines().filter(|l| !l.trim().is_empty());
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let header = HeaderMap::parse(header_line);

    lines
        .map(|line| {
            let row: Vec<&str> = line.split('\t').collect();
            let field = |name: &str| header.field(&row, name).unwrap_or("");

            let status = match field(STATUS) {
                "" => "Todo",
                s => s,
            };

            Task::new(field(TITLE))
                .url(field(URL))
                .assignee(field(ASSIGNEES))
                .status(status)
                .dates(
                    parse_iso_date(field(START_DATE)),
                    parse_iso_date(field(TARGET_DATE)),
                )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_fields_by_header_name() {
        // Column order differs from the canonical export.
        let input = "\
Status\tTitle\tURL\tStart Date\tTarget Date\tAssignees
Done\tShip\thttps://github.com/a/b\t2021-03-01\t2021-03-03\tdana
";
        let tasks = parse_tasks(input);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Ship");
        assert_eq!(tasks[0].assignee, "dana");
        assert_eq!(tasks[0].status, "Done");
        assert_eq!(
            tasks[0].start_date,
            NaiveDate::from_ymd_opt(2021, 3, 1)
        );
    }

    #[test]
    fn short_rows_and_missing_columns_default() {
        let input = "\
Title\tURL
Only a title
";
        let tasks = parse_tasks(input);
        assert_eq!(tasks[0].title, "Only a title");
        assert_eq!(tasks[0].url, "");
        assert_eq!(tasks[0].assignee, "");
        assert_eq!(tasks[0].status, "Todo");
        assert_eq!(tasks[0].start_date, None);
        assert_eq!(tasks[0].end_date, None);
    }

    #[test]
    fn empty_status_defaults_to_todo() {
        let input = "\
Title\tStatus
t\t
";
        let tasks = parse_tasks(input);
        assert_eq!(tasks[0].status, "Todo");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let input = "\
Title\tURL

a\thttps://github.com/x/y

b\thttps://github.com/x/y
";
        let tasks = parse_tasks(input);
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn empty_input_yields_no_tasks() {
        assert!(parse_tasks("").is_empty());
        assert!(parse_tasks("\n\n").is_empty());
    }
}
