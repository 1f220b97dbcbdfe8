//! The two date-parsing paths.
//!
//! Export date cells ride the tolerant path: take the date part of an
//! ISO timestamp, parse it, fall back to `None`. User-supplied dates
//! (CLI overrides) ride the strict path and fail loudly, since a
//! silently-defaulted override would shift the whole timeline without
//! anyone noticing.

use crate::ParseError;
use chrono::NaiveDate;

/// Tolerantly parse an exported date cell.
///
/// Takes the text before any `T` separator (exports emit
/// `2021-01-05T00:00:00`) and parses `YYYY-MM-DD`. Anything else is
/// `None`.
pub fn parse_iso_date(cell: &str) -> Option<NaiveDate> {
    let date_part = cell.split('T').next().unwrap_or("").trim();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Strictly parse a human-readable date like `January 5, 2021` or
/// `Jan 5, 2021` (ISO `2021-01-05` is accepted too).
pub fn parse_human_date(text: &str) -> Result<NaiveDate, ParseError> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%B %e, %Y")
        .or_else(|_| NaiveDate::parse_from_str(text, "%b %e, %Y"))
        .or_else(|_| NaiveDate::parse_from_str(text, "%Y-%m-%d"))
        .map_err(|_| ParseError::InvalidDate(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_path_strips_the_time_component() {
        assert_eq!(
            parse_iso_date("2021-01-05T00:00:00"),
            Some(date(2021, 1, 5))
        );
        assert_eq!(parse_iso_date("2021-01-05"), Some(date(2021, 1, 5)));
    }

    #[test]
    fn iso_path_tolerates_garbage() {
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("soon"), None);
        assert_eq!(parse_iso_date("2021-13-40"), None);
        assert_eq!(parse_iso_date("T00:00:00"), None);
    }

    #[test]
    fn human_path_accepts_month_names() {
        assert_eq!(parse_human_date("January 5, 2021").unwrap(), date(2021, 1, 5));
        assert_eq!(parse_human_date("Jan 5, 2021").unwrap(), date(2021, 1, 5));
        assert_eq!(parse_human_date("2021-01-05").unwrap(), date(2021, 1, 5));
    }

    #[test]
    fn human_path_rejects_malformed_months() {
        assert!(matches!(
            parse_human_date("Janvember 5, 2021"),
            Err(ParseError::InvalidDate(_))
        ));
        assert!(parse_human_date("").is_err());
        assert!(parse_human_date("5 of January 2021").is_err());
    }
}
