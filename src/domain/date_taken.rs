use chrono::NaiveDate;
use regex::Regex;

const TAKEN_ON_PREFIX: &str = "Taken on ";
const TAKEN_ON_FORMAT: &str = "%B %d, %Y";
const TAKEN_ON_SHAPE: &str = r"^([A-Za-z]+)\s+\d{1,2},\s+\d{4}$";

/// Parses a label like `Taken on June 5, 2021`.
///
/// Returns `None` when the prefix is missing, the rest of the line does not
/// match `<full month name> <day>, <four digit year>`, or the date does not
/// exist.
pub fn normalize_date_taken(label: &str) -> Option<NaiveDate> {
    let (_, rest) = label.split_once(TAKEN_ON_PREFIX)?;
    let date = rest.lines().next()?.trim();

    let shape = Regex::new(TAKEN_ON_SHAPE).ok()?;
    let month = shape.captures(date)?.get(1)?.as_str();

    let parsed = NaiveDate::parse_from_str(date, TAKEN_ON_FORMAT).ok()?;

    // chrono's %B also takes "Mar"; only the full name is accepted here.
    match parsed.format("%B").to_string().eq_ignore_ascii_case(month) {
        true => Some(parsed),
        false => None,
    }
}

pub fn to_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::{normalize_date_taken, to_iso_date};

    fn iso(label: &str) -> Option<String> {
        normalize_date_taken(label).map(|d| to_iso_date(&d))
    }

    #[test]
    fn parses_long_month_format() {
        assert_eq!(iso("Taken on March 3, 2022"), Some("2022-03-03".to_string()));
        assert_eq!(iso("Taken on June 5, 2021"), Some("2021-06-05".to_string()));
        assert_eq!(
            iso("Taken on December 31, 1999"),
            Some("1999-12-31".to_string())
        );
    }

    #[test]
    fn same_input_same_output() {
        assert_eq!(iso("Taken on March 3, 2022"), iso("Taken on March 3, 2022"));
    }

    #[test]
    fn missing_prefix_is_no_date() {
        assert_eq!(iso("March 3, 2022"), None);
        assert_eq!(iso("Uploaded on March 3, 2022"), None);
        assert_eq!(iso(""), None);
    }

    #[test]
    fn impossible_dates_are_no_date() {
        assert_eq!(iso("Taken on February 30, 2022"), None);
        assert_eq!(iso("Taken on February 29, 2023"), None);
        assert_eq!(iso("Taken on Smarch 3, 2022"), None);
    }

    #[test]
    fn other_formats_are_no_date() {
        assert_eq!(iso("Taken on 2022-03-03"), None);
        assert_eq!(iso("Taken on March 3 2022"), None);
        assert_eq!(iso("Taken on March 3, 2022 at noon"), None);
        assert_eq!(iso("Taken on Mar 3, 2022"), None);
        assert_eq!(iso("Taken on March 3,2022"), None);
        assert_eq!(iso("Taken on March 3, 222"), None);
        assert_eq!(iso("Taken on March 3, 02022"), None);
    }

    #[test]
    fn month_name_case_is_ignored() {
        assert_eq!(iso("Taken on march 3, 2022"), Some("2022-03-03".to_string()));
    }

    #[test]
    fn only_first_line_after_prefix_is_parsed() {
        assert_eq!(
            iso("Taken on June 5, 2021\nin Paris"),
            Some("2021-06-05".to_string())
        );
        assert_eq!(
            iso("Taken on June 5, 2021\r\nin Paris"),
            Some("2021-06-05".to_string())
        );
        assert_eq!(iso("Taken on \nJune 5, 2021"), None);
    }

    #[test]
    fn leap_day_is_kept() {
        assert_eq!(
            iso("Taken on February 29, 2024"),
            Some("2024-02-29".to_string())
        );
    }
}
