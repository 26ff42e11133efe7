//! Date reformatting to `YYYY-MM-DD`
//!
//! A textual reformatting step, not a calendar parser: month 13 survives,
//! "32/13/2020" becomes "2020-13-32". Use [`is_plausible`] to check a result
//! against the calendar.

use chrono::{Datelike, NaiveDate};
use predilex_domain::CanonicalDate;

/// French month names and their two-digit codes
pub const MONTHS: [(&str, &str); 12] = [
    ("janvier", "01"),
    ("février", "02"),
    ("mars", "03"),
    ("avril", "04"),
    ("mai", "05"),
    ("juin", "06"),
    ("juillet", "07"),
    ("août", "08"),
    ("septembre", "09"),
    ("octobre", "10"),
    ("novembre", "11"),
    ("décembre", "12"),
];

/// Reformat a raw `D/M/Y`, `D <mois> Y` or `D-M-Y` token as `Y-M-D`
///
/// Month names are replaced case-sensitively, `/` and spaces become `-`, and
/// the three resulting parts are reordered with the third part as the year.
/// Day and month are padded to two digits. Returns `None` unless there are
/// exactly three all-digit parts.
pub fn normalize(raw: &str) -> Option<CanonicalDate> {
    if raw.is_empty() {
        return None;
    }

    let mut date = raw.to_string();
    for (name, number) in MONTHS {
        if date.contains(name) {
            date = date.replace(name, number);
        }
    }
    let date = date.replace('/', "-").replace(' ', "-");

    let parts: Vec<&str> = date.split('-').collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };
    if ![day, month, year].iter().all(|p| is_digits(p)) {
        return None;
    }

    Some(CanonicalDate::from_parts(year, &pad2(month), &pad2(day)))
}

/// Whether a canonical date is a real calendar date in `1900..=max_year`
pub fn is_plausible(date: &CanonicalDate, max_year: i32) -> bool {
    match NaiveDate::parse_from_str(date.as_str(), "%Y-%m-%d") {
        Ok(parsed) => (1900..=max_year).contains(&parsed.year()),
        Err(_) => false,
    }
}

fn is_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

fn pad2(part: &str) -> String {
    if part.len() == 1 {
        format!("0{}", part)
    } else {
        part.to_string()
    }
}
