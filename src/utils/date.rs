use chrono::{Datelike, NaiveDate};

/// Renders a review date as zero-padded `MM/DD/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.month(), date.day(), date.year())
}
