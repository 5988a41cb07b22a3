use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// `YYYY-M-D` or `YYYY/M/D`
static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})[-/](\d{1,2})[-/](\d{1,2})$").expect("valid ISO date pattern"));

/// `D-M-Y` or `D/M/Y`, two-digit years meaning 20YY
static LATAM_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})[-/](\d{1,2})[-/](\d{2,4})$").expect("valid LATAM date pattern"));

/// Read a calendar date from cell text. Impossible dates (31/02) are rejected
/// by the calendar, not by range checks on the components.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let text = raw.trim();

    let (year, month, day) = if let Some(caps) = ISO_DATE.captures(text) {
        (caps[1].parse::<i32>().ok()?, caps[2].parse::<u32>().ok()?, caps[3].parse::<u32>().ok()?)
    } else if let Some(caps) = LATAM_DATE.captures(text) {
        let year_text = &caps[3];
        let mut year = year_text.parse::<i32>().ok()?;
        if year_text.len() == 2 {
            year += 2000;
        }
        (year, caps[2].parse::<u32>().ok()?, caps[1].parse::<u32>().ok()?)
    } else {
        return None;
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// `DD/MM/YYYY`, zero padded
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_date_text(raw: &str) -> Option<String> {
    parse_date(raw).map(format_date)
}
