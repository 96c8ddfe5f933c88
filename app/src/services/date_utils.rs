//! Date helpers for the kid profile screens.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

/// Age at or below which the young avatar variant is shown. Presentational
/// only; never stored.
pub const YOUNG_AVATAR_MAX_AGE: i32 = 5;

/// Whole years between a birth date and today, calendar-aware: one year is
/// subtracted when today's month/day precedes the birth month/day.
pub fn age_in_years(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

pub fn uses_young_avatar(age: i32) -> bool {
    age <= YOUNG_AVATAR_MAX_AGE
}

/// Parse an ISO-8601 date string (YYYY-MM-DD).
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("invalid ISO-8601 date: {}", value))
}

/// Date widget display text, e.g. "2020 Jun 15".
pub fn format_dob_display(date: NaiveDate) -> String {
    format!(
        "{} {} {:02}",
        date.year(),
        month_abbrev(date.month()),
        date.day()
    )
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}
