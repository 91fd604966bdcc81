use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Number of week rows in a month grid
pub const GRID_ROWS: usize = 6;
/// Number of day columns in a month grid
pub const GRID_COLS: usize = 7;

/// Parse an event start string into a calendar date
///
/// Accepts plain dates (`2024-01-01`), RFC 3339 timestamps
/// (`2024-01-01T10:00:00Z`) and naive timestamps (`2024-01-01T10:00:00`).
/// Timestamps keep the date as written, without shifting between zones.
pub fn parse_event_date(start: &str) -> Option<NaiveDate> {
    let start = start.trim();

    if let Ok(date) = NaiveDate::parse_from_str(start, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(start) {
        return Some(date_time.date_naive());
    }

    NaiveDateTime::parse_from_str(start, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

/// Today's date in the given timezone
pub fn today_in(timezone: &Tz) -> NaiveDate {
    Utc::now().with_timezone(timezone).date_naive()
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Monday on or before the first day of the month, where the grid starts
pub fn grid_start(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first - Duration::days(first.weekday().num_days_from_monday() as i64)
}

/// Position of `date` in the month grid, if it is visible
pub fn grid_index(focus: NaiveDate, date: NaiveDate) -> Option<usize> {
    let offset = date.signed_duration_since(grid_start(focus)).num_days();
    if (0..(GRID_ROWS * GRID_COLS) as i64).contains(&offset) {
        Some(offset as usize)
    } else {
        None
    }
}
