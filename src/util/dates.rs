//! Calendar-date helpers for record timestamps and visit scheduling.
//!
//! Dates travel as ISO-8601 strings (`YYYY-MM-DD`, optionally followed by a
//! `T` time part). Lexicographic order of the date part is chronological order.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

/// Date portion of an ISO-8601 timestamp (`2024-05-01T10:00:00` -> `2024-05-01`).
#[must_use]
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Today's local date as `YYYY-MM-DD`, or `None` outside the browser.
#[must_use]
pub fn today_iso() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        Some(format_iso(now.get_full_year(), now.get_month() + 1, now.get_date()))
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

#[cfg(any(test, feature = "csr"))]
fn format_iso(year: u32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Whether `date` (a `YYYY-MM-DD` string) falls strictly before `today`.
#[must_use]
pub fn is_before(date: &str, today: &str) -> bool {
    date_part(date) < date_part(today)
}
