//! Display helpers for dates and day distances.
//!
//! Everything here is pure; callers pass "today" in explicitly.

use chrono::NaiveDate;

pub(crate) const EMPTY_NOTE_PLACEHOLDER: &str = "Empty note";

/// "Wednesday, January 10, 2024"
pub(crate) fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "Jan 10, 2024"
pub(crate) fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "January 2024"
pub(crate) fn month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Day-of-month number used in grid cells.
pub(crate) fn day_number(date: NaiveDate) -> String {
    date.format("%-d").to_string()
}

/// Stable DOM id for a day section (feed scroll anchors).
pub(crate) fn day_anchor_id(date: NaiveDate) -> String {
    format!("day-{}", date.format("%Y-%m-%d"))
}

pub(crate) fn note_display_text(text: &str) -> &str {
    if text.trim().is_empty() {
        EMPTY_NOTE_PLACEHOLDER
    } else {
        text
    }
}

/// Whole days from `date` to `today`: positive when `date` is in the past.
pub(crate) fn day_delta(date: NaiveDate, today: NaiveDate) -> i64 {
    (today - date).num_days()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Countdown {
    Today,
    DaysAgo(u64),
    DaysUntil(u64),
}

impl Countdown {
    pub fn between(date: NaiveDate, today: NaiveDate) -> Self {
        let delta = day_delta(date, today);
        match delta {
            0 => Countdown::Today,
            d if d > 0 => Countdown::DaysAgo(d.unsigned_abs()),
            d => Countdown::DaysUntil(d.unsigned_abs()),
        }
    }

    /// Numeric part; `None` for today.
    pub fn count(&self) -> Option<u64> {
        match self {
            Countdown::Today => None,
            Countdown::DaysAgo(n) | Countdown::DaysUntil(n) => Some(*n),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Countdown::Today => "Today",
            Countdown::DaysAgo(_) => "Days Ago",
            Countdown::DaysUntil(_) => "Days Until",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_date_formats() {
        let date = d(2024, 1, 10);
        assert_eq!(long_date(date), "Wednesday, January 10, 2024");
        assert_eq!(short_date(date), "Jan 10, 2024");
        assert_eq!(month_year(date), "January 2024");
        assert_eq!(day_number(date), "10");
        assert_eq!(day_anchor_id(d(2024, 3, 5)), "day-2024-03-05");
    }

    #[test]
    fn test_note_display_text_placeholder() {
        assert_eq!(note_display_text(""), EMPTY_NOTE_PLACEHOLDER);
        assert_eq!(note_display_text("   "), EMPTY_NOTE_PLACEHOLDER);
        assert_eq!(note_display_text("sunrise"), "sunrise");
    }

    #[test]
    fn test_countdown_today() {
        let today = d(2024, 6, 15);
        let c = Countdown::between(today, today);
        assert_eq!(c, Countdown::Today);
        assert_eq!(c.label(), "Today");
        assert_eq!(c.count(), None);
    }

    #[test]
    fn test_countdown_past_is_days_ago() {
        let today = d(2024, 6, 15);
        let c = Countdown::between(d(2024, 6, 12), today);
        assert_eq!(c.count(), Some(3));
        assert_eq!(c.label(), "Days Ago");
    }

    #[test]
    fn test_countdown_future_is_days_until() {
        let today = d(2024, 6, 15);
        let c = Countdown::between(d(2024, 6, 20), today);
        assert_eq!(c.count(), Some(5));
        assert_eq!(c.label(), "Days Until");
    }

    #[test]
    fn test_day_delta_crosses_year_boundary() {
        assert_eq!(day_delta(d(2023, 12, 31), d(2024, 1, 1)), 1);
        assert_eq!(day_delta(d(2025, 1, 1), d(2024, 1, 1)), -366);
    }
}
