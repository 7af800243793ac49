//! Month grid math for the calendar view.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// First day of the week shown in the grid's leftmost column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Column headers, e.g. ["Sun", "Mon", ...].
    pub fn labels(self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }
}

pub(crate) fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub(crate) fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

pub(crate) fn add_months(month: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(month);
    let shifted = if delta >= 0 {
        first.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        first.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(first)
}

pub(crate) fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let back = (7 + date.weekday().num_days_from_monday()
        - week_start.weekday().num_days_from_monday())
        % 7;
    date.checked_sub_days(Days::new(u64::from(back)))
        .unwrap_or(date)
}

fn end_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let start = start_of_week(date, week_start);
    start.checked_add_days(Days::new(6)).unwrap_or(date)
}

/// Every day shown for `month`: whole weeks from the week holding the 1st through
/// the week holding the last day, adjacent-month days included.
pub(crate) fn month_grid(month: NaiveDate, week_start: WeekStart) -> Vec<NaiveDate> {
    let start = start_of_week(first_of_month(month), week_start);
    let end = end_of_week(last_of_month(month), week_start);
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// The month the calendar displays, independent of the selected day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MonthCursor {
    month: NaiveDate,
}

impl MonthCursor {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            month: first_of_month(date),
        }
    }

    pub fn month(self) -> NaiveDate {
        self.month
    }

    pub fn step(&mut self, delta: i32) {
        self.month = add_months(self.month, delta);
    }

    /// Brings a newly selected day into view. True when the month changed.
    pub fn follow(&mut self, date: NaiveDate) -> bool {
        if same_month(date, self.month) {
            return false;
        }
        self.month = first_of_month(date);
        true
    }

    /// Jumps back to today's month and returns the day to select.
    pub fn today(&mut self, today: NaiveDate) -> NaiveDate {
        self.month = first_of_month(today);
        today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_grid_sunday_start_includes_adjacent_days() {
        // January 2024 starts on a Monday and ends on a Wednesday.
        let grid = month_grid(d(2024, 1, 17), WeekStart::Sunday);
        assert_eq!(grid.first(), Some(&d(2023, 12, 31)));
        assert_eq!(grid.last(), Some(&d(2024, 2, 3)));
        assert_eq!(grid.len(), 35);
    }

    #[test]
    fn test_month_grid_monday_start() {
        let grid = month_grid(d(2024, 1, 1), WeekStart::Monday);
        assert_eq!(grid.first(), Some(&d(2024, 1, 1)));
        assert_eq!(grid.last(), Some(&d(2024, 2, 4)));
        assert_eq!(grid[0].weekday(), Weekday::Mon);
    }

    #[test]
    fn test_month_grid_is_whole_weeks_covering_month() {
        for (y, m) in [(2024, 2), (2023, 2), (2026, 8), (2021, 2), (2024, 12)] {
            for ws in [WeekStart::Sunday, WeekStart::Monday] {
                let month = d(y, m, 1);
                let grid = month_grid(month, ws);
                assert_eq!(grid.len() % 7, 0);
                assert_eq!(grid[0].weekday(), ws.weekday());
                let last = last_of_month(month);
                for day in month.iter_days().take_while(|x| *x <= last) {
                    assert!(grid.contains(&day));
                }
                // No fully-foreign trailing week.
                assert!(grid[grid.len() - 7..].iter().any(|x| same_month(*x, month)));
            }
        }
    }

    #[test]
    fn test_february_2026_fits_four_weeks() {
        // Feb 1 2026 is a Sunday; 28 days.
        let grid = month_grid(d(2026, 2, 1), WeekStart::Sunday);
        assert_eq!(grid.len(), 28);
    }

    #[test]
    fn test_add_months_clamps_to_first_of_month() {
        assert_eq!(add_months(d(2024, 1, 31), 1), d(2024, 2, 1));
        assert_eq!(add_months(d(2024, 1, 15), -1), d(2023, 12, 1));
        assert_eq!(add_months(d(2024, 3, 9), 0), d(2024, 3, 1));
    }

    #[test]
    fn test_last_of_month_handles_leap_years() {
        assert_eq!(last_of_month(d(2024, 2, 10)), d(2024, 2, 29));
        assert_eq!(last_of_month(d(2023, 2, 10)), d(2023, 2, 28));
        assert_eq!(last_of_month(d(2023, 12, 1)), d(2023, 12, 31));
    }

    #[test]
    fn test_week_start_labels() {
        assert_eq!(WeekStart::Sunday.labels()[0], "Sun");
        assert_eq!(WeekStart::Monday.labels()[6], "Sun");
    }

    #[test]
    fn test_selecting_day_outside_month_moves_cursor() {
        let mut cursor = MonthCursor::new(d(2024, 1, 20));
        assert!(!cursor.follow(d(2024, 1, 3)));
        assert_eq!(cursor.month(), d(2024, 1, 1));

        // Leading cell of the January grid belongs to December.
        assert!(cursor.follow(d(2023, 12, 31)));
        assert_eq!(cursor.month(), d(2023, 12, 1));
    }

    #[test]
    fn test_today_resets_month_and_selection() {
        use crate::state::Navigation;

        let today = d(2024, 5, 14);
        let mut nav = Navigation::new(today);
        nav.select_date(d(2023, 9, 2));
        let mut cursor = MonthCursor::new(d(2023, 9, 2));
        cursor.step(-3);

        nav.select_date(cursor.today(today));

        assert_eq!(cursor.month(), d(2024, 5, 1));
        assert_eq!(nav.selected_date, today);
    }

    #[test]
    fn test_step_moves_by_whole_months() {
        let mut cursor = MonthCursor::new(d(2024, 1, 31));
        cursor.step(1);
        assert_eq!(cursor.month(), d(2024, 2, 1));
        cursor.step(-2);
        assert_eq!(cursor.month(), d(2023, 12, 1));
    }
}
