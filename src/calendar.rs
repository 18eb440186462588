//! Month grid math: mapping days of a month onto a Sunday-first 7-column grid.

use chrono::Datelike;

use crate::models::MonthKey;

/// Weekday column labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// English month names, indexed by `month - 1`.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Display name for a month key, e.g. `February 2026`.
#[must_use]
pub fn month_title(month: MonthKey) -> String {
    let name = MONTH_NAMES
        .get(month.month() as usize - 1)
        .copied()
        .unwrap_or("");
    format!("{} {}", name, month.year())
}

/// The day grid for one calendar month.
///
/// Weeks are rows, columns are weekdays Sunday through Saturday. Day 1 is
/// placed in row 0 at the column matching its weekday; leading and trailing
/// cells are blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    month: MonthKey,
    first_weekday: u32,
    num_days: u32,
}

impl MonthGrid {
    /// Builds the grid for one month.
    #[must_use]
    pub fn new(month: MonthKey) -> Self {
        let first = month.first_day();
        let next_first = month.next().first_day();
        let num_days = next_first.signed_duration_since(first).num_days() as u32;
        Self {
            month,
            first_weekday: first.weekday().num_days_from_sunday(),
            num_days,
        }
    }

    /// The month this grid covers.
    #[must_use]
    pub const fn month(self) -> MonthKey {
        self.month
    }

    /// Column of day 1 (0 = Sunday).
    #[must_use]
    pub const fn first_weekday(self) -> u32 {
        self.first_weekday
    }

    /// Number of days in the month.
    #[must_use]
    pub const fn num_days(self) -> u32 {
        self.num_days
    }

    /// Number of week rows needed to place every day.
    #[must_use]
    pub fn week_rows(self) -> u32 {
        (self.first_weekday + self.num_days).div_ceil(7)
    }

    /// Grid position `(row, col)` of a day, or `None` if the day is out of
    /// range for this month.
    #[must_use]
    pub fn position(self, day: u32) -> Option<(u32, u32)> {
        if day == 0 || day > self.num_days {
            return None;
        }
        let pos = self.first_weekday + day - 1;
        Some((pos / 7, pos % 7))
    }

    /// The day at a grid position, or `None` for blank cells.
    #[must_use]
    pub fn day_at(self, row: u32, col: u32) -> Option<u32> {
        if col >= 7 {
            return None;
        }
        let pos = row * 7 + col;
        if pos < self.first_weekday {
            return None;
        }
        let day = pos - self.first_weekday + 1;
        (day <= self.num_days).then_some(day)
    }

    /// The seven cells of one week row, blank cells as `None`.
    #[must_use]
    pub fn week(self, row: u32) -> [Option<u32>; 7] {
        std::array::from_fn(|col| self.day_at(row, col as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(year: i32, month: u32) -> MonthGrid {
        MonthGrid::new(MonthKey::new(year, month).unwrap())
    }

    #[test]
    fn test_february_2026_starts_sunday() {
        // February 1, 2026 is a Sunday: day 1 in row 0, column 0,
        // and 28 days fill exactly 4 week rows
        let g = grid(2026, 2);
        assert_eq!(g.first_weekday(), 0);
        assert_eq!(g.num_days(), 28);
        assert_eq!(g.position(1), Some((0, 0)));
        assert_eq!(g.week_rows(), 4);
        assert_eq!(g.position(28), Some((3, 6)));
    }

    #[test]
    fn test_leap_year_february() {
        let g = grid(2024, 2);
        assert_eq!(g.num_days(), 29);
    }

    #[test]
    fn test_mid_week_start() {
        // July 1, 2026 is a Wednesday
        let g = grid(2026, 7);
        assert_eq!(g.first_weekday(), 3);
        assert_eq!(g.position(1), Some((0, 3)));
        assert_eq!(g.num_days(), 31);
        assert_eq!(g.week_rows(), 5);
    }

    #[test]
    fn test_day_at_inverts_position() {
        let g = grid(2026, 7);
        for day in 1..=g.num_days() {
            let (row, col) = g.position(day).unwrap();
            assert_eq!(g.day_at(row, col), Some(day));
        }
        // Leading blanks
        assert_eq!(g.day_at(0, 0), None);
        assert_eq!(g.day_at(0, 2), None);
    }

    #[test]
    fn test_position_out_of_range() {
        let g = grid(2026, 2);
        assert_eq!(g.position(0), None);
        assert_eq!(g.position(29), None);
    }

    #[test]
    fn test_week_cells() {
        let g = grid(2026, 2);
        assert_eq!(
            g.week(0),
            [Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), Some(7)]
        );
        // Row past the last week is all blanks
        assert_eq!(g.week(4), [None; 7]);
    }

    #[test]
    fn test_month_title() {
        assert_eq!(month_title(MonthKey::new(2026, 2).unwrap()), "February 2026");
    }
}
