//! Builds the spreadsheet grid for one month's plan.
//!
//! The layout mirrors the printed calendar: a title row, a weekday header
//! row, then one block per calendar week consisting of a date row followed
//! by a variable number of menu rows. A week gets `max(3, longest day)` menu
//! rows, where a day's length is its flattened item count across all
//! categories.

use crate::calendar::{month_title, MonthGrid, WEEKDAY_LABELS};
use crate::models::{MonthKey, PlannerState};

/// Number of spreadsheet columns (one per weekday).
pub const COLUMN_COUNT: usize = 7;

/// Fixed width applied to every column.
pub const COLUMN_WIDTH: f64 = 14.0;

/// Minimum number of menu rows per week block.
pub const MIN_MENU_ROWS: usize = 3;

/// Zero-based column holding the title text (column D, like the original
/// printed form).
pub const TITLE_COLUMN: usize = 3;

/// Value of one spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// No value (the cell may still carry a style, e.g. a border).
    Empty,
    /// Inline text.
    Text(String),
    /// A day number.
    Number(u32),
}

/// Visual style of one cell, mapped to a style index by the XLSX writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// No formatting.
    Default,
    /// Thin border only.
    Border,
    /// Bold 14pt centered title.
    Title,
    /// Bold centered weekday header.
    Header,
    /// Centered day number on a filled background.
    Date,
    /// Wrapped, top-aligned menu text.
    Menu,
}

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Cell value.
    pub value: CellValue,
    /// Cell style.
    pub style: CellStyle,
}

impl Cell {
    fn empty(style: CellStyle) -> Self {
        Self {
            value: CellValue::Empty,
            style,
        }
    }
}

/// A built worksheet: a name and a dense grid of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// Worksheet name (the month key, e.g. `2026-02`).
    pub name: String,
    /// Rows of exactly [`COLUMN_COUNT`] cells each.
    pub rows: Vec<Vec<Cell>>,
}

/// Builds the spreadsheet grid for one month.
#[must_use]
pub fn build_month_sheet(state: &PlannerState, month: MonthKey) -> Sheet {
    let grid = MonthGrid::new(month);
    let mut rows: Vec<Vec<Cell>> = Vec::new();

    // Title row: bordered across all columns, text only in the title column
    let mut title_row: Vec<Cell> = (0..COLUMN_COUNT)
        .map(|_| Cell::empty(CellStyle::Border))
        .collect();
    title_row[TITLE_COLUMN] = Cell {
        value: CellValue::Text(month_title(month)),
        style: CellStyle::Title,
    };
    rows.push(title_row);

    // Weekday header row
    rows.push(
        WEEKDAY_LABELS
            .iter()
            .map(|label| Cell {
                value: CellValue::Text((*label).to_string()),
                style: CellStyle::Header,
            })
            .collect(),
    );

    // One block per calendar week: date row + menu rows
    for week_row in 0..grid.week_rows() {
        let week = grid.week(week_row);
        let items: Vec<Vec<String>> = week
            .iter()
            .map(|day| {
                day.map_or_else(Vec::new, |d| state.selection_for(month, d).flatten())
            })
            .collect();
        let menu_rows = items
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(MIN_MENU_ROWS);

        rows.push(
            week.iter()
                .map(|day| Cell {
                    value: day.map_or(CellValue::Empty, CellValue::Number),
                    style: CellStyle::Date,
                })
                .collect(),
        );

        for r in 0..menu_rows {
            rows.push(
                items
                    .iter()
                    .map(|day_items| {
                        day_items.get(r).map_or_else(
                            || Cell::empty(CellStyle::Menu),
                            |item| Cell {
                                value: CellValue::Text(item.clone()),
                                style: CellStyle::Menu,
                            },
                        )
                    })
                    .collect(),
            );
        }
    }

    Sheet {
        name: month.to_string(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{encode_entry, Category, DaySelection};

    fn month() -> MonthKey {
        MonthKey::new(2026, 2).unwrap()
    }

    fn state_with_entry(day: u32, selection: &DaySelection) -> PlannerState {
        let mut state = PlannerState::with_default_menus();
        state.set_entry(month(), day, encode_entry(selection));
        state
    }

    /// Menu-row count of each week block, derived from the built sheet.
    fn week_block_heights(sheet: &Sheet) -> Vec<usize> {
        let mut heights = Vec::new();
        let mut current: Option<usize> = None;
        for row in sheet.rows.iter().skip(2) {
            if row.iter().all(|cell| cell.style == CellStyle::Date) {
                if let Some(h) = current.take() {
                    heights.push(h);
                }
                current = Some(0);
            } else if let Some(h) = current.as_mut() {
                *h += 1;
            }
        }
        if let Some(h) = current {
            heights.push(h);
        }
        heights
    }

    #[test]
    fn test_empty_month_has_three_menu_rows_per_week() {
        let sheet = build_month_sheet(&PlannerState::with_default_menus(), month());
        // Feb 2026: 4 weeks, each 1 date row + 3 menu rows, plus title + header
        assert_eq!(sheet.rows.len(), 2 + 4 * (1 + MIN_MENU_ROWS));
        assert_eq!(week_block_heights(&sheet), [3, 3, 3, 3]);
    }

    #[test]
    fn test_five_item_day_grows_its_week_to_five_rows() {
        let mut sel = DaySelection::new();
        sel.push_item(Category::Staple, "Rice");
        sel.push_item(Category::Soup, "Miso soup");
        sel.push_item(Category::Side, "Kimchi");
        sel.push_item(Category::Side, "Pickles");
        sel.push_item(Category::Other, "Fruit");
        // Day 3 is in the first week of Feb 2026
        let sheet = build_month_sheet(&state_with_entry(3, &sel), month());
        assert_eq!(week_block_heights(&sheet), [5, 3, 3, 3]);
    }

    #[test]
    fn test_other_days_blank_beyond_their_item_count() {
        let mut sel = DaySelection::new();
        for item in ["A", "B", "C", "D", "E"] {
            sel.push_item(Category::Other, item);
        }
        let sheet = build_month_sheet(&state_with_entry(3, &sel), month());

        // First menu row of week 1 is sheet row index 3; day 3 is column 2
        let first_menu_row = &sheet.rows[3];
        assert_eq!(first_menu_row[2].value, CellValue::Text("A".to_string()));
        // Day 4 (column 3) has no items at all
        for r in 3..8 {
            assert_eq!(sheet.rows[r][3].value, CellValue::Empty);
            assert_eq!(sheet.rows[r][3].style, CellStyle::Menu);
        }
        // Fifth menu row holds day 3's last item, blanks elsewhere
        assert_eq!(sheet.rows[7][2].value, CellValue::Text("E".to_string()));
        assert_eq!(sheet.rows[7][0].value, CellValue::Empty);
    }

    #[test]
    fn test_title_and_header_rows() {
        let sheet = build_month_sheet(&PlannerState::with_default_menus(), month());
        assert_eq!(sheet.name, "2026-02");
        assert_eq!(
            sheet.rows[0][TITLE_COLUMN].value,
            CellValue::Text("February 2026".to_string())
        );
        assert_eq!(sheet.rows[0][0].style, CellStyle::Border);
        assert_eq!(sheet.rows[1][0].value, CellValue::Text("Sun".to_string()));
        assert_eq!(sheet.rows[1][6].value, CellValue::Text("Sat".to_string()));
    }

    #[test]
    fn test_date_row_blank_cells_keep_date_style() {
        // July 2026 starts Wednesday: columns 0-2 of the first date row are blank
        let july = MonthKey::new(2026, 7).unwrap();
        let sheet = build_month_sheet(&PlannerState::with_default_menus(), july);
        let date_row = &sheet.rows[2];
        assert_eq!(date_row[0].value, CellValue::Empty);
        assert_eq!(date_row[0].style, CellStyle::Date);
        assert_eq!(date_row[3].value, CellValue::Number(1));
    }
}
