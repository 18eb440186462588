//! Calendar pane: the month's day grid with plan previews.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::calendar::WEEKDAY_LABELS;
use crate::models::{CATEGORY_SEPARATOR, ITEM_SEPARATOR};
use crate::tui::{AppState, Theme};

/// Calendar grid widget.
pub struct CalendarView;

impl CalendarView {
    /// Renders the weekday header and the day grid.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3)])
            .split(area);

        Self::render_weekday_header(f, chunks[0], theme);
        Self::render_grid(f, chunks[1], state, theme);
    }

    fn render_weekday_header(f: &mut Frame, area: Rect, theme: &Theme) {
        let cell_w = (area.width / 7).max(1);
        let spans: Vec<Span> = WEEKDAY_LABELS
            .iter()
            .map(|label| {
                Span::styled(
                    format!("{label:^width$}", width = cell_w as usize),
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_grid(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let grid = state.grid();
        let rows = grid.week_rows().max(1);
        let cell_w = (area.width / 7).max(1);
        let cell_h = (area.height / rows as u16).max(1);

        for row in 0..rows {
            for col in 0..7u32 {
                let Some(day) = grid.day_at(row, col) else {
                    continue;
                };
                let x = area.x + col as u16 * cell_w;
                let y = area.y + row as u16 * cell_h;
                if y + cell_h > area.y + area.height || x + cell_w > area.x + area.width + 1 {
                    continue;
                }
                let cell = Rect::new(x, y, cell_w.min(area.width), cell_h);
                Self::render_day_cell(f, cell, state, theme, day);
            }
        }
    }

    fn render_day_cell(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme, day: u32) {
        let entry = state.planner.entry(state.month, day).unwrap_or("");
        let is_selected = state.selected_day == Some(day);
        let is_cursor = state.cursor_day == day;
        let has_plan = !entry.trim().replace('|', "").is_empty();

        let border_style = if is_selected {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else if is_cursor {
            Style::default().fg(theme.primary)
        } else {
            Style::default().fg(theme.text_muted)
        };

        let day_style = if has_plan {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };

        let mut lines: Vec<Line> = vec![Line::styled(day.to_string(), day_style)];
        let max_preview = area.height.saturating_sub(3) as usize;
        for item in preview_lines(entry).into_iter().take(max_preview) {
            lines.push(Line::styled(item, Style::default().fg(theme.text)));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// One preview line per selected item, in plan-entry order.
fn preview_lines(entry: &str) -> Vec<String> {
    entry
        .split(CATEGORY_SEPARATOR)
        .flat_map(|segment| segment.split(ITEM_SEPARATOR))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_lines_flatten_entry() {
        assert_eq!(
            preview_lines("Rice | Miso soup |  | Fruit,Snack"),
            ["Rice", "Miso soup", "Fruit", "Snack"]
        );
        assert!(preview_lines(" |  |  | ").is_empty());
        assert!(preview_lines("").is_empty());
    }
}
