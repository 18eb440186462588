//! Day editor: per-category selection rows for one day.
//!
//! One row per (category, slot). Rows are rebuilt from the stored planner
//! state whenever a day is selected or its slot configuration changes, so
//! in-progress edits only survive through an explicit apply.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Category, DaySelection, MenuCatalog, SlotConfig};
use crate::tui::component::ContextualComponent;
use crate::tui::Theme;

/// One editable selection row.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EditorRow {
    category: Category,
    slot: usize,
    /// Selected item name; empty string means "nothing selected".
    value: String,
}

/// Events emitted by the day editor for the parent to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayEditorEvent {
    /// Store the current selection in the plan model (memory only).
    Apply,
    /// Apply, then persist the whole state.
    Commit,
    /// Add a selection row to a category.
    AddSlot(Category),
    /// Remove a selection row from a category.
    RemoveSlot(Category),
    /// Close the editor and deselect the day.
    Close,
}

/// The day editor component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEditor {
    day: u32,
    rows: Vec<EditorRow>,
    cursor: usize,
}

impl DayEditor {
    /// Builds the editor for one day from its stored slot configuration and
    /// decoded selection.
    #[must_use]
    pub fn from_state(day: u32, slots: &SlotConfig, selection: &DaySelection) -> Self {
        let mut rows = Vec::new();
        for cat in Category::ALL {
            let items = selection.items(cat);
            for slot in 0..slots.get(cat) as usize {
                rows.push(EditorRow {
                    category: cat,
                    slot,
                    value: items.get(slot).cloned().unwrap_or_default(),
                });
            }
        }
        Self {
            day,
            rows,
            cursor: 0,
        }
    }

    /// The day this editor targets.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Number of rows currently shown.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Moves the row cursor, preserved across slot-configuration rebuilds.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.rows.len().saturating_sub(1));
    }

    /// Current row cursor.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Category of the row under the cursor.
    #[must_use]
    pub fn cursor_category(&self) -> Category {
        self.rows
            .get(self.cursor)
            .map_or(Category::Staple, |row| row.category)
    }

    /// The current selection across all rows, non-empty values only.
    #[must_use]
    pub fn selection(&self) -> DaySelection {
        let mut selection = DaySelection::new();
        for row in &self.rows {
            let value = row.value.trim();
            if !value.is_empty() {
                selection.push_item(row.category, value);
            }
        }
        selection
    }

    /// The slot configuration implied by the current rows.
    #[must_use]
    pub fn slot_config(&self) -> SlotConfig {
        let mut slots = SlotConfig::default();
        for cat in Category::ALL {
            let count = self.rows.iter().filter(|row| row.category == cat).count();
            slots.set(cat, count as u32);
        }
        slots
    }

    /// Cycles the cursor row through blank plus the category's catalog items.
    fn cycle(&mut self, forward: bool, catalog: &MenuCatalog) {
        let Some(row) = self.rows.get_mut(self.cursor) else {
            return;
        };
        let items = catalog.items(row.category);
        // Option 0 is "blank"; a value no longer in the catalog also maps there
        let len = items.len() + 1;
        let current = items
            .iter()
            .position(|item| *item == row.value)
            .map_or(0, |i| i + 1);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        row.value = if next == 0 {
            String::new()
        } else {
            items[next - 1].clone()
        };
    }
}

impl ContextualComponent for DayEditor {
    type Context = MenuCatalog;
    type Event = DayEditorEvent;

    fn handle_input(&mut self, key: KeyEvent, catalog: &MenuCatalog) -> Option<DayEditorEvent> {
        match key.code {
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.set_cursor(self.cursor + 1);
                None
            }
            KeyCode::Right => {
                self.cycle(true, catalog);
                None
            }
            KeyCode::Left => {
                self.cycle(false, catalog);
                None
            }
            KeyCode::Char('+') => Some(DayEditorEvent::AddSlot(self.cursor_category())),
            KeyCode::Char('-') => Some(DayEditorEvent::RemoveSlot(self.cursor_category())),
            KeyCode::Enter => Some(DayEditorEvent::Apply),
            KeyCode::Char('s') => Some(DayEditorEvent::Commit),
            KeyCode::Esc => Some(DayEditorEvent::Close),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, _catalog: &MenuCatalog) {
        let mut lines: Vec<Line> = Vec::with_capacity(self.rows.len() + 2);

        for (i, row) in self.rows.iter().enumerate() {
            let label = if row.slot == 0 {
                format!("{:<7}", row.category.label())
            } else {
                " ".repeat(7)
            };
            let value = if row.value.is_empty() {
                Span::styled("(none)", Style::default().fg(theme.text_muted))
            } else {
                Span::styled(row.value.clone(), Style::default().fg(theme.text))
            };
            let marker = if i == self.cursor { "> " } else { "  " };
            let mut line = Line::from(vec![
                Span::raw(marker),
                Span::styled(label, Style::default().fg(theme.primary)),
                Span::raw(" "),
                value,
            ]);
            if i == self.cursor {
                line = line.style(Style::default().bg(theme.highlight_bg));
            }
            lines.push(line);
        }

        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "←/→ pick  +/- rows  Enter apply  s save  Esc close",
            Style::default().fg(theme.text_muted),
        ));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(format!(" Day {} ", self.day))
            .title_style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
