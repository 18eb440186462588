//! Menu editor: add and remove catalog items per category.
//!
//! Works on a private copy of the catalog; nothing reaches the planner
//! state until the user saves, which also refills any category left empty
//! with the built-in defaults.

use std::collections::BTreeMap;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Category, MenuCatalog};
use crate::tui::component::Component;
use crate::tui::Theme;

/// Events emitted by the menu editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEditorEvent {
    /// User saved; the parent should adopt and persist this catalog.
    Saved(MenuCatalog),
    /// User cancelled; the working copy is discarded.
    Cancelled,
}

/// The menu editor popup component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEditor {
    menus: BTreeMap<Category, Vec<String>>,
    tab: usize,
    selected: usize,
    /// `Some` while typing a new item name.
    input: Option<String>,
}

impl MenuEditor {
    /// Opens the editor on a working copy of the catalog.
    #[must_use]
    pub fn new(catalog: &MenuCatalog) -> Self {
        Self {
            menus: catalog.to_map(),
            tab: 0,
            selected: 0,
            input: None,
        }
    }

    /// The category of the active tab.
    #[must_use]
    pub fn current_category(&self) -> Category {
        Category::ALL[self.tab]
    }

    /// Items of the active tab.
    #[must_use]
    pub fn current_items(&self) -> &[String] {
        self.menus
            .get(&self.current_category())
            .map_or(&[], Vec::as_slice)
    }

    /// True while the add-item input line is active.
    #[must_use]
    pub const fn is_typing(&self) -> bool {
        self.input.is_some()
    }

    fn switch_tab(&mut self, forward: bool) {
        let len = Category::ALL.len();
        self.tab = if forward {
            (self.tab + 1) % len
        } else {
            (self.tab + len - 1) % len
        };
        self.selected = 0;
    }

    fn clamp_selected(&mut self) {
        self.selected = self.selected.min(self.current_items().len().saturating_sub(1));
    }

    /// Commits the typed name; duplicates and blanks are ignored.
    fn commit_add(&mut self) {
        let Some(input) = self.input.take() else {
            return;
        };
        let name = input.trim();
        if name.is_empty() {
            return;
        }
        let cat = self.current_category();
        let items = self.menus.entry(cat).or_default();
        if items.iter().any(|item| item == name) {
            return;
        }
        items.push(name.to_string());
        // Move the selection onto the newly added item
        self.selected = items.len() - 1;
    }

    fn delete_selected(&mut self) {
        let cat = self.current_category();
        let selected = self.selected;
        if let Some(items) = self.menus.get_mut(&cat) {
            if selected < items.len() {
                items.remove(selected);
            }
        }
        self.clamp_selected();
    }

    /// Builds the catalog to save, refilling empty categories with defaults.
    fn build_catalog(&self) -> MenuCatalog {
        let mut catalog = MenuCatalog::empty();
        catalog.replace(self.menus.clone());
        catalog
    }
}

impl Component for MenuEditor {
    type Event = MenuEditorEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<MenuEditorEvent> {
        if let Some(input) = &mut self.input {
            match key.code {
                KeyCode::Esc => {
                    self.input = None;
                }
                KeyCode::Enter => self.commit_add(),
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) => input.push(c),
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Esc => Some(MenuEditorEvent::Cancelled),
            KeyCode::Char('s') => Some(MenuEditorEvent::Saved(self.build_catalog())),
            KeyCode::Tab | KeyCode::Right => {
                self.switch_tab(true);
                None
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.switch_tab(false);
                None
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.selected += 1;
                self.clamp_selected();
                None
            }
            KeyCode::Char('a') => {
                self.input = Some(String::new());
                None
            }
            KeyCode::Char('d') => {
                self.delete_selected();
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        f.render_widget(Clear, area);

        let mut lines: Vec<Line> = Vec::new();

        // Category tabs
        let mut tab_spans: Vec<Span> = Vec::new();
        for (i, cat) in Category::ALL.iter().enumerate() {
            let style = if i == self.tab {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_muted)
            };
            tab_spans.push(Span::styled(format!(" {} ", cat.label()), style));
            if i + 1 < Category::ALL.len() {
                tab_spans.push(Span::styled("|", Style::default().fg(theme.text_muted)));
            }
        }
        lines.push(Line::from(tab_spans));
        lines.push(Line::raw(""));

        // Item list for the active tab
        let items = self.current_items();
        if items.is_empty() {
            lines.push(Line::styled(
                "  (empty - defaults restored on save)",
                Style::default().fg(theme.text_muted),
            ));
        }
        for (i, item) in items.iter().enumerate() {
            let marker = if i == self.selected { "> " } else { "  " };
            let mut line = Line::from(vec![
                Span::raw(marker),
                Span::styled(item.clone(), Style::default().fg(theme.text)),
            ]);
            if i == self.selected {
                line = line.style(Style::default().bg(theme.highlight_bg));
            }
            lines.push(line);
        }

        lines.push(Line::raw(""));
        if let Some(input) = &self.input {
            lines.push(Line::from(vec![
                Span::styled("New item: ", Style::default().fg(theme.primary)),
                Span::styled(input.clone(), Style::default().fg(theme.text)),
                Span::styled("_", Style::default().fg(theme.accent)),
            ]));
            lines.push(Line::styled(
                "Enter add  Esc cancel input",
                Style::default().fg(theme.text_muted),
            ));
        } else {
            lines.push(Line::styled(
                "Tab category  a add  d delete  s save  Esc cancel",
                Style::default().fg(theme.text_muted),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(" Edit Menus ")
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .style(Style::default().bg(theme.surface));
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
