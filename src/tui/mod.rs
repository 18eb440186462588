//! Terminal user interface: state, event loop, and widgets.
//!
//! The whole application is single-threaded and event-driven: one
//! [`AppState`] owns the planner state, the storage adapter, and the active
//! UI components; handler functions mutate it in response to key events.

pub mod calendar_view;
pub mod component;
pub mod day_editor;
pub mod handlers;
pub mod menu_editor;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use chrono::Datelike;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::calendar::{month_title, MonthGrid};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::{encode_entry, MonthKey, PlannerState};
use crate::storage::Storage;

pub use calendar_view::CalendarView;
pub use component::{Component, ContextualComponent};
pub use day_editor::{DayEditor, DayEditorEvent};
pub use handlers::handle_key_event;
pub use menu_editor::{MenuEditor, MenuEditorEvent};
pub use status_bar::StatusBar;
pub use theme::Theme;

use crate::models::Category;

/// How many event-loop ticks (100 ms each) a transient status message lives.
const STATUS_TTL_TICKS: u8 = 15;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The month calendar grid.
    Calendar,
    /// The day editor pane.
    Editor,
}

/// The complete UI state, explicitly owned and passed to handler functions.
#[derive(Debug)]
pub struct AppState {
    /// Application preferences.
    pub config: Config,
    /// Resolved color theme (refreshed each tick from the config).
    pub theme: Theme,
    /// Storage adapter for the planner state.
    pub storage: Storage,
    /// The in-memory planner state (the unit of persistence).
    pub planner: PlannerState,
    /// Month currently shown.
    pub month: MonthKey,
    /// Day the calendar cursor is on (1-based, always valid for `month`).
    pub cursor_day: u32,
    /// Day whose editor is open, if any.
    pub selected_day: Option<u32>,
    /// The open day editor, if a day is selected.
    pub day_editor: Option<DayEditor>,
    /// The menu editor popup, if open.
    pub menu_editor: Option<MenuEditor>,
    /// Pane receiving navigation keys.
    pub focus: Focus,
    /// Transient status message (cleared after [`STATUS_TTL_TICKS`]).
    pub status_message: String,
    status_ttl: u8,
    /// Sticky error message, cleared on the next key press.
    pub error_message: Option<String>,
    /// Set when the user quits.
    pub should_quit: bool,
}

impl AppState {
    /// Creates the UI state, starting on the current month with the cursor
    /// on today.
    #[must_use]
    pub fn new(planner: PlannerState, storage: Storage, config: Config) -> Self {
        let month = MonthKey::current();
        let cursor_day = chrono::Local::now().date_naive().day();
        Self {
            config,
            theme: Theme::from_mode(config.ui.theme_mode),
            storage,
            planner,
            month,
            cursor_day,
            selected_day: None,
            day_editor: None,
            menu_editor: None,
            focus: Focus::Calendar,
            status_message: String::new(),
            status_ttl: 0,
            error_message: None,
            should_quit: false,
        }
    }

    /// The day grid for the shown month.
    #[must_use]
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::new(self.month)
    }

    /// Moves the calendar cursor by a signed number of days, clamped to the
    /// month.
    pub fn move_cursor(&mut self, delta: i64) {
        let num_days = i64::from(self.grid().num_days());
        let day = (i64::from(self.cursor_day) + delta).clamp(1, num_days);
        self.cursor_day = day as u32;
    }

    /// Selects a day, with toggling: selecting the already-selected day
    /// closes the editor instead.
    ///
    /// Selecting a different day rebuilds the editor from the stored state
    /// of the new day; un-applied edits of the previous day are discarded.
    pub fn select_day(&mut self, day: u32) {
        if self.selected_day == Some(day) {
            self.deselect();
            return;
        }
        self.cursor_day = day;
        self.selected_day = Some(day);
        let slots = self.planner.slots_for(self.month, day);
        let selection = self.planner.selection_for(self.month, day);
        self.day_editor = Some(DayEditor::from_state(day, &slots, &selection));
        self.focus = Focus::Editor;
    }

    /// Closes the day editor without applying pending edits.
    pub fn deselect(&mut self) {
        self.selected_day = None;
        self.day_editor = None;
        self.focus = Focus::Calendar;
    }

    /// Switches navigation focus between the calendar and the open editor.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Calendar if self.day_editor.is_some() => Focus::Editor,
            _ => Focus::Calendar,
        };
    }

    /// Stores the editor's current selection as the selected day's plan
    /// entry, in memory only.
    pub fn apply_current_selection(&mut self) {
        let Some(day) = self.selected_day else {
            return;
        };
        let Some(editor) = &self.day_editor else {
            return;
        };
        let line = encode_entry(&editor.selection());
        self.planner.set_entry(self.month, day, line);
    }

    fn save_day_slots(&mut self) {
        let Some(day) = self.selected_day else {
            return;
        };
        let Some(editor) = &self.day_editor else {
            return;
        };
        self.planner.set_slots(self.month, day, editor.slot_config());
    }

    /// Applies the current selection and persists the whole state.
    pub fn commit(&mut self) {
        self.apply_current_selection();
        self.save_day_slots();
        match self.storage.save(&self.planner) {
            Ok(()) => self.set_status("Saved."),
            Err(e) => self.set_error(format!("Save failed: {e:#}")),
        }
    }

    /// Adds a selection row to a category of the selected day.
    ///
    /// The current selection is applied first so edits survive the rebuild.
    pub fn add_slot(&mut self, category: Category) {
        self.change_slots(|slots| {
            slots.add_slot(category);
            true
        });
    }

    /// Removes a selection row from a category (keeping at least one).
    pub fn remove_slot(&mut self, category: Category) {
        self.change_slots(|slots| slots.remove_slot(category));
    }

    fn change_slots(&mut self, change: impl FnOnce(&mut crate::models::SlotConfig) -> bool) {
        let Some(day) = self.selected_day else {
            return;
        };
        let Some(editor) = &self.day_editor else {
            return;
        };
        let cursor = editor.cursor();
        let mut slots = editor.slot_config();
        if !change(&mut slots) {
            return;
        }
        self.apply_current_selection();
        self.planner.set_slots(self.month, day, slots.clone());
        let selection = self.planner.selection_for(self.month, day);
        let mut editor = DayEditor::from_state(day, &slots, &selection);
        editor.set_cursor(cursor);
        self.day_editor = Some(editor);
    }

    /// Adopts a saved menu catalog and persists immediately.
    pub fn adopt_menus(&mut self, catalog: crate::models::MenuCatalog) {
        self.planner.menus = catalog;
        match self.storage.save(&self.planner) {
            Ok(()) => self.set_status("Menus saved."),
            Err(e) => self.set_error(format!("Save failed: {e:#}")),
        }
    }

    /// Opens the menu editor popup.
    pub fn open_menu_editor(&mut self) {
        self.menu_editor = Some(MenuEditor::new(&self.planner.menus));
    }

    /// Exports the shown month to the export directory.
    pub fn export_current_month(&mut self) {
        match crate::export::export_month(&self.planner, self.month, &self.storage.export_dir()) {
            Ok(path) => {
                let name = path
                    .file_name()
                    .map_or_else(|| path.display().to_string(), |n| {
                        n.to_string_lossy().into_owned()
                    });
                self.set_status(format!("Exported {name}"));
            }
            Err(e) => self.set_error(format!("Export failed: {e:#}")),
        }
    }

    /// Shows the previous month, closing any open editor.
    pub fn prev_month(&mut self) {
        self.month = self.month.prev();
        self.after_month_change();
    }

    /// Shows the next month, closing any open editor.
    pub fn next_month(&mut self) {
        self.month = self.month.next();
        self.after_month_change();
    }

    fn after_month_change(&mut self) {
        self.cursor_day = self.cursor_day.min(self.grid().num_days()).max(1);
        self.deselect();
    }

    /// Sets a transient status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_ttl = STATUS_TTL_TICKS;
        self.error_message = None;
    }

    /// Sets a sticky error message.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
        self.status_message.clear();
        self.status_ttl = 0;
    }

    /// One event-loop tick: ages out the transient status message.
    pub fn tick(&mut self) {
        if self.status_ttl > 0 {
            self.status_ttl -= 1;
            if self.status_ttl == 0 {
                self.status_message.clear();
            }
        }
    }
}

/// Enters raw mode and the alternate screen.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Leaves the alternate screen and restores the terminal.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Runs the main event loop until the user quits.
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        // Age out the transient status message
        state.tick();

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(state, key)? {
                        break;
                    }
                }
                Event::Resize(_, _) => {
                    // Re-rendered on the next loop iteration
                }
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state.
fn render(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;

    // Fill the screen with the theme background first
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state, theme);
    render_main_content(f, chunks[1], state, theme);
    StatusBar::render(f, chunks[2], state, theme);

    if let Some(menu_editor) = &state.menu_editor {
        let popup = centered_rect(50, 70, f.area());
        menu_editor.render(f, popup, theme);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let title = format!("{APP_NAME} — {}", month_title(state.month));
    let paragraph = Paragraph::new(title)
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );
    f.render_widget(paragraph, area);
}

fn render_main_content(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    if let Some(editor) = &state.day_editor {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(area);
        CalendarView::render(f, chunks[0], state, theme);
        editor.render(f, chunks[1], theme, &state.planner.menus);
    } else {
        CalendarView::render(f, area, state, theme);
    }
}

/// A rect centered in `r` taking the given percentages of its size.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
