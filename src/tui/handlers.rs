//! Key event dispatch.
//!
//! One dispatch function routes every key press by explicit UI state
//! (popup open, focused pane) rather than per-widget callbacks.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::tui::component::{Component, ContextualComponent};
use crate::tui::{AppState, DayEditorEvent, Focus, MenuEditorEvent};

/// Handles one key event. Returns `Ok(true)` when the user quits.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    // A new key press acknowledges any displayed error
    state.error_message = None;

    // The menu editor popup captures all input while open
    if let Some(mut editor) = state.menu_editor.take() {
        match editor.handle_input(key) {
            Some(MenuEditorEvent::Saved(catalog)) => state.adopt_menus(catalog),
            Some(MenuEditorEvent::Cancelled) => {}
            None => state.menu_editor = Some(editor),
        }
        return Ok(false);
    }

    // Tab toggles focus between calendar and an open day editor
    if key.code == KeyCode::Tab && state.day_editor.is_some() {
        state.toggle_focus();
        return Ok(false);
    }

    if state.focus == Focus::Editor {
        return handle_editor_key(state, key);
    }

    handle_calendar_key(state, key)
}

fn handle_editor_key(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let Some(mut editor) = state.day_editor.take() else {
        state.focus = Focus::Calendar;
        return Ok(false);
    };
    let event = editor.handle_input(key, &state.planner.menus);
    state.day_editor = Some(editor);

    match event {
        Some(DayEditorEvent::Apply) => {
            state.apply_current_selection();
            state.set_status("Applied (not yet saved).");
        }
        Some(DayEditorEvent::Commit) => state.commit(),
        Some(DayEditorEvent::AddSlot(category)) => state.add_slot(category),
        Some(DayEditorEvent::RemoveSlot(category)) => state.remove_slot(category),
        Some(DayEditorEvent::Close) => state.deselect(),
        None => {}
    }
    Ok(false)
}

fn handle_calendar_key(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Left => state.move_cursor(-1),
        KeyCode::Right => state.move_cursor(1),
        KeyCode::Up => state.move_cursor(-7),
        KeyCode::Down => state.move_cursor(7),
        KeyCode::Enter | KeyCode::Char(' ') => state.select_day(state.cursor_day),
        KeyCode::Char('[') | KeyCode::PageUp => state.prev_month(),
        KeyCode::Char(']') | KeyCode::PageDown => state.next_month(),
        KeyCode::Char('e') => state.export_current_month(),
        KeyCode::Char('m') => state.open_menu_editor(),
        KeyCode::Char('s') => {
            if state.day_editor.is_some() {
                state.commit();
            }
        }
        _ => {}
    }
    Ok(false)
}
