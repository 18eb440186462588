//! Integration tests for the planning flow, driven through key events.
//!
//! These exercise the same dispatch path as the live event loop: an
//! [`AppState`] plus synthetic key presses, with a temp directory standing in
//! for the data directory.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mealboard::config::Config;
use mealboard::models::{Category, MonthKey};
use mealboard::storage::Storage;
use mealboard::tui::{handle_key_event, AppState, Focus};
use tempfile::TempDir;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(state: &mut AppState, code: KeyCode) {
    handle_key_event(state, key(code)).unwrap();
}

/// A fresh app on February 2026 with the cursor on day 3.
fn app(dir: &TempDir) -> AppState {
    let storage = Storage::new(dir.path());
    let planner = storage.load();
    let mut state = AppState::new(planner, storage, Config::default());
    state.month = MonthKey::new(2026, 2).unwrap();
    state.cursor_day = 3;
    state
}

#[test]
fn test_select_day_opens_editor_with_focus() {
    let dir = TempDir::new().unwrap();
    let mut state = app(&dir);

    press(&mut state, KeyCode::Enter);

    assert_eq!(state.selected_day, Some(3));
    assert_eq!(state.focus, Focus::Editor);
    let editor = state.day_editor.as_ref().unwrap();
    assert_eq!(editor.day(), 3);
    assert_eq!(editor.row_count(), Category::COUNT);
}

#[test]
fn test_cycling_without_apply_stores_nothing() {
    let dir = TempDir::new().unwrap();
    let mut state = app(&dir);

    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Right);

    assert!(state.planner.entry(state.month, 3).is_none());
}

#[test]
fn test_apply_stores_entry_in_memory_only() {
    let dir = TempDir::new().unwrap();
    let mut state = app(&dir);

    press(&mut state, KeyCode::Enter);
    // First staple item in the default catalog
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Enter);

    assert_eq!(state.planner.entry(state.month, 3), Some("Rice |  |  | "));
    assert!(!dir.path().join("data.json").exists());
}

#[test]
fn test_switching_days_discards_unapplied_edits() {
    let dir = TempDir::new().unwrap();
    let mut state = app(&dir);

    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Right); // edit day 3, no apply

    // Back to the calendar, move to day 4 and select it
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Enter);

    let editor = state.day_editor.as_ref().unwrap();
    assert_eq!(editor.day(), 4);
    assert!(editor.selection().is_empty());
    assert!(state.planner.entry(state.month, 3).is_none());
}

#[test]
fn test_selecting_same_day_again_closes_editor() {
    let dir = TempDir::new().unwrap();
    let mut state = app(&dir);

    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Tab); // focus back on the calendar
    press(&mut state, KeyCode::Enter);

    assert!(state.day_editor.is_none());
    assert!(state.selected_day.is_none());
    assert_eq!(state.focus, Focus::Calendar);
}

#[test]
fn test_commit_persists_to_disk() {
    let dir = TempDir::new().unwrap();
    let mut state = app(&dir);

    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Char('s'));

    assert_eq!(state.status_message, "Saved.");
    assert!(dir.path().join("data.json").exists());

    let reloaded = Storage::new(dir.path()).load();
    assert_eq!(reloaded.entry(state.month, 3), Some("Rice |  |  | "));
}

#[test]
fn test_add_slot_grows_editor_and_config() {
    let dir = TempDir::new().unwrap();
    let mut state = app(&dir);

    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Right); // select an item first
    press(&mut state, KeyCode::Char('+'));

    let editor = state.day_editor.as_ref().unwrap();
    assert_eq!(editor.row_count(), Category::COUNT + 1);
    // The applied edit survives the rebuild
    assert_eq!(editor.selection().items(Category::Staple), ["Rice"]);
    assert_eq!(state.planner.slots_for(state.month, 3).get(Category::Staple), 2);
}

#[test]
fn test_remove_slot_stops_at_one_row() {
    let dir = TempDir::new().unwrap();
    let mut state = app(&dir);

    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Char('-'));

    let editor = state.day_editor.as_ref().unwrap();
    assert_eq!(editor.row_count(), Category::COUNT);
    assert_eq!(state.planner.slots_for(state.month, 3).get(Category::Staple), 1);
}

#[test]
fn test_escape_closes_editor_without_applying() {
    let dir = TempDir::new().unwrap();
    let mut state = app(&dir);

    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Esc);

    assert!(state.day_editor.is_none());
    assert!(state.planner.entry(state.month, 3).is_none());
}

#[test]
fn test_month_navigation_deselects_and_clamps_cursor() {
    let dir = TempDir::new().unwrap();
    let mut state = app(&dir);
    state.cursor_day = 28;

    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Char('['));

    assert_eq!(state.month, MonthKey::new(2026, 1).unwrap());
    assert!(state.day_editor.is_none());

    press(&mut state, KeyCode::Char(']'));
    press(&mut state, KeyCode::Char(']'));
    assert_eq!(state.month, MonthKey::new(2026, 3).unwrap());
    assert!(state.cursor_day >= 1 && state.cursor_day <= 31);
}

#[test]
fn test_menu_editor_escape_leaves_catalog_untouched() {
    let dir = TempDir::new().unwrap();
    let mut state = app(&dir);
    let before = state.planner.menus.clone();

    press(&mut state, KeyCode::Char('m'));
    assert!(state.menu_editor.is_some());

    press(&mut state, KeyCode::Esc);
    assert!(state.menu_editor.is_none());
    assert_eq!(state.planner.menus, before);
    assert!(!dir.path().join("data.json").exists());
}

#[test]
fn test_menu_editor_save_persists_catalog() {
    let dir = TempDir::new().unwrap();
    let mut state = app(&dir);

    press(&mut state, KeyCode::Char('m'));
    press(&mut state, KeyCode::Char('a'));
    for ch in "Toast".chars() {
        press(&mut state, KeyCode::Char(ch));
    }
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Char('s'));

    assert!(state.menu_editor.is_none());
    assert_eq!(state.status_message, "Menus saved.");
    assert!(state
        .planner
        .menus
        .items(Category::Staple)
        .contains(&"Toast".to_string()));

    let reloaded = Storage::new(dir.path()).load();
    assert_eq!(reloaded.menus, state.planner.menus);
}

#[test]
fn test_export_key_writes_spreadsheet() {
    let dir = TempDir::new().unwrap();
    let mut state = app(&dir);
    state
        .planner
        .set_entry(state.month, 3, "Rice | Miso soup |  | ".to_string());

    press(&mut state, KeyCode::Char('e'));

    assert!(state.status_message.starts_with("Exported"));
    assert!(dir
        .path()
        .join("export")
        .join("meal_plan_2026-02.xlsx")
        .exists());
}

#[test]
fn test_export_failure_sets_error() {
    let dir = TempDir::new().unwrap();
    let mut state = app(&dir);
    // Occupy the export path with a plain file so the directory cannot exist
    std::fs::write(dir.path().join("export"), b"not a directory").unwrap();

    press(&mut state, KeyCode::Char('e'));

    assert!(state.error_message.is_some());
    assert!(state.status_message.is_empty());
}
