//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions. Keys go to the
//! topmost layer first: help overlay, conversion dialog, search input,
//! detail panel, then the active view.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use sellertui::model::{ConvertField, EditField, View};
use sellertui::SortKey;

use crate::App;

/// Rows moved by PageUp/PageDown and ^D/^U
const PAGE_STEP: isize = 10;

/// Handle keyboard input
///
/// Processes all keyboard events and dispatches to appropriate actions.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C quits from anywhere
    if ctrl && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    // Any key closes the help overlay
    if app.model.ui.show_help {
        app.model.ui.show_help = false;
        return Ok(());
    }

    if app.model.ui.convert.is_some() {
        handle_convert_key(app, key);
        return Ok(());
    }

    if app.model.ui.search_mode {
        handle_search_key(app, key);
        return Ok(());
    }

    // The panel only owns the keyboard while the lead view shows it
    if let Some(editing) = app.model.active_detail().map(|panel| panel.editing) {
        if editing {
            handle_edit_key(app, key);
            return Ok(());
        }
        if handle_panel_key(app, key) {
            return Ok(());
        }
    }

    handle_view_key(app, key);
    Ok(())
}

/// Conversion dialog: field navigation, typing, submit
fn handle_convert_key(app: &mut App, key: KeyEvent) {
    let focus = app
        .model
        .ui
        .convert
        .as_ref()
        .map(|form| form.focus)
        .unwrap_or(ConvertField::Name);

    match key.code {
        KeyCode::Esc => app.model.close_convert(),
        KeyCode::Enter => app.submit_conversion(),
        KeyCode::Tab | KeyCode::Down => app.model.convert_move_focus(true),
        KeyCode::BackTab | KeyCode::Up => app.model.convert_move_focus(false),
        KeyCode::Left if focus == ConvertField::Stage => app.model.convert_cycle_stage(false),
        KeyCode::Right | KeyCode::Char(' ') if focus == ConvertField::Stage => {
            app.model.convert_cycle_stage(true)
        }
        KeyCode::Backspace => app.model.convert_backspace(),
        KeyCode::Char(c) => app.model.convert_input(c),
        _ => {}
    }
}

/// Search input: typing filters live
fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.model.ui.search_mode = false;
            app.set_search(String::new());
        }
        KeyCode::Enter => {
            app.model.ui.search_mode = false;
        }
        KeyCode::Backspace => {
            let mut query = app.model.ui.filters.search.clone();
            query.pop();
            app.set_search(query);
        }
        KeyCode::Char(c) => {
            let mut query = app.model.ui.filters.search.clone();
            query.push(c);
            app.set_search(query);
        }
        _ => {}
    }
}

/// Edit form of the detail panel
fn handle_edit_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let focus = app
        .model
        .ui
        .detail
        .as_ref()
        .map(|panel| panel.focus)
        .unwrap_or(EditField::Status);

    match key.code {
        KeyCode::Esc => app.model.cancel_edit(),
        KeyCode::Char('s') if ctrl => app.save_lead(),
        KeyCode::Enter => app.save_lead(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.model.toggle_edit_focus()
        }
        KeyCode::Left if focus == EditField::Status => app.model.cycle_edit_status(false),
        KeyCode::Right | KeyCode::Char(' ') if focus == EditField::Status => {
            app.model.cycle_edit_status(true)
        }
        KeyCode::Backspace if focus == EditField::Email => app.edit_email_backspace(),
        KeyCode::Char(c) if focus == EditField::Email && !ctrl => app.edit_email_input(c),
        _ => {}
    }
}

/// Detail panel in read mode; returns false for keys it does not own
fn handle_panel_key(app: &mut App, key: KeyEvent) -> bool {
    let vim = app.model.ui.vim_mode;

    match key.code {
        KeyCode::Esc => app.model.close_detail(),
        KeyCode::Char('e') => {
            app.model.begin_edit();
        }
        KeyCode::Char('c') => app.start_conversion(),
        KeyCode::Up => app.follow_in_panel(-1),
        KeyCode::Down => app.follow_in_panel(1),
        KeyCode::Char('k') if vim => app.follow_in_panel(-1),
        KeyCode::Char('j') if vim => app.follow_in_panel(1),
        _ => return false,
    }
    true
}

/// Keys of the active view and global actions
fn handle_view_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let vim = app.model.ui.vim_mode;

    // Second half of `gg`
    if vim && app.model.ui.pending_g {
        app.model.ui.pending_g = false;
        if key.code == KeyCode::Char('g') {
            app.select_first();
            return;
        }
    }

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Char('?') => app.model.ui.show_help = true,
        KeyCode::Tab => app.model.navigation.toggle_view(),
        KeyCode::Char('r') => app.refresh_current_view(),

        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-PAGE_STEP),
        KeyCode::PageDown => app.move_selection(PAGE_STEP),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        KeyCode::Char('k') if vim => app.move_selection(-1),
        KeyCode::Char('j') if vim => app.move_selection(1),
        KeyCode::Char('u') if vim && ctrl => app.move_selection(-PAGE_STEP),
        KeyCode::Char('d') if vim && ctrl => app.move_selection(PAGE_STEP),
        KeyCode::Char('g') if vim => app.model.ui.pending_g = true,
        KeyCode::Char('G') if vim => app.select_last(),

        _ if app.model.navigation.view == View::Leads => handle_leads_key(app, key),
        KeyCode::Esc => app.model.ui.toasts.dismiss_current(),
        _ => {}
    }
}

/// Lead list: open, search, filter, sort, convert
fn handle_leads_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Enter => {
            app.model.open_detail();
        }
        KeyCode::Char('/') => app.model.ui.search_mode = true,
        KeyCode::Char('f') if ctrl => app.model.ui.search_mode = true,
        KeyCode::Esc if !app.model.ui.filters.search.is_empty() => app.set_search(String::new()),
        KeyCode::Esc => app.model.ui.toasts.dismiss_current(),
        KeyCode::Char('f') => app.cycle_status_filter(true),
        KeyCode::Char('F') => app.cycle_status_filter(false),
        KeyCode::Char('1') => app.sort_by(SortKey::Score),
        KeyCode::Char('2') => app.sort_by(SortKey::Name),
        KeyCode::Char('3') => app.sort_by(SortKey::Company),
        KeyCode::Char('4') => app.sort_by(SortKey::CreatedAt),
        KeyCode::Char('x') => app.clear_filters(),
        KeyCode::Char('c') => app.start_conversion(),
        _ => {}
    }
}
