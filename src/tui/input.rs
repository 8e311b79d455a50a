use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Filter;
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // A transient status message shows until the next keypress
    app.status = None;

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Edit => handle_edit(app, key),
    }
}

fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.visible_len().saturating_sub(1);
        }
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => app.set_filter(app.filter.next()),
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => app.set_filter(app.filter.prev()),
        KeyCode::Char('1') => app.set_filter(Filter::All),
        KeyCode::Char('2') => app.set_filter(Filter::Active),
        KeyCode::Char('3') => app.set_filter(Filter::Completed),
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_selected(),
        KeyCode::Char('d') => app.remove_selected(),
        KeyCode::Char('a') => app.start_add(),
        KeyCode::Char('e') | KeyCode::Enter => app.start_edit(),
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let len = app.visible_len();
    if len == 0 {
        return;
    }
    let moved = app.cursor as isize + delta;
    app.cursor = moved.clamp(0, len as isize - 1) as usize;
}

fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.commit_edit();
            return;
        }
        KeyCode::Esc => {
            app.cancel_edit();
            return;
        }
        _ => {}
    }

    let Some(edit) = app.edit.as_mut() else {
        return;
    };
    match key.code {
        // Kill to start of line
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            edit.buffer.replace_range(..edit.cursor, "");
            edit.cursor = 0;
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            edit.buffer.insert(edit.cursor, c);
            edit.cursor += c.len_utf8();
        }
        KeyCode::Backspace => {
            if let Some(prev) = prev_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.buffer.replace_range(prev..edit.cursor, "");
                edit.cursor = prev;
            }
        }
        KeyCode::Delete => {
            if let Some(next) = next_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.buffer.replace_range(edit.cursor..next, "");
            }
        }
        KeyCode::Left => {
            if let Some(prev) = prev_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = next_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.cursor = next;
            }
        }
        KeyCode::Home => edit.cursor = 0,
        KeyCode::End => edit.cursor = edit.buffer.len(),
        _ => {}
    }
}
