use crate::derived::SortKey;
use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if key.code == KeyCode::Tab {
        app.toggle_focus();
        return;
    }

    match app.focus() {
        Focus::Search => handle_search_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if app.submit_search() {
                app.set_focus(Focus::List);
            }
        }
        KeyCode::Esc => app.set_focus(Focus::List),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.set_search_term("");
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(ch);
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('/') => app.set_focus(Focus::Search),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-10),
        KeyCode::PageDown => app.move_selection(10),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Char('d') | KeyCode::Delete => {
            app.remove_selected();
        }
        KeyCode::Char('n') => {
            app.request_next_page();
        }
        KeyCode::Char('0') => app.reset_sort(),
        KeyCode::Char(ch) => {
            if let Some(key) = sort_key_for(ch) {
                app.select_sort(key);
            } else if let Some(index) = ch.to_digit(10) {
                if index > 0 {
                    app.select_last_search(index as usize - 1);
                }
            }
        }
        _ => {}
    }
}

fn sort_key_for(ch: char) -> Option<SortKey> {
    match ch {
        't' => Some(SortKey::Title),
        'a' => Some(SortKey::Author),
        'c' => Some(SortKey::Comments),
        'p' => Some(SortKey::Points),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
