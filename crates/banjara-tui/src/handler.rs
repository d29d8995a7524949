use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use banjara_core::Tab;
use crate::app::{App, FocusPane, InputMode, PathTarget};
use crate::tui::AppEvent;

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Apply a single key to a line editor: text plus a character cursor.
/// Returns false for keys the editor does not consume.
fn edit_line(text: &mut String, cursor: &mut usize, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Backspace => {
            if *cursor > 0 {
                *cursor -= 1;
                let byte_pos = char_to_byte_index(text, *cursor);
                text.remove(byte_pos);
            }
        }
        KeyCode::Delete => {
            if *cursor < text.chars().count() {
                let byte_pos = char_to_byte_index(text, *cursor);
                text.remove(byte_pos);
            }
        }
        KeyCode::Left => {
            *cursor = cursor.saturating_sub(1);
        }
        KeyCode::Right => {
            *cursor = (*cursor + 1).min(text.chars().count());
        }
        KeyCode::Home => {
            *cursor = 0;
        }
        KeyCode::End => {
            *cursor = text.chars().count();
        }
        KeyCode::Char(c) => {
            let byte_pos = char_to_byte_index(text, *cursor);
            text.insert(byte_pos, c);
            *cursor += 1;
        }
        _ => return false,
    }
    true
}

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize(_, _) => {}
        AppEvent::Tick => {
            app.tick_animation();
        }
        AppEvent::Backend(outcome) => app.apply_outcome(outcome),
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    app.status = None;

    if app.path_prompt.is_some() {
        handle_path_prompt(app, key);
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Editing => handle_composer_editing(app, key),
    }
}

fn handle_path_prompt(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.path_prompt = None,
        KeyCode::Enter => app.submit_path_prompt(),
        _ => {
            if let Some(prompt) = app.path_prompt.as_mut() {
                edit_line(&mut prompt.input, &mut prompt.cursor, key);
            }
        }
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    // Keys shared by both tabs
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('n') => {
            app.new_chat();
            return;
        }
        KeyCode::Char('l') => {
            app.show_tab(Tab::Listing);
            return;
        }
        KeyCode::Char('c') => {
            app.show_tab(Tab::Chat);
            return;
        }
        KeyCode::Tab => {
            app.focus = match app.focus {
                FocusPane::Sidebar => FocusPane::Conversation,
                FocusPane::Conversation => FocusPane::Sidebar,
            };
            return;
        }
        _ => {}
    }

    if app.focus == FocusPane::Sidebar {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                app.history_down();
                return;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.history_up();
                return;
            }
            KeyCode::Enter => {
                app.open_selected_chat();
                return;
            }
            _ => {}
        }
    }

    match app.session.tab {
        Tab::Chat => handle_chat_normal(app, key),
        Tab::Listing => handle_listing_normal(app, key),
    }
}

fn handle_chat_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        // Start typing
        KeyCode::Char('i') | KeyCode::Enter => {
            app.composer_cursor = app.session.composer.chars().count();
            app.input_mode = InputMode::Editing;
        }

        // Suggested prompts on the empty splash
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            app.choose_suggestion(idx);
        }

        KeyCode::Char('a') => app.open_path_prompt(PathTarget::ChatAttachment),

        // Conversation scrolling
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::Char('G') | KeyCode::End => app.scroll_to_bottom(),

        _ => {}
    }
}

fn handle_listing_normal(app: &mut App, key: KeyEvent) {
    if let KeyCode::Char('u') | KeyCode::Enter = key.code {
        app.open_path_prompt(PathTarget::ListingImage);
    }
}

fn handle_composer_editing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            // Send control is disabled while busy or with no chat selected
            app.send_message();
        }
        _ => {
            edit_line(&mut app.session.composer, &mut app.composer_cursor, key);
        }
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.session.tab != Tab::Chat {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_up(),
        MouseEventKind::ScrollDown => app.scroll_down(),
        _ => {}
    }
}
