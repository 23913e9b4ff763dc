//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::event::Event;
use super::views::entry_form::FormField;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports both press and release
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.quit(),
            KeyCode::Char('b') if !app.has_dialog() => app.open_dialog(ActiveDialog::Budget),
            _ => {}
        }
        // Unbound Ctrl combinations never reach the inputs
        return Ok(());
    }

    match app.active_dialog {
        ActiveDialog::Error(_) => handle_error_dialog_key(app, key),
        ActiveDialog::Budget => handle_budget_dialog_key(app, key),
        ActiveDialog::None => handle_form_key(app, key),
    }
}

/// The error notice blocks everything until dismissed
fn handle_error_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
        app.close_dialog();
    }
    Ok(())
}

fn handle_budget_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return Ok(());
        }
        KeyCode::Enter => {
            app.submit_budget();
            return Ok(());
        }
        _ => {}
    }

    let input = &mut app.budget_dialog.input;
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
    Ok(())
}

/// Handle keys on the entry form
fn handle_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::Tab => {
            app.form.next_field();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.form.prev_field();
            return Ok(());
        }
        KeyCode::Enter => {
            app.submit_expense();
            return Ok(());
        }
        KeyCode::PageUp => {
            app.scroll_history_back();
            return Ok(());
        }
        KeyCode::PageDown => {
            app.scroll_history_forward();
            return Ok(());
        }
        _ => {}
    }

    match app.form.focused_field {
        FormField::Category => match key.code {
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                app.select_category(true)
            }
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                app.select_category(false)
            }
            _ => {}
        },
        FormField::Submit => match key.code {
            KeyCode::Char(' ') => app.submit_expense(),
            KeyCode::Up => app.form.prev_field(),
            _ => {}
        },
        FormField::Amount | FormField::Description => {
            handle_text_input_key(app, key);
        }
    }

    Ok(())
}

/// Edit the focused text input and forward the result to the draft
fn handle_text_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => {
            app.form.prev_field();
            return;
        }
        KeyCode::Down => {
            app.form.next_field();
            return;
        }
        _ => {}
    }

    let Some(input) = app.form.focused_input() else {
        return;
    };

    let edited = match key.code {
        KeyCode::Char(c) => {
            input.insert(c);
            true
        }
        KeyCode::Backspace => {
            input.backspace();
            true
        }
        KeyCode::Delete => {
            input.delete();
            true
        }
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        KeyCode::Home => {
            input.move_start();
            false
        }
        KeyCode::End => {
            input.move_end();
            false
        }
        _ => false,
    };

    if edited {
        app.sync_draft_from_form();
    }
}
