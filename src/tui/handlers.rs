use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use cd2n::workspace;

use crate::tui::{app::App, menu::MenuEntry};

pub enum LoopControl {
    Continue,
    Exit,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> LoopControl {
    if app.is_editing() {
        handle_edit_key(app, key);
        return LoopControl::Continue;
    }

    let entries = app.menu_entries();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return LoopControl::Exit,
        KeyCode::Up | KeyCode::Char('k') => {
            app.menu_selected = app.menu_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            if !entries.is_empty() {
                app.menu_selected = (app.menu_selected + 1).min(entries.len() - 1);
            }
        }
        KeyCode::Char('r') => run_now(app),
        KeyCode::Enter => match app.selected_entry() {
            Some(MenuEntry::Service(kind)) => match app.navigator.select(kind) {
                Ok(()) => {
                    app.field_selected = 0;
                    app.push_log(format!("editing {kind}"));
                }
                Err(error) => app.push_error(format!("cannot edit {kind}: {error}")),
            },
            Some(MenuEntry::Run) => run_now(app),
            None => {}
        },
        _ => {}
    }
    LoopControl::Continue
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    let field_count = app.editing_fields().len();

    match key.code {
        KeyCode::Esc => {
            if let Ok(kind) = app.navigator.cancel() {
                app.push_log(format!("{kind} edit canceled"));
            }
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => commit(app),
        KeyCode::Enter => commit(app),
        KeyCode::Up | KeyCode::BackTab => {
            app.field_selected = app.field_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Tab => {
            if field_count > 0 {
                app.field_selected = (app.field_selected + 1).min(field_count - 1);
            }
        }
        KeyCode::Backspace => {
            if let (Some(field), Some(scratch)) =
                (app.selected_field(), app.navigator.scratch_mut())
            {
                scratch.pop_char(field);
            }
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(field) = app.selected_field() {
                if let Some(scratch) = app.navigator.scratch_mut() {
                    scratch.push_char(field, ch);
                }
            }
        }
        _ => {}
    }
}

fn commit(app: &mut App) {
    match app.navigator.commit() {
        Ok(kind) => {
            app.push_log(format!(
                "{kind} saved to {}",
                app.navigator.compose_path().display()
            ));
            prepare_workspace(app);
        }
        Err(error) => app.push_error(format!("save failed, edit kept in memory: {error}")),
    }
}

fn run_now(app: &mut App) {
    match app.navigator.run() {
        Ok(()) => {
            app.push_log(format!(
                "wrote {}",
                app.navigator.compose_path().display()
            ));
            prepare_workspace(app);
        }
        Err(error) => app.push_error(format!("write failed: {error}")),
    }
}

fn prepare_workspace(app: &mut App) {
    match workspace::prepare(app.navigator.model()) {
        Ok(created) => {
            for dir in created {
                app.push_log(format!("created {}", dir.display()));
            }
        }
        Err(error) => {
            warn!(%error, "failed to prepare configuration directories");
            app.push_error(format!("could not create configuration directory: {error}"));
        }
    }
}
