use cd2n::model::{ConfigModel, Field};
use cd2n::navigation::{Navigator, Screen};
use tracing::warn;

use crate::tui::menu::MenuEntry;

const LOG_LINES: usize = 5;

pub struct App {
    pub navigator: Navigator,
    pub menu_selected: usize,
    pub field_selected: usize,
    pub command_log: Vec<String>,
    pub last_failed: bool,
}

impl App {
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator,
            menu_selected: 0,
            field_selected: 0,
            command_log: vec!["ready".to_string()],
            last_failed: false,
        }
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        self.last_failed = false;
        self.command_log.push(line.into());
        if self.command_log.len() > LOG_LINES {
            self.command_log.remove(0);
        }
    }

    pub fn push_error(&mut self, line: impl Into<String>) {
        self.push_log(line);
        self.last_failed = true;
    }

    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        MenuEntry::all(self.navigator.model())
    }

    pub fn selected_entry(&self) -> Option<MenuEntry> {
        self.menu_entries().get(self.menu_selected).copied()
    }

    pub fn editing_fields(&self) -> Vec<Field> {
        self.navigator
            .scratch()
            .map(|record| record.fields().into_iter().map(|(field, _)| field).collect())
            .unwrap_or_default()
    }

    pub fn selected_field(&self) -> Option<Field> {
        self.editing_fields().get(self.field_selected).copied()
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.navigator.screen(), Screen::EditingService { .. })
    }

    /// The model as it would be saved if the current edit were committed.
    pub fn preview_model(&self) -> ConfigModel {
        let mut model = self.navigator.model().clone();
        if let Some(scratch) = self.navigator.scratch() {
            if let Err(record) = model.replace(scratch.clone()) {
                warn!(service = %record.kind(), "preview: edited service missing from model");
            }
        }
        model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cd2n::model::ServiceKind;

    #[test]
    fn log_keeps_last_lines() {
        let mut app = App::new(Navigator::new(ConfigModel::default(), "unused.yml"));
        for index in 0..8 {
            app.push_log(format!("line {index}"));
        }
        assert_eq!(app.command_log.len(), LOG_LINES);
        assert_eq!(app.command_log.last().map(String::as_str), Some("line 7"));
    }

    #[test]
    fn preview_includes_scratch_edits() {
        let mut app = App::new(Navigator::new(ConfigModel::default(), "unused.yml"));
        app.navigator.select(ServiceKind::Justicar).unwrap();
        app.navigator.set_field(Field::Port, "4000").unwrap();

        let preview = app.preview_model();
        assert_eq!(
            preview.get(ServiceKind::Justicar).unwrap().field(Field::Port),
            Some("4000")
        );
        assert_eq!(app.navigator.model(), &ConfigModel::default());
        assert_eq!(app.editing_fields().len(), 3);
    }
}
