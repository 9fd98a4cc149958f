//! Screen state machine: which service is being edited, and when the
//! deployment file gets written.
//!
//! Edits go into a scratch copy of the selected record. Only `commit`
//! writes that copy back into the live model, one service at a time.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::compose;
use crate::error::NavigationError;
use crate::model::{ConfigModel, Field, ServiceKind, ServiceRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    EditingService {
        kind: ServiceKind,
        scratch: ServiceRecord,
    },
}

#[derive(Debug)]
pub struct Navigator {
    model: ConfigModel,
    compose_path: PathBuf,
    screen: Screen,
}

impl Navigator {
    pub fn new(model: ConfigModel, compose_path: impl Into<PathBuf>) -> Self {
        Self {
            model,
            compose_path: compose_path.into(),
            screen: Screen::MainMenu,
        }
    }

    /// Loads the model from `compose_path` and starts on the main menu.
    pub fn open(compose_path: impl Into<PathBuf>) -> Self {
        let compose_path = compose_path.into();
        let model = compose::load(&compose_path);
        Self::new(model, compose_path)
    }

    pub fn model(&self) -> &ConfigModel {
        &self.model
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn compose_path(&self) -> &Path {
        &self.compose_path
    }

    pub fn scratch(&self) -> Option<&ServiceRecord> {
        match &self.screen {
            Screen::EditingService { scratch, .. } => Some(scratch),
            Screen::MainMenu => None,
        }
    }

    pub fn scratch_mut(&mut self) -> Option<&mut ServiceRecord> {
        match &mut self.screen {
            Screen::EditingService { scratch, .. } => Some(scratch),
            Screen::MainMenu => None,
        }
    }

    pub fn select(&mut self, kind: ServiceKind) -> Result<(), NavigationError> {
        if !matches!(self.screen, Screen::MainMenu) {
            return Err(NavigationError::NotInMainMenu);
        }
        let scratch = self
            .model
            .get(kind)
            .cloned()
            .ok_or(NavigationError::UnknownService(kind))?;
        self.screen = Screen::EditingService { kind, scratch };
        Ok(())
    }

    /// Returns false when the edited service has no such field.
    pub fn set_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<bool, NavigationError> {
        let scratch = self.scratch_mut().ok_or(NavigationError::NotEditing)?;
        Ok(scratch.set_field(field, value))
    }

    pub fn cancel(&mut self) -> Result<ServiceKind, NavigationError> {
        match std::mem::replace(&mut self.screen, Screen::MainMenu) {
            Screen::EditingService { kind, .. } => Ok(kind),
            Screen::MainMenu => Err(NavigationError::NotEditing),
        }
    }

    /// Promotes the scratch copy into the model, then writes the
    /// deployment file. The model keeps the edit even when the write fails.
    pub fn commit(&mut self) -> Result<ServiceKind, NavigationError> {
        let Screen::EditingService { kind, scratch } =
            std::mem::replace(&mut self.screen, Screen::MainMenu)
        else {
            return Err(NavigationError::NotEditing);
        };

        self.model
            .replace(scratch)
            .map_err(|record| NavigationError::UnknownService(record.kind()))?;
        info!(service = %kind, "configuration committed");

        self.persist()?;
        Ok(kind)
    }

    /// Applies `edits` to the scratch copy and commits it.
    pub fn commit_with<I, V>(&mut self, edits: I) -> Result<ServiceKind, NavigationError>
    where
        I: IntoIterator<Item = (Field, V)>,
        V: Into<String>,
    {
        let scratch = self.scratch_mut().ok_or(NavigationError::NotEditing)?;
        for (field, value) in edits {
            scratch.set_field(field, value);
        }
        self.commit()
    }

    /// Writes the current model without opening an edit screen.
    pub fn run(&mut self) -> Result<(), NavigationError> {
        if !matches!(self.screen, Screen::MainMenu) {
            return Err(NavigationError::NotInMainMenu);
        }
        self.persist()
    }

    fn persist(&self) -> Result<(), NavigationError> {
        compose::save(&self.model, &self.compose_path).map_err(|error| {
            error!(%error, "failed to save deployment file");
            NavigationError::from(error)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn navigator_in(dir: &tempfile::TempDir) -> Navigator {
        Navigator::new(ConfigModel::default(), dir.path().join("docker-compose.yml"))
    }

    #[test]
    fn starts_on_main_menu() {
        let dir = tempfile::tempdir().unwrap();
        let navigator = navigator_in(&dir);
        assert_eq!(navigator.screen(), &Screen::MainMenu);
        assert!(navigator.scratch().is_none());
    }

    #[test]
    fn select_opens_scratch_copy() {
        let dir = tempfile::tempdir().unwrap();
        let mut navigator = navigator_in(&dir);
        navigator.select(ServiceKind::Chain).unwrap();

        assert_eq!(
            navigator.scratch(),
            Some(&ServiceKind::Chain.default_record())
        );
        navigator.set_field(Field::Port, "1").unwrap();
        assert_eq!(
            navigator.model().get(ServiceKind::Chain),
            Some(&ServiceKind::Chain.default_record())
        );
    }

    #[test]
    fn select_twice_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut navigator = navigator_in(&dir);
        navigator.select(ServiceKind::Chain).unwrap();
        assert!(matches!(
            navigator.select(ServiceKind::Justicar),
            Err(NavigationError::NotInMainMenu)
        ));
        assert!(matches!(navigator.run(), Err(NavigationError::NotInMainMenu)));
    }

    #[test]
    fn cancel_discards_edits() {
        let dir = tempfile::tempdir().unwrap();
        let mut navigator = navigator_in(&dir);
        navigator.select(ServiceKind::Justicar).unwrap();
        navigator.set_field(Field::Name, "changed").unwrap();

        assert_eq!(navigator.cancel().unwrap(), ServiceKind::Justicar);
        assert_eq!(navigator.screen(), &Screen::MainMenu);
        assert_eq!(navigator.model(), &ConfigModel::default());
        assert!(!navigator.compose_path().exists());
    }

    #[test]
    fn commit_updates_one_service_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let mut navigator = navigator_in(&dir);
        navigator.select(ServiceKind::Justicar).unwrap();
        navigator.set_field(Field::Port, "2309").unwrap();

        assert_eq!(navigator.commit().unwrap(), ServiceKind::Justicar);
        assert_eq!(navigator.screen(), &Screen::MainMenu);
        assert_eq!(
            navigator.model().get(ServiceKind::Justicar).unwrap().field(Field::Port),
            Some("2309")
        );
        assert_eq!(
            navigator.model().get(ServiceKind::Chain),
            Some(&ServiceKind::Chain.default_record())
        );
        assert_eq!(&compose::load(navigator.compose_path()), navigator.model());
    }

    #[test]
    fn commit_with_applies_field_map() {
        let dir = tempfile::tempdir().unwrap();
        let mut navigator = navigator_in(&dir);
        navigator.select(ServiceKind::Chain).unwrap();
        navigator
            .commit_with([(Field::Network, "mainnet"), (Field::Name, "node")])
            .unwrap();

        let chain = navigator.model().get(ServiceKind::Chain).unwrap();
        assert_eq!(chain.field(Field::Network), Some("mainnet"));
        assert_eq!(chain.field(Field::Name), Some("node"));
    }

    #[test]
    fn commit_outside_edit_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut navigator = navigator_in(&dir);
        assert!(matches!(navigator.commit(), Err(NavigationError::NotEditing)));
        assert!(matches!(navigator.cancel(), Err(NavigationError::NotEditing)));
        assert!(matches!(
            navigator.set_field(Field::Port, "1"),
            Err(NavigationError::NotEditing)
        ));
    }

    #[test]
    fn failed_save_keeps_edit() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("docker-compose.yml");
        let mut navigator = Navigator::new(ConfigModel::default(), &target);
        navigator.select(ServiceKind::Chain).unwrap();
        navigator.set_field(Field::Name, "kept").unwrap();

        assert!(matches!(navigator.commit(), Err(NavigationError::Save(_))));
        assert_eq!(navigator.screen(), &Screen::MainMenu);
        assert_eq!(
            navigator.model().get(ServiceKind::Chain).unwrap().field(Field::Name),
            Some("kept")
        );

        std::fs::create_dir(dir.path().join("missing")).unwrap();
        navigator.run().unwrap();
        let written = std::fs::read_to_string(&target).unwrap();
        assert!(written.contains("container_name: kept"));
    }
}
