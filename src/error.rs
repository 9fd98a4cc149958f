use std::path::PathBuf;

use thiserror::Error;

use crate::model::ServiceKind;

/// Failure to persist the deployment file.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode deployment file: {0}")]
    Encode(#[from] serde_yaml::Error),
}

/// Reasons a deployment file could not be read. Never leaves the loader.
#[derive(Debug, Error)]
pub(crate) enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse deployment file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("not on the main menu")]
    NotInMainMenu,
    #[error("no service is being edited")]
    NotEditing,
    #[error("service {0} is not part of the configuration")]
    UnknownService(ServiceKind),
    #[error(transparent)]
    Save(#[from] ComposeError),
}
