//! Host directories backing each service's configuration path.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::model::ConfigModel;

/// Creates any missing configuration directory and returns the ones that
/// were created.
pub fn prepare(model: &ConfigModel) -> io::Result<Vec<PathBuf>> {
    let mut created = Vec::new();
    for (key, record) in model.iter() {
        let dir = PathBuf::from(record.configuration_file());
        if dir.as_os_str().is_empty() || dir.exists() {
            continue;
        }
        fs::create_dir_all(&dir)?;
        debug!(service = %key, path = %dir.display(), "created configuration directory");
        created.push(dir);
    }
    Ok(created)
}
