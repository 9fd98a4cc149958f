use std::fs;
use std::path::Path;

use tracing::{debug, error};

use crate::compose::document::{ComposeFile, ServiceEntry};
use crate::error::LoadError;
use crate::model::{ChainRecord, ConfigModel, JusticarRecord, ServiceKind, ServiceRecord};

/// First item of a possibly empty sequence, or `default`.
pub fn first_or<I: IntoIterator>(items: I, default: I::Item) -> I::Item {
    items.into_iter().next().unwrap_or(default)
}

fn host_side(mapping: &str) -> &str {
    mapping.split_once(':').map_or(mapping, |(host, _)| host)
}

fn image_tag(image: &str) -> Option<&str> {
    image.rsplit_once(':').map(|(_, tag)| tag)
}

/// Reads the deployment file at `path`. Any problem with the file yields
/// the built-in defaults instead of an error.
pub fn load(path: impl AsRef<Path>) -> ConfigModel {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "deployment file not found, using defaults");
        return ConfigModel::default();
    }

    match read_compose(path) {
        Ok(Some(file)) => from_compose(&file),
        Ok(None) => {
            debug!(path = %path.display(), "deployment file is empty, using defaults");
            ConfigModel::default()
        }
        Err(error) => {
            error!(%error, "failed to load config from deployment file, using defaults");
            ConfigModel::default()
        }
    }
}

fn read_compose(path: &Path) -> Result<Option<ComposeFile>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_yaml::from_str(&content)?))
}

fn from_compose(file: &ComposeFile) -> ConfigModel {
    for key in file.services.keys() {
        if key.parse::<ServiceKind>().is_err() {
            error!(service = %key, "unknown service in deployment file, ignoring");
        }
    }

    let empty = ServiceEntry::default();
    let mut model = ConfigModel::empty();
    for kind in ServiceKind::all() {
        let entry = file
            .services
            .get(kind.key())
            .and_then(Option::as_ref)
            .unwrap_or(&empty);
        debug!(service = %kind, ?entry, "loaded service entry");
        model.insert(kind.key(), load_record(kind, entry));
    }
    model
}

fn load_record(kind: ServiceKind, entry: &ServiceEntry) -> ServiceRecord {
    let ports = entry.ports.iter().map(|mapping| host_side(mapping).to_string());
    let volumes = entry.volumes.iter().map(|mapping| host_side(mapping).to_string());

    match kind.default_record() {
        ServiceRecord::Justicar(defaults) => ServiceRecord::Justicar(JusticarRecord {
            port: first_or(ports, defaults.port),
            configuration_file: first_or(volumes, defaults.configuration_file),
            name: entry.container_name.clone().unwrap_or(defaults.name),
        }),
        ServiceRecord::Chain(defaults) => ServiceRecord::Chain(ChainRecord {
            port: first_or(ports, defaults.port),
            configuration_file: first_or(volumes, defaults.configuration_file),
            name: entry.container_name.clone().unwrap_or(defaults.name),
            network: entry
                .image
                .as_deref()
                .and_then(image_tag)
                .map_or(defaults.network, str::to_string),
        }),
    }
}
