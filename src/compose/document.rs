use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The parts of an existing deployment file the loader cares about.
/// Anything else in the file is ignored.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ComposeFile {
    #[serde(default)]
    pub services: IndexMap<String, Option<ServiceEntry>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ServiceEntry {
    pub image: Option<String>,
    pub container_name: Option<String>,
    #[serde(default)]
    pub ports: Vec<String>,
    #[serde(default)]
    pub volumes: Vec<String>,
}

/// A deployment file as written back to disk. Field order is the order
/// keys appear in the emitted YAML.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposeDocument {
    pub version: String,
    pub services: IndexMap<String, ServiceDefinition>,
    pub networks: IndexMap<String, NetworkDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ServiceDefinition {
    Justicar(JusticarService),
    Chain(ChainService),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JusticarService {
    pub image: String,
    pub container_name: String,
    pub hostname: String,
    pub devices: Vec<String>,
    pub ports: Vec<String>,
    pub volumes: Vec<String>,
    pub environment: Vec<String>,
    pub networks: Vec<String>,
    pub stdin_open: bool,
    pub tty: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainService {
    pub image: String,
    pub hostname: String,
    pub volumes: Vec<String>,
    pub command: Vec<String>,
    pub logging: LoggingPolicy,
    pub networks: Vec<String>,
    pub container_name: String,
    pub ports: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggingPolicy {
    pub driver: String,
    pub options: LoggingOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggingOptions {
    #[serde(rename = "max-size")]
    pub max_size: String,
    #[serde(rename = "max-file")]
    pub max_file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkDefinition {
    pub name: String,
    pub driver: String,
}
