//! Service-keyed configuration model edited by the TUI.
//!
//! Every field is kept as plain text; numbers and paths are only
//! interpreted when the deployment file is read or written.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use thiserror::Error;

pub const DEFAULT_NETWORK: &str = "testnet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Justicar,
    Chain,
}

impl ServiceKind {
    /// Declaration order, also used as display order.
    pub fn all() -> [Self; 2] {
        [Self::Justicar, Self::Chain]
    }

    pub fn key(self) -> &'static str {
        match self {
            ServiceKind::Justicar => "justicar",
            ServiceKind::Chain => "chain",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ServiceKind::Justicar => "Justicar",
            ServiceKind::Chain => "Chain",
        }
    }

    pub fn default_record(self) -> ServiceRecord {
        match self {
            ServiceKind::Justicar => ServiceRecord::Justicar(JusticarRecord {
                port: "1309".to_string(),
                configuration_file: "/opt/cd2n/justicar".to_string(),
                name: "justicar".to_string(),
            }),
            ServiceKind::Chain => ServiceRecord::Chain(ChainRecord {
                port: "9944".to_string(),
                configuration_file: "/opt/cd2n/chain".to_string(),
                name: "cess-chain".to_string(),
                network: DEFAULT_NETWORK.to_string(),
            }),
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown service: {0}")]
pub struct UnknownService(pub String);

impl FromStr for ServiceKind {
    type Err = UnknownService;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| UnknownService(key.to_string()))
    }
}

/// Editable field of a service record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Port,
    ConfigurationFile,
    Name,
    Network,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Port => "Port",
            Field::ConfigurationFile => "Configuration file",
            Field::Name => "Name",
            Field::Network => "Network",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JusticarRecord {
    pub port: String,
    pub configuration_file: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRecord {
    pub port: String,
    pub configuration_file: String,
    pub name: String,
    pub network: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceRecord {
    Justicar(JusticarRecord),
    Chain(ChainRecord),
}

impl ServiceRecord {
    pub fn kind(&self) -> ServiceKind {
        match self {
            ServiceRecord::Justicar(_) => ServiceKind::Justicar,
            ServiceRecord::Chain(_) => ServiceKind::Chain,
        }
    }

    pub fn fields(&self) -> Vec<(Field, &str)> {
        match self {
            ServiceRecord::Justicar(record) => vec![
                (Field::Port, record.port.as_str()),
                (Field::ConfigurationFile, record.configuration_file.as_str()),
                (Field::Name, record.name.as_str()),
            ],
            ServiceRecord::Chain(record) => vec![
                (Field::Port, record.port.as_str()),
                (Field::ConfigurationFile, record.configuration_file.as_str()),
                (Field::Name, record.name.as_str()),
                (Field::Network, record.network.as_str()),
            ],
        }
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        self.fields()
            .into_iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, value)| value)
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        match (self, field) {
            (ServiceRecord::Justicar(record), Field::Port) => Some(&mut record.port),
            (ServiceRecord::Justicar(record), Field::ConfigurationFile) => {
                Some(&mut record.configuration_file)
            }
            (ServiceRecord::Justicar(record), Field::Name) => Some(&mut record.name),
            (ServiceRecord::Justicar(_), Field::Network) => None,
            (ServiceRecord::Chain(record), Field::Port) => Some(&mut record.port),
            (ServiceRecord::Chain(record), Field::ConfigurationFile) => {
                Some(&mut record.configuration_file)
            }
            (ServiceRecord::Chain(record), Field::Name) => Some(&mut record.name),
            (ServiceRecord::Chain(record), Field::Network) => Some(&mut record.network),
        }
    }

    /// Returns false when this kind of record has no such field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        match self.field_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn push_char(&mut self, field: Field, ch: char) {
        if let Some(slot) = self.field_mut(field) {
            slot.push(ch);
        }
    }

    pub fn pop_char(&mut self, field: Field) {
        if let Some(slot) = self.field_mut(field) {
            slot.pop();
        }
    }

    pub fn configuration_file(&self) -> &str {
        match self {
            ServiceRecord::Justicar(record) => &record.configuration_file,
            ServiceRecord::Chain(record) => &record.configuration_file,
        }
    }
}

/// Live configuration for one session, keyed in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigModel {
    services: IndexMap<String, ServiceRecord>,
}

impl Default for ConfigModel {
    fn default() -> Self {
        let mut model = Self::empty();
        for kind in ServiceKind::all() {
            model.insert(kind.key(), kind.default_record());
        }
        model
    }
}

impl ConfigModel {
    pub(crate) fn empty() -> Self {
        Self {
            services: IndexMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, record: ServiceRecord) {
        self.services.insert(key.into(), record);
    }

    pub fn get(&self, kind: ServiceKind) -> Option<&ServiceRecord> {
        self.services.get(kind.key())
    }

    /// Overwrites the entry for the record's own kind. Kinds the model does
    /// not hold are rejected and the record is handed back.
    pub fn replace(&mut self, record: ServiceRecord) -> Result<(), ServiceRecord> {
        match self.services.get_mut(record.kind().key()) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(record),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ServiceRecord)> {
        self.services
            .iter()
            .map(|(key, record)| (key.as_str(), record))
    }

    pub fn kinds(&self) -> Vec<ServiceKind> {
        self.keys().filter_map(|key| key.parse().ok()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
