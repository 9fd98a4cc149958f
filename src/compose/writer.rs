use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, error};

use crate::compose::document::{
    ChainService, ComposeDocument, JusticarService, LoggingOptions, LoggingPolicy,
    NetworkDefinition, ServiceDefinition,
};
use crate::error::ComposeError;
use crate::model::{ChainRecord, ConfigModel, JusticarRecord, ServiceKind, ServiceRecord};

pub const COMPOSE_VERSION: &str = "3.9";
pub const NETWORK_NAME: &str = "cd2n";

const JUSTICAR_IMAGE: &str = "cesslab/justicar:latest";
const JUSTICAR_PORT: &str = "1309";
const JUSTICAR_BACKUPS: &str = "/opt/justicar/backups";

const CHAIN_IMAGE: &str = "cesslab/cess-chain";
const CHAIN_HOSTNAME: &str = "cess-chain";
const CHAIN_DATA: &str = "/opt/cess/data";
const CHAIN_RPC_PORT: &str = "9944";
const CHAIN_PEER_PORT: &str = "30336";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Startup arguments for the chain node. The node reads these as
/// positional flag/value pairs, so order matters.
pub fn chain_command(network: &str) -> Vec<String> {
    let chain_id = format!("cess-{network}");
    strings(&[
        "--base-path",
        CHAIN_DATA,
        "--chain",
        chain_id.as_str(),
        "--port",
        CHAIN_PEER_PORT,
        "--name",
        "cess",
        "--rpc-port",
        CHAIN_RPC_PORT,
        "--execution",
        "WASM",
        "--wasm-execution",
        "compiled",
        "--in-peers",
        "75",
        "--out-peers",
        "75",
        "--rpc-max-response-size",
        "32",
        "--pruning",
        "archive",
        "--rpc-external",
        "--rpc-methods",
        "unsafe",
        "--rpc-cors",
        "all",
        "--wasm-runtime-overrides",
        "/opt/cess/wasms",
    ])
}

fn justicar_service(record: &JusticarRecord) -> JusticarService {
    JusticarService {
        image: JUSTICAR_IMAGE.to_string(),
        container_name: record.name.clone(),
        hostname: "justicar_host".to_string(),
        devices: strings(&[
            "/dev/sgx_enclave:/dev/sgx_enclave",
            "/dev/sgx_provision:/dev/sgx_provision",
        ]),
        ports: vec![format!("{}:{JUSTICAR_PORT}", record.port)],
        volumes: vec![format!("{}:{JUSTICAR_BACKUPS}", record.configuration_file)],
        environment: vec![format!(
            "EXTRA_OPTS=--chain-rpc=\"ws://{CHAIN_HOSTNAME}:{CHAIN_RPC_PORT}\""
        )],
        networks: vec![NETWORK_NAME.to_string()],
        stdin_open: true,
        tty: true,
    }
}

fn chain_service(record: &ChainRecord) -> ChainService {
    ChainService {
        image: format!("{CHAIN_IMAGE}:{}", record.network),
        hostname: CHAIN_HOSTNAME.to_string(),
        volumes: vec![format!("{}:{CHAIN_DATA}", record.configuration_file)],
        command: chain_command(&record.network),
        logging: LoggingPolicy {
            driver: "json-file".to_string(),
            options: LoggingOptions {
                max_size: "300m".to_string(),
                max_file: "10".to_string(),
            },
        },
        networks: vec![NETWORK_NAME.to_string()],
        container_name: record.name.clone(),
        ports: vec![
            format!("{}:{CHAIN_RPC_PORT}", record.port),
            format!("{CHAIN_PEER_PORT}:{CHAIN_PEER_PORT}"),
        ],
    }
}

/// Builds the full deployment document for `model`. Keys that are not a
/// supported service are logged and left out.
pub fn render(model: &ConfigModel) -> ComposeDocument {
    let mut services = IndexMap::new();
    for (key, record) in model.iter() {
        let definition = match (key.parse::<ServiceKind>(), record) {
            (Ok(ServiceKind::Justicar), ServiceRecord::Justicar(record)) => {
                ServiceDefinition::Justicar(justicar_service(record))
            }
            (Ok(ServiceKind::Chain), ServiceRecord::Chain(record)) => {
                ServiceDefinition::Chain(chain_service(record))
            }
            _ => {
                error!(service = %key, "save configuration: unsupported service, skipping");
                continue;
            }
        };
        services.insert(key.to_string(), definition);
    }

    let mut networks = IndexMap::new();
    networks.insert(
        NETWORK_NAME.to_string(),
        NetworkDefinition {
            name: NETWORK_NAME.to_string(),
            driver: "bridge".to_string(),
        },
    );

    ComposeDocument {
        version: COMPOSE_VERSION.to_string(),
        services,
        networks,
    }
}

pub fn render_to_string(model: &ConfigModel) -> Result<String, ComposeError> {
    Ok(serde_yaml::to_string(&render(model))?)
}

/// Overwrites `path` with the document for `model`.
pub fn save(model: &ConfigModel, path: impl AsRef<Path>) -> Result<(), ComposeError> {
    let path = path.as_ref();
    let yaml = render_to_string(model)?;
    fs::write(path, yaml).map_err(|source| ComposeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "deployment file saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;
    use pretty_assertions::assert_eq;

    fn chain_of(document: &ComposeDocument) -> &ChainService {
        match document.services.get("chain") {
            Some(ServiceDefinition::Chain(chain)) => chain,
            other => panic!("expected chain service, got {other:?}"),
        }
    }

    #[test]
    fn chain_command_is_reproduced_verbatim() {
        let expected = vec![
            "--base-path",
            "/opt/cess/data",
            "--chain",
            "cess-testnet",
            "--port",
            "30336",
            "--name",
            "cess",
            "--rpc-port",
            "9944",
            "--execution",
            "WASM",
            "--wasm-execution",
            "compiled",
            "--in-peers",
            "75",
            "--out-peers",
            "75",
            "--rpc-max-response-size",
            "32",
            "--pruning",
            "archive",
            "--rpc-external",
            "--rpc-methods",
            "unsafe",
            "--rpc-cors",
            "all",
            "--wasm-runtime-overrides",
            "/opt/cess/wasms",
        ];
        assert_eq!(chain_command("testnet"), expected);
    }

    #[test]
    fn chain_service_uses_record_fields() {
        let mut model = ConfigModel::default();
        let mut chain = ServiceKind::Chain.default_record();
        chain.set_field(Field::Network, "mainnet");
        chain.set_field(Field::Port, "19944");
        chain.set_field(Field::ConfigurationFile, "/srv/chain");
        model.replace(chain).unwrap();

        let document = render(&model);
        let expected = ChainService {
            image: "cesslab/cess-chain:mainnet".to_string(),
            hostname: "cess-chain".to_string(),
            volumes: strings(&["/srv/chain:/opt/cess/data"]),
            command: chain_command("mainnet"),
            logging: LoggingPolicy {
                driver: "json-file".to_string(),
                options: LoggingOptions {
                    max_size: "300m".to_string(),
                    max_file: "10".to_string(),
                },
            },
            networks: strings(&["cd2n"]),
            container_name: "cess-chain".to_string(),
            ports: strings(&["19944:9944", "30336:30336"]),
        };
        assert_eq!(chain_of(&document), &expected);
        assert_eq!(expected.command[3], "cess-mainnet");
    }

    #[test]
    fn justicar_service_uses_record_fields() {
        let document = render(&ConfigModel::default());
        let Some(ServiceDefinition::Justicar(justicar)) = document.services.get("justicar") else {
            panic!("justicar service missing");
        };
        let expected = JusticarService {
            image: "cesslab/justicar:latest".to_string(),
            container_name: "justicar".to_string(),
            hostname: "justicar_host".to_string(),
            devices: strings(&[
                "/dev/sgx_enclave:/dev/sgx_enclave",
                "/dev/sgx_provision:/dev/sgx_provision",
            ]),
            ports: strings(&["1309:1309"]),
            volumes: strings(&["/opt/cd2n/justicar:/opt/justicar/backups"]),
            environment: strings(&["EXTRA_OPTS=--chain-rpc=\"ws://cess-chain:9944\""]),
            networks: strings(&["cd2n"]),
            stdin_open: true,
            tty: true,
        };
        assert_eq!(justicar, &expected);
    }

    #[test]
    fn unsupported_service_is_skipped() {
        let mut model = ConfigModel::default();
        model.insert("redis", ServiceKind::Justicar.default_record());

        let document = render(&model);
        assert_eq!(
            document.services.keys().collect::<Vec<_>>(),
            vec!["justicar", "chain"]
        );
        assert_eq!(document.networks.len(), 1);
        assert_eq!(document.networks["cd2n"].driver, "bridge");
    }

    #[test]
    fn mismatched_record_is_skipped() {
        let mut model = ConfigModel::empty();
        model.insert("chain", ServiceKind::Justicar.default_record());

        let document = render(&model);
        assert!(document.services.is_empty());
        assert_eq!(document.networks.len(), 1);
    }

    #[test]
    fn emitted_keys_keep_authored_order() {
        let yaml = render_to_string(&ConfigModel::default()).unwrap();
        let position = |needle: &str| yaml.find(needle).unwrap();

        assert!(position("version:") < position("services:"));
        assert!(position("services:") < position("\nnetworks:"));
        assert!(position("justicar:\n") < position("chain:\n"));
        assert!(position("hostname: cess-chain") < position("command:"));
        assert!(position("command:") < position("logging:"));
        assert!(position("logging:") < position("container_name: cess-chain"));
        assert!(yaml.contains("max-size: 300m"));
    }
}
