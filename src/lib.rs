//! Editor for the CD2N deployment file: a justicar enclave worker and a
//! CESS chain node, kept in sync with `docker-compose.yml`.

pub mod compose;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod workspace;

pub use config::Settings;
pub use error::{ComposeError, NavigationError};
pub use model::{ChainRecord, ConfigModel, Field, JusticarRecord, ServiceKind, ServiceRecord};
pub use navigation::{Navigator, Screen};
