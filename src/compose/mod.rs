//! Reading and writing the deployment file.

mod document;
pub mod loader;
pub mod writer;

pub use document::{
    ChainService, ComposeDocument, JusticarService, LoggingOptions, LoggingPolicy,
    NetworkDefinition, ServiceDefinition,
};
pub use loader::{first_or, load};
pub use writer::{render, render_to_string, save};
