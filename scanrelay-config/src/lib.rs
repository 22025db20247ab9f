//! Configuration library for scanrelay.
//!
//! Settings are layered: an optional `.env` file seeds the process
//! environment, an optional TOML file provides defaults, and environment
//! variables override the file. The server applies CLI overrides on top of
//! the returned [`Config`].

pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError,
};
pub use models::{Config, ConfigMetadata, PublisherConfig, ServerConfig};
pub use validation::{ConfigWarning, ConfigWarnings};
