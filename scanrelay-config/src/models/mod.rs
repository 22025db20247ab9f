pub mod sources;

use std::{path::PathBuf, time::Duration};

use url::Url;

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8000;
pub const DEFAULT_PUBLISH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub publisher: PublisherConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

/// Where accepted scan events go, and how long a delivery may take.
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    /// Workflow engine entry point. `None` means events are accepted but not
    /// forwarded.
    pub event_url: Option<Url>,
    pub timeout: Duration,
    /// Refuse to start when `event_url` is missing.
    pub require_event_url: bool,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            event_url: None,
            timeout: DEFAULT_PUBLISH_TIMEOUT,
            require_event_url: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
