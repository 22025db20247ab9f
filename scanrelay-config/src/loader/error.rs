use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid event URL '{value}'")]
    InvalidEventUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("event URL must use http or https, got '{scheme}'")]
    UnsupportedEventUrlScheme { scheme: String },
    #[error(
        "AIRFLOW_EVENT_URL is required because SCANRELAY_REQUIRE_EVENT_URL is enabled"
    )]
    MissingEventUrl,
    #[error("invalid publish timeout '{value}'")]
    InvalidTimeout {
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error("publish timeout must be greater than zero")]
    ZeroTimeout,
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
