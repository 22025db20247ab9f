pub mod error;

use std::{
    fs,
    path::PathBuf,
    time::Duration,
};

use url::Url;

use crate::{
    models::{
        Config, ConfigMetadata, DEFAULT_PUBLISH_TIMEOUT, DEFAULT_SERVER_HOST,
        DEFAULT_SERVER_PORT, PublisherConfig, ServerConfig,
        sources::{EnvConfig, FileConfig},
    },
    validation::{self, ConfigWarnings},
};
use error::ConfigLoadError;

const DEFAULT_CONFIG_LOCATIONS: [&str; 2] =
    ["scanrelay.toml", "config/scanrelay.toml"];

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Load `.env`, then the TOML file, then the process environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let mut load = self.load_with_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Compose a config from an already gathered environment. Does not read
    /// any `.env` file.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let config = compose_config(file_config.unwrap_or_default(), env, config_path)?;
        let warnings = validation::collect_warnings(&config);

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        // An explicitly named file must exist; a default location may not.
        let (path, explicit) = if let Some(path) = &self.options.config_path {
            (path.clone(), true)
        } else if let Some(path) = &env.config_path {
            (path.clone(), true)
        } else if let Some(found) = DEFAULT_CONFIG_LOCATIONS
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.exists())
        {
            (found, false)
        } else {
            return Ok((None, None));
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let contents =
            fs::read_to_string(&path).map_err(|err| ConfigLoadError::Io {
                path: path.clone(),
                source: err,
            })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                path: path.clone(),
                source: err,
            })?;

        Ok((Some(file_config), Some(path)))
    }
}

fn compose_config(
    file: FileConfig,
    env: EnvConfig,
    config_path: Option<PathBuf>,
) -> Result<Config, ConfigLoadError> {
    let FileConfig {
        server: file_server,
        publisher: file_publisher,
    } = file;

    let server = ServerConfig {
        host: env
            .server_host
            .or(file_server.host)
            .unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
        port: env
            .server_port
            .or(file_server.port)
            .unwrap_or(DEFAULT_SERVER_PORT),
    };

    let event_url = env
        .event_url
        .or(file_publisher.event_url.filter(|raw| !raw.trim().is_empty()))
        .map(|raw| parse_event_url(&raw))
        .transpose()?;

    let timeout = env
        .publish_timeout
        .or(file_publisher.timeout)
        .map(|raw| parse_timeout(&raw))
        .transpose()?
        .unwrap_or(DEFAULT_PUBLISH_TIMEOUT);

    let require_event_url = env
        .require_event_url
        .or(file_publisher.require_event_url)
        .unwrap_or(false);

    if require_event_url && event_url.is_none() {
        return Err(ConfigLoadError::MissingEventUrl);
    }

    Ok(Config {
        server,
        publisher: PublisherConfig {
            event_url,
            timeout,
            require_event_url,
        },
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded: false,
        },
    })
}

fn parse_event_url(raw: &str) -> Result<Url, ConfigLoadError> {
    let raw = raw.trim();
    let url = Url::parse(raw).map_err(|source| ConfigLoadError::InvalidEventUrl {
        value: raw.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigLoadError::UnsupportedEventUrlScheme {
            scheme: other.to_string(),
        }),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigLoadError> {
    let raw = raw.trim();
    let timeout = humantime::parse_duration(raw).map_err(|source| {
        ConfigLoadError::InvalidTimeout {
            value: raw.to_string(),
            source,
        }
    })?;

    if timeout.is_zero() {
        return Err(ConfigLoadError::ZeroTimeout);
    }
    Ok(timeout)
}
