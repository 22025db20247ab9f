pub use scanrelay_config::{
    Config, ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions,
    ConfigMetadata, ConfigWarning, ConfigWarnings, PublisherConfig,
    ServerConfig,
};
