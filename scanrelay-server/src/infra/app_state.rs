use std::{fmt, sync::Arc};

use scanrelay_core::{
    EventPublisher, PublishError,
    sanitize::{CredentialSanitizer, FabricCredentials},
};

use crate::infra::config::Config;

/// Read-only state shared by every request. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    publisher: EventPublisher,
    sanitizer: Arc<dyn CredentialSanitizer>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("publisher", &self.publisher)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(config: Arc<Config>, publisher: EventPublisher) -> Self {
        Self {
            config,
            publisher,
            sanitizer: Arc::new(FabricCredentials),
        }
    }

    /// Wire the HTTP publisher from the configured event URL. A missing URL
    /// yields an unconfigured publisher rather than an error.
    pub fn from_config(config: Arc<Config>) -> Result<Self, PublishError> {
        let publisher = EventPublisher::from_endpoint(
            config.publisher.event_url.clone(),
            config.publisher.timeout,
        )?;
        Ok(Self::new(config, publisher))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn publisher(&self) -> &EventPublisher {
        &self.publisher
    }

    pub fn sanitizer(&self) -> &dyn CredentialSanitizer {
        self.sanitizer.as_ref()
    }
}
