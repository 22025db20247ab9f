#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use axum_test::TestServer;
use scanrelay_core::{EventPublisher, EventSink, PublishError, ScanEvent};
use scanrelay_server::{
    create_app,
    infra::{
        app_state::AppState,
        config::{Config, ConfigMetadata, PublisherConfig, ServerConfig},
    },
};
use url::Url;
use wiremock::MockServer;

mockall::mock! {
    pub Sink {}

    #[async_trait]
    impl EventSink for Sink {
        async fn deliver(&self, event: &ScanEvent) -> std::result::Result<(), PublishError>;
    }
}

pub const EVENTS_PATH: &str = "/api/v1/scan-events";

pub fn test_config(event_url: Option<Url>, timeout: Duration) -> Arc<Config> {
    Arc::new(Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        publisher: PublisherConfig {
            event_url,
            timeout,
            require_event_url: false,
        },
        metadata: ConfigMetadata::default(),
    })
}

fn serve(state: AppState) -> Result<TestServer> {
    TestServer::builder()
        .build(create_app(state))
        .map_err(|err| anyhow!(err.to_string()))
}

/// Server whose event URL points at `engine`, the stand-in workflow engine.
pub fn server_for_engine(
    engine: &MockServer,
    timeout: Duration,
) -> Result<TestServer> {
    let url = Url::parse(&format!("{}{EVENTS_PATH}", engine.uri()))?;
    let state = AppState::from_config(test_config(Some(url), timeout))?;
    serve(state)
}

/// Server with no event destination at all.
pub fn unconfigured_server() -> Result<TestServer> {
    let state =
        AppState::from_config(test_config(None, Duration::from_secs(10)))?;
    serve(state)
}

/// Server publishing through an arbitrary sink.
pub fn server_with_sink<S>(sink: S) -> Result<TestServer>
where
    S: EventSink + 'static,
{
    let state = AppState::new(
        test_config(None, Duration::from_secs(10)),
        EventPublisher::from_sink(sink),
    );
    serve(state)
}
