//! Delivery of scan events to the workflow engine.
//!
//! [`EventPublisher`] is the capability handed to the API layer at startup.
//! It is either backed by an [`EventSink`] or explicitly unconfigured, in
//! which case [`EventPublisher::publish`] reports
//! [`PublishError::NotConfigured`] without touching the network.

mod http;

pub use http::HttpEventSink;

use std::{fmt, sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use crate::ScanEvent;

/// Ceiling on a single delivery attempt, connect through response headers.
pub const DEFAULT_PUBLISH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("no event destination configured")]
    NotConfigured,

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("event delivery timed out after {timeout:?}")]
    Timeout {
        timeout: Duration,
        #[source]
        source: reqwest::Error,
    },

    #[error("event delivery failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("event destination rejected the event with status {status}")]
    Rejected { status: StatusCode },
}

impl PublishError {
    /// The soft condition: nothing to deliver to, as opposed to a delivery
    /// that was attempted and failed.
    pub fn is_not_configured(&self) -> bool {
        matches!(self, PublishError::NotConfigured)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, PublishError::Timeout { .. })
    }
}

/// Transport that carries a [`ScanEvent`] to its destination.
///
/// Implementations make exactly one delivery attempt per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn deliver(&self, event: &ScanEvent) -> Result<(), PublishError>;
}

#[derive(Clone)]
pub enum EventPublisher {
    Configured(Arc<dyn EventSink>),
    Unconfigured,
}

impl EventPublisher {
    /// Publisher that POSTs events as JSON to `endpoint`.
    pub fn http(endpoint: Url, timeout: Duration) -> Result<Self, PublishError> {
        Ok(Self::from_sink(HttpEventSink::new(endpoint, timeout)?))
    }

    /// Build from an optional endpoint; `None` yields [`EventPublisher::Unconfigured`].
    pub fn from_endpoint(
        endpoint: Option<Url>,
        timeout: Duration,
    ) -> Result<Self, PublishError> {
        match endpoint {
            Some(endpoint) => Self::http(endpoint, timeout),
            None => Ok(Self::Unconfigured),
        }
    }

    pub fn from_sink<S>(sink: S) -> Self
    where
        S: EventSink + 'static,
    {
        Self::Configured(Arc::new(sink))
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, EventPublisher::Configured(_))
    }

    pub async fn publish(&self, event: &ScanEvent) -> Result<(), PublishError> {
        match self {
            EventPublisher::Configured(sink) => sink.deliver(event).await,
            EventPublisher::Unconfigured => Err(PublishError::NotConfigured),
        }
    }
}

impl fmt::Debug for EventPublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventPublisher::Configured(_) => {
                f.debug_tuple("Configured").finish_non_exhaustive()
            }
            EventPublisher::Unconfigured => f.write_str("Unconfigured"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Credentials, JobId, ScanRequest};

    fn sample_event() -> ScanEvent {
        let request =
            ScanRequest::new("warehouse.customers", Credentials::new()).unwrap();
        ScanEvent::new(request, JobId::new())
    }

    #[tokio::test]
    async fn unconfigured_publisher_reports_not_configured() {
        let publisher = EventPublisher::from_endpoint(None, DEFAULT_PUBLISH_TIMEOUT)
            .unwrap();

        assert!(!publisher.is_configured());
        let err = publisher.publish(&sample_event()).await.unwrap_err();
        assert!(err.is_not_configured());
    }

    #[tokio::test]
    async fn configured_publisher_delivers_once_through_its_sink() {
        let event = sample_event();
        let expected_job = event.job_id;

        let mut sink = MockEventSink::new();
        sink.expect_deliver()
            .withf(move |event: &ScanEvent| event.job_id == expected_job)
            .times(1)
            .returning(|_| Ok(()));

        let publisher = EventPublisher::from_sink(sink);
        assert!(publisher.is_configured());
        publisher.publish(&event).await.unwrap();
    }

    #[tokio::test]
    async fn sink_failures_are_passed_through() {
        let mut sink = MockEventSink::new();
        sink.expect_deliver().times(1).returning(|_| {
            Err(PublishError::Rejected {
                status: StatusCode::SERVICE_UNAVAILABLE,
            })
        });

        let publisher = EventPublisher::from_sink(sink);
        let err = publisher.publish(&sample_event()).await.unwrap_err();

        assert!(!err.is_not_configured());
        assert!(matches!(
            err,
            PublishError::Rejected {
                status: StatusCode::SERVICE_UNAVAILABLE
            }
        ));
    }
}
