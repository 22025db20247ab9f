use std::time::Duration;

use async_trait::async_trait;
use reqwest::redirect;
use tracing::debug;
use url::Url;

use super::{EventSink, PublishError};
use crate::ScanEvent;

/// Delivers events with a single JSON `POST` per call.
///
/// The client-wide timeout bounds the whole attempt, so a destination that
/// never answers costs at most `timeout`. Only the status code of the reply
/// is read. Redirects are not followed: a 3xx reply is a rejection.
#[derive(Debug, Clone)]
pub struct HttpEventSink {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpEventSink {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, PublishError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(PublishError::Client)?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn classify(&self, err: reqwest::Error) -> PublishError {
        if err.is_timeout() {
            PublishError::Timeout {
                timeout: self.timeout,
                source: err,
            }
        } else {
            PublishError::Transport(err)
        }
    }
}

#[async_trait]
impl EventSink for HttpEventSink {
    async fn deliver(&self, event: &ScanEvent) -> Result<(), PublishError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(event)
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PublishError::Rejected { status });
        }

        debug!(
            job_id = %event.job_id,
            endpoint = %self.endpoint,
            status = status.as_u16(),
            "scan event delivered"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Credentials, JobId, ScanRequest};
    use std::time::Instant;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    fn sample_event() -> ScanEvent {
        let credentials: Credentials =
            [("MICROSOFT_FABRIC_TENANT_ID", "tenant")].into_iter().collect();
        let request = ScanRequest::new("lakehouse/sales", credentials).unwrap();
        ScanEvent::new(request, JobId::new())
    }

    fn sink_for(server: &MockServer, timeout: Duration) -> HttpEventSink {
        let endpoint = Url::parse(&format!("{}/events", server.uri())).unwrap();
        HttpEventSink::new(endpoint, timeout).unwrap()
    }

    #[tokio::test]
    async fn posts_event_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/events"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let event = sample_event();
        sink_for(&server, Duration::from_secs(5))
            .deliver(&event)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body: serde_json::Value =
            serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["asset"], "lakehouse/sales");
        assert_eq!(body["jobId"], event.job_id.to_string());
        assert_eq!(body["credentials"]["MICROSOFT_FABRIC_TENANT_ID"], "tenant");
    }

    #[tokio::test]
    async fn any_2xx_counts_as_delivered() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(202).set_body_string("queued"))
            .expect(1)
            .mount(&server)
            .await;

        sink_for(&server, Duration::from_secs(5))
            .deliver(&sample_event())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn non_success_status_is_rejected_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let err = sink_for(&server, Duration::from_secs(5))
            .deliver(&sample_event())
            .await
            .unwrap_err();

        match err {
            PublishError::Rejected { status } => assert_eq!(status.as_u16(), 500),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn redirect_is_rejected_without_following() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/events"))
            .respond_with(
                ResponseTemplate::new(302).insert_header("location", "/elsewhere"),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(path("/elsewhere"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = sink_for(&server, Duration::from_secs(5))
            .deliver(&sample_event())
            .await
            .unwrap_err();

        match err {
            PublishError::Rejected { status } => assert_eq!(status.as_u16(), 302),
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn silent_destination_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
            .mount(&server)
            .await;

        let timeout = Duration::from_millis(250);
        let started = Instant::now();
        let err = sink_for(&server, timeout)
            .deliver(&sample_event())
            .await
            .unwrap_err();

        assert!(err.is_timeout(), "expected timeout, got {err:?}");
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn unreachable_destination_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint = Url::parse(&format!("http://{addr}/events")).unwrap();
        let err = HttpEventSink::new(endpoint, Duration::from_secs(5))
            .unwrap()
            .deliver(&sample_event())
            .await
            .unwrap_err();

        assert!(matches!(err, PublishError::Transport(_)), "got {err:?}");
    }
}
