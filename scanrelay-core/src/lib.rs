//! Core dispatch pipeline for data-quality scan jobs.
//!
//! A scan request travels through three steps before it leaves the process:
//!
//! - [`request::validate`] checks the shape of the caller's payload and turns
//!   it into a [`ScanRequest`],
//! - [`JobId::new`] mints the identifier that correlates the request with its
//!   asynchronous run,
//! - [`EventPublisher::publish`] forwards the resulting [`ScanEvent`] to the
//!   workflow engine.
//!
//! The credential bundle travels through untouched. [`sanitize`] offers an
//! independent check of the Microsoft Fabric credential shape for front ends
//! that collect it; the dispatch path never calls it.

pub mod credentials;
pub mod event;
pub mod job;
pub mod publisher;
pub mod request;
pub mod sanitize;

pub use credentials::Credentials;
pub use event::ScanEvent;
pub use job::JobId;
pub use publisher::{
    DEFAULT_PUBLISH_TIMEOUT, EventPublisher, EventSink, HttpEventSink,
    PublishError,
};
pub use request::{
    ScanRequest, ScanRequestPayload, ValidationError, validate,
    validate_credentials,
};
