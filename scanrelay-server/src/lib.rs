//! # scanrelay server
//!
//! HTTP front door for data-quality scans.
//!
//! `POST /scan` validates the caller's request, assigns it a job identifier
//! and forwards a scan event to the workflow engine (Airflow). The server
//! does not track jobs after dispatch; the identifier it returns is the
//! caller's handle on the run inside the workflow engine.

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use routes::create_app;
