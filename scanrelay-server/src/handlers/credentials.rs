use std::collections::BTreeMap;

use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use scanrelay_core::{
    request::CREDENTIALS_FIELD, sanitize::SanitizeIssue, validate_credentials,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::json_object;
use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

#[derive(Debug, Serialize)]
pub struct CredentialCheckResponse {
    pub valid: bool,
    pub issues: Vec<SanitizeIssue>,
    pub summary: BTreeMap<&'static str, String>,
}

/// `POST /credentials/check`: shape-check a Fabric credential bundle for the
/// collecting front end. The summary never contains the client secret.
///
/// The body is `{"credentials": {...}}` and is held to the same field rules
/// as `POST /scan`.
pub async fn check_credentials_handler(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<CredentialCheckResponse>> {
    let Json(body) = body?;
    let mut body = json_object(body)?;
    let credentials = validate_credentials(body.remove(CREDENTIALS_FIELD))
        .map_err(|err| {
            debug!(field = err.field(), error = %err, "credential check rejected");
            AppError::from(err)
        })?;

    let checked = state.sanitizer().check(&credentials);
    debug!(
        valid = checked.is_valid(),
        issues = checked.issues.len(),
        "credential bundle checked"
    );

    Ok(Json(CredentialCheckResponse {
        valid: checked.is_valid(),
        issues: checked.issues,
        summary: checked.summary,
    }))
}
