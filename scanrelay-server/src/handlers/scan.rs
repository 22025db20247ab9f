use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use scanrelay_core::{
    JobId, ScanEvent, ScanRequestPayload,
    request::{ASSET_FIELD, CREDENTIALS_FIELD},
    validate,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::json_object;
use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanAcceptedResponse {
    pub job_id: JobId,
}

/// `POST /scan`: validate, assign a job id, forward the event.
///
/// Exactly one outcome per request: rejected (4xx), accepted and published
/// (200), accepted without a configured destination (200, logged), or
/// accepted but not delivered (502, id withheld).
pub async fn start_scan_handler(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<ScanAcceptedResponse>> {
    let Json(body) = body.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "scan request body rejected");
        AppError::from(rejection)
    })?;
    let mut body = json_object(body)?;
    let payload = ScanRequestPayload {
        asset: body.remove(ASSET_FIELD),
        credentials: body.remove(CREDENTIALS_FIELD),
    };

    let request = validate(payload).map_err(|err| {
        debug!(field = err.field(), error = %err, "scan request failed validation");
        AppError::from(err)
    })?;

    let job_id = JobId::new();
    let credential_keys = request.credentials().len();
    let event = ScanEvent::new(request, job_id);

    match state.publisher().publish(&event).await {
        Ok(()) => {
            info!(
                %job_id,
                asset = %event.asset,
                credential_keys,
                "scan event published"
            );
        }
        Err(err) if err.is_not_configured() => {
            warn!(
                %job_id,
                asset = %event.asset,
                "event destination not configured; scan event not published"
            );
        }
        Err(err) => {
            error!(
                %job_id,
                asset = %event.asset,
                error = %err,
                "failed to publish scan event"
            );
            return Err(AppError::bad_gateway("Failed to publish event"));
        }
    }

    Ok(Json(ScanAcceptedResponse { job_id }))
}

