use serde::{Deserialize, Serialize};

use crate::{Credentials, JobId, ScanRequest};

/// Event forwarded to the workflow engine for one accepted scan request.
///
/// Wire shape: `{ "asset": string, "credentials": object, "jobId": string }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanEvent {
    pub asset: String,
    pub credentials: Credentials,
    pub job_id: JobId,
}

impl ScanEvent {
    pub fn new(request: ScanRequest, job_id: JobId) -> Self {
        let (asset, credentials) = request.into_parts();
        Self {
            asset,
            credentials,
            job_id,
        }
    }
}
