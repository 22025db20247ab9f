pub mod credentials;
pub mod root;
pub mod scan;

pub use credentials::check_credentials_handler;
pub use root::{health_handler, root_handler};
pub use scan::start_scan_handler;

use serde_json::{Map, Value};

use crate::infra::errors::{AppError, AppResult};

// Arrays would otherwise deserialize positionally into payload structs.
pub(crate) fn json_object(body: Value) -> AppResult<Map<String, Value>> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::bad_request("request body must be a JSON object")),
    }
}
