//! Shape validation for incoming scan requests.
//!
//! Validation runs before a job identifier is minted or the publisher is
//! touched, so a malformed request has no side effects at all.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::Credentials;

pub const ASSET_FIELD: &str = "asset";
pub const CREDENTIALS_FIELD: &str = "credentials";

/// Untyped body of `POST /scan`, as received from the caller.
///
/// Fields stay loosely typed so a bad field is reported by name instead of
/// surfacing as an opaque deserialization failure.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ScanRequestPayload {
    #[serde(default)]
    pub asset: Option<Value>,
    #[serde(default)]
    pub credentials: Option<Value>,
}

/// A scan request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    asset: String,
    credentials: Credentials,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field '{field}' is required")]
    Missing { field: &'static str },

    #[error("field '{field}' must be {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    #[error("field 'asset' must not be empty")]
    EmptyAsset,
}

impl ValidationError {
    /// Name of the offending field, e.g. `asset` or `credentials.token`.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Missing { field } => field,
            ValidationError::InvalidType { field, .. } => field,
            ValidationError::EmptyAsset => ASSET_FIELD,
        }
    }
}

impl ScanRequest {
    /// Build a request programmatically; applies the same asset rule as
    /// [`validate`].
    pub fn new(
        asset: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            asset: normalize_asset(asset.into())?,
            credentials,
        })
    }

    pub fn asset(&self) -> &str {
        &self.asset
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn into_parts(self) -> (String, Credentials) {
        (self.asset, self.credentials)
    }
}

impl TryFrom<ScanRequestPayload> for ScanRequest {
    type Error = ValidationError;

    fn try_from(payload: ScanRequestPayload) -> Result<Self, Self::Error> {
        validate(payload)
    }
}

/// Check the payload shape and produce a [`ScanRequest`].
///
/// `asset` must be a string that is non-empty once trimmed. `credentials`
/// must be an object of string values; it may be empty and its keys are not
/// inspected.
pub fn validate(
    payload: ScanRequestPayload,
) -> Result<ScanRequest, ValidationError> {
    let asset = match payload.asset {
        None => {
            return Err(ValidationError::Missing { field: ASSET_FIELD });
        }
        Some(Value::String(asset)) => normalize_asset(asset)?,
        Some(_) => {
            return Err(ValidationError::InvalidType {
                field: ASSET_FIELD.to_string(),
                expected: "a string",
            });
        }
    };

    let credentials = validate_credentials(payload.credentials)?;

    Ok(ScanRequest { asset, credentials })
}

/// Check a `credentials` value on its own: present, an object, every value a
/// string. An empty object is accepted.
pub fn validate_credentials(
    credentials: Option<Value>,
) -> Result<Credentials, ValidationError> {
    let map = match credentials {
        None => {
            return Err(ValidationError::Missing {
                field: CREDENTIALS_FIELD,
            });
        }
        Some(Value::Object(map)) => map,
        Some(_) => {
            return Err(ValidationError::InvalidType {
                field: CREDENTIALS_FIELD.to_string(),
                expected: "an object",
            });
        }
    };

    let mut validated = Credentials::new();
    for (key, value) in map {
        match value {
            Value::String(value) => validated.insert(key, value),
            _ => {
                return Err(ValidationError::InvalidType {
                    field: format!("{CREDENTIALS_FIELD}.{key}"),
                    expected: "a string",
                });
            }
        }
    }
    Ok(validated)
}

fn normalize_asset(asset: String) -> Result<String, ValidationError> {
    let trimmed = asset.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyAsset);
    }
    if trimmed.len() == asset.len() {
        Ok(asset)
    } else {
        Ok(trimmed.to_string())
    }
}
