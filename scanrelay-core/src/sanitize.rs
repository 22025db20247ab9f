//! Shape checks for the Microsoft Fabric credential bundle.
//!
//! Front ends that collect credentials through dialogue can call this to
//! reject obviously malformed input (a tenant id that is not a GUID, an
//! endpoint that is not an https URL) and to render a recap that never
//! repeats the client secret. The scan dispatch path does not use it.

use std::{collections::BTreeMap, fmt};

use serde::Serialize;
use url::Url;
use uuid::Uuid;

use crate::Credentials;

pub const TENANT_ID_KEY: &str = "MICROSOFT_FABRIC_TENANT_ID";
pub const CLIENT_ID_KEY: &str = "MICROSOFT_FABRIC_CLIENT_ID";
pub const CLIENT_SECRET_KEY: &str = "MICROSOFT_FABRIC_CLIENT_SECRET";
pub const API_ENDPOINT_KEY: &str = "MICROSOFT_FABRIC_API_ENDPOINT";

const MASK: &str = "***";
const HYPHENATED_GUID_LEN: usize = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueReason {
    Missing,
    Empty,
    NotAGuid,
    NotAUrl,
    InsecureScheme,
}

impl fmt::Display for IssueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IssueReason::Missing => "is missing",
            IssueReason::Empty => "must not be empty",
            IssueReason::NotAGuid => "must be a GUID",
            IssueReason::NotAUrl => "must be a valid URL",
            IssueReason::InsecureScheme => "must use https",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{field} {reason}")]
pub struct SanitizeIssue {
    pub field: &'static str,
    pub reason: IssueReason,
}

/// Outcome of a credential check: every problem found plus a recap safe to
/// show back to the user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SanitizedCredentials {
    pub issues: Vec<SanitizeIssue>,
    pub summary: BTreeMap<&'static str, String>,
}

impl SanitizedCredentials {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    fn flag(&mut self, field: &'static str, reason: IssueReason) {
        self.issues.push(SanitizeIssue { field, reason });
    }
}

/// Stable seam for credential sanitizers.
pub trait CredentialSanitizer: Send + Sync {
    fn check(&self, credentials: &Credentials) -> SanitizedCredentials;
}

/// Rules for the four Fabric keys collected upstream.
#[derive(Debug, Default, Clone, Copy)]
pub struct FabricCredentials;

impl CredentialSanitizer for FabricCredentials {
    fn check(&self, credentials: &Credentials) -> SanitizedCredentials {
        let mut result = SanitizedCredentials::default();

        for key in [TENANT_ID_KEY, CLIENT_ID_KEY] {
            match present(credentials, key) {
                Err(reason) => result.flag(key, reason),
                Ok(value) if !is_guid(value) => {
                    result.flag(key, IssueReason::NotAGuid)
                }
                Ok(value) => {
                    result.summary.insert(key, value.to_string());
                }
            }
        }

        match present(credentials, CLIENT_SECRET_KEY) {
            Err(reason) => result.flag(CLIENT_SECRET_KEY, reason),
            Ok(_) => {
                result.summary.insert(CLIENT_SECRET_KEY, MASK.to_string());
            }
        }

        match present(credentials, API_ENDPOINT_KEY) {
            Err(reason) => result.flag(API_ENDPOINT_KEY, reason),
            Ok(value) => match Url::parse(value) {
                Ok(url) if url.scheme() != "https" => {
                    result.flag(API_ENDPOINT_KEY, IssueReason::InsecureScheme)
                }
                Ok(url) if url.host_str().is_none() => {
                    result.flag(API_ENDPOINT_KEY, IssueReason::NotAUrl)
                }
                Ok(url) => {
                    result.summary.insert(API_ENDPOINT_KEY, url.to_string());
                }
                Err(_) => result.flag(API_ENDPOINT_KEY, IssueReason::NotAUrl),
            },
        }

        result
    }
}

fn present<'a>(
    credentials: &'a Credentials,
    key: &str,
) -> Result<&'a str, IssueReason> {
    match credentials.get(key).map(str::trim) {
        None => Err(IssueReason::Missing),
        Some("") => Err(IssueReason::Empty),
        Some(value) => Ok(value),
    }
}

fn is_guid(value: &str) -> bool {
    value.len() == HYPHENATED_GUID_LEN && Uuid::try_parse(value).is_ok()
}
