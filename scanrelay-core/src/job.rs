use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier correlating an accepted scan request with its run in the
/// workflow engine.
///
/// Backed by a random (version 4) UUID, so concurrent requests can mint
/// identifiers without sharing a counter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct JobId(Uuid);

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl JobId {
    /// Generate a fresh identifier. Never blocks and never repeats in practice
    /// (122 random bits).
    pub fn new() -> Self {
        JobId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for JobId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for JobId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(s).map(JobId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ten_thousand_ids_never_collide() {
        let ids: HashSet<JobId> = (0..10_000).map(|_| JobId::new()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn ids_are_random_uuids() {
        let id = JobId::new();
        assert_eq!(id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn concurrent_generation_needs_no_coordination() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    (0..1_000).map(|_| JobId::new()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().expect("generator thread panicked") {
                assert!(seen.insert(id), "duplicate job id {id}");
            }
        }
        assert_eq!(seen.len(), 8_000);
    }

    #[test]
    fn serializes_as_plain_hyphenated_string() {
        let id: JobId = "0b5f3c1e-8f6a-4c1d-9d1e-2f3a4b5c6d7e".parse().unwrap();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, "0b5f3c1e-8f6a-4c1d-9d1e-2f3a4b5c6d7e");
        assert_eq!(id.to_string(), "0b5f3c1e-8f6a-4c1d-9d1e-2f3a4b5c6d7e");
    }
}
