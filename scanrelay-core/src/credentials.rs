use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Opaque key/value bundle the workflow engine needs to reach the scanned
/// asset.
///
/// The dispatch path never inspects the contents. `Debug` prints keys only,
/// and values are zeroized when the bundle is dropped.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials(BTreeMap<String, String>);

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Credentials
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.keys().map(|key| (key, "***")))
            .finish()
    }
}

impl Drop for Credentials {
    fn drop(&mut self) {
        for value in self.0.values_mut() {
            value.zeroize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_values() {
        let creds: Credentials =
            [("MICROSOFT_FABRIC_CLIENT_SECRET", "hunter2")].into_iter().collect();

        let rendered = format!("{creds:?}");
        assert!(rendered.contains("MICROSOFT_FABRIC_CLIENT_SECRET"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn serializes_as_flat_object() {
        let creds: Credentials =
            [("user", "svc"), ("token", "abc")].into_iter().collect();

        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json, serde_json::json!({ "user": "svc", "token": "abc" }));
    }
}
