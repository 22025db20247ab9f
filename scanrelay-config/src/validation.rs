use std::time::Duration;

use crate::models::Config;

/// Timeouts above this still load, with a warning.
pub const LONG_PUBLISH_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

/// Soft checks on a fully composed config. Hard failures are raised by the
/// loader before this runs.
pub fn collect_warnings(config: &Config) -> ConfigWarnings {
    let mut warnings = ConfigWarnings::default();

    if config.publisher.event_url.is_none() {
        warnings.push_with_hint(
            "AIRFLOW_EVENT_URL not set; scan requests will be accepted but their events will not be published",
            "Set AIRFLOW_EVENT_URL, or SCANRELAY_REQUIRE_EVENT_URL=true to refuse to start without it",
        );
    }

    if config.publisher.timeout > LONG_PUBLISH_TIMEOUT {
        warnings.push_with_hint(
            format!(
                "PUBLISH_TIMEOUT of {} holds each scan request open for that long when the workflow engine stalls",
                humantime::format_duration(config.publisher.timeout)
            ),
            "Keep PUBLISH_TIMEOUT at a few seconds; the default is 10s",
        );
    }

    warnings
}
