//! Client configuration model.
//!
//! Mirrors `config.toml`. Every field has a default so a missing or partial
//! file still yields a usable configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::session::DEFAULT_QUESTION_COUNT;

/// 45 minutes.
pub const DEFAULT_TIME_BUDGET_SECS: u64 = 45 * 60;
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1_000;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub interview: InterviewSettings,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            api: ApiSettings::default(),
            interview: InterviewSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL including the `/api` prefix, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ApiSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Tunables of the interview flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSettings {
    /// Countdown length for one attempt.
    #[serde(default = "default_time_budget_secs")]
    pub time_budget_secs: u64,
    /// Pause after completion before moving to the review, giving the server
    /// a head start on evaluation. Not a guarantee that evaluation finished.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Used when a session does not report its own question count.
    #[serde(default = "default_question_count")]
    pub default_question_count: u32,
}

impl InterviewSettings {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl Default for InterviewSettings {
    fn default() -> Self {
        Self {
            time_budget_secs: default_time_budget_secs(),
            settle_delay_ms: default_settle_delay_ms(),
            default_question_count: default_question_count(),
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_time_budget_secs() -> u64 {
    DEFAULT_TIME_BUDGET_SECS
}

fn default_settle_delay_ms() -> u64 {
    DEFAULT_SETTLE_DELAY_MS
}

fn default_question_count() -> u32 {
    DEFAULT_QUESTION_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config, RootConfig::default());
        assert_eq!(config.interview.time_budget_secs, 2700);
        assert_eq!(config.interview.settle_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: RootConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://prep.example.com/api"

            [interview]
            time_budget_secs = 600
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://prep.example.com/api");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.interview.time_budget_secs, 600);
        assert_eq!(config.interview.settle_delay_ms, DEFAULT_SETTLE_DELAY_MS);
        assert_eq!(config.log_level, "info");
    }
}
