//! Application configuration structures
//!
//! Plain data carried from the loader to the adapters. The loading logic
//! itself (environment variables, file probing) lives in the infra crate.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_BASE_DELAY_MS,
};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub goto: GotoConfig,
    pub crm: CrmConfig,
    #[serde(default)]
    pub sync: SyncSettings,
}

/// GoTo API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GotoConfig {
    /// Base URL of the GoTo REST API, e.g. `https://api.getgo.com`.
    pub api_url: String,
    /// Static bearer token for the API. Token refresh is handled outside
    /// this tool.
    pub access_token: String,
    /// Organizer whose events are listed and synced.
    pub organizer_key: String,
    /// Lowercase product identifiers enabled in the integration settings.
    /// Products missing from this list fail the authorization check and are
    /// skipped by unscoped runs.
    #[serde(default)]
    pub enabled_products: Vec<String>,
}

/// CRM endpoint that receives synchronized contacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrmConfig {
    pub api_url: String,
    pub api_token: String,
}

/// Knobs for the sync run itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncSettings {
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
    /// Directory holding run lock files; the system temp dir when unset.
    #[serde(default)]
    pub state_dir: Option<String>,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay_ms: DEFAULT_RETRY_BASE_DELAY_MS,
            state_dir: None,
        }
    }
}

fn default_http_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_retry_base_delay_ms() -> u64 {
    DEFAULT_RETRY_BASE_DELAY_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_settings_defaults_apply_when_section_missing() {
        let json = r#"{
            "goto": {
                "api_url": "https://api.getgo.com",
                "access_token": "token",
                "organizer_key": "org-1",
                "enabled_products": ["webinar"]
            },
            "crm": {
                "api_url": "https://crm.example.com",
                "api_token": "secret"
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.sync.http_timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
        assert_eq!(config.sync.max_retries, DEFAULT_MAX_RETRIES);
        assert!(config.sync.state_dir.is_none());
    }

    #[test]
    fn test_partial_sync_section_keeps_other_defaults() {
        let json = r#"{
            "goto": {
                "api_url": "https://api.getgo.com",
                "access_token": "token",
                "organizer_key": "org-1"
            },
            "crm": {
                "api_url": "https://crm.example.com",
                "api_token": "secret"
            },
            "sync": {
                "max_retries": 5
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.sync.max_retries, 5);
        assert_eq!(config.sync.http_timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
    }
}
