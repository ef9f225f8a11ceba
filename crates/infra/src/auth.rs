//! Credentials and capability authorization
//!
//! Tokens come from the loaded configuration. Token refresh is owned by the
//! surrounding platform, so the provider here only hands out what it was
//! given and fails when nothing is configured.

use std::collections::HashSet;

use async_trait::async_trait;
use gotosync_core::CapabilityAuthorizer;
use gotosync_domain::{GotoConfig, GotoSyncError, Product, Result};
use tracing::warn;

/// Source of bearer tokens for outbound API calls.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get a valid access token.
    async fn access_token(&self) -> Result<String>;
}

/// Token provider backed by a fixed token from the configuration.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String> {
        if self.token.is_empty() {
            return Err(GotoSyncError::Auth("no access token configured".into()));
        }
        Ok(self.token.clone())
    }
}

/// Capability authorizer backed by the integration settings.
///
/// The configuration lists enabled products by their lowercase identifiers;
/// each one is translated into its capability name at construction time.
/// Unknown identifiers are logged and skipped rather than failing the run.
pub struct SettingsAuthorizer {
    enabled: HashSet<String>,
}

impl SettingsAuthorizer {
    pub fn from_config(config: &GotoConfig) -> Self {
        let mut enabled = HashSet::new();

        for raw in &config.enabled_products {
            match raw.parse::<Product>() {
                Ok(product) => {
                    enabled.insert(product.capability().to_string());
                }
                Err(_) => {
                    warn!(product = %raw, "unknown product in enabled_products, ignoring");
                }
            }
        }

        Self { enabled }
    }
}

#[async_trait]
impl CapabilityAuthorizer for SettingsAuthorizer {
    async fn is_authorized(&self, capability: &str) -> bool {
        self.enabled.contains(capability)
    }
}
