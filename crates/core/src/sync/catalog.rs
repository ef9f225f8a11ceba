//! Product selection and authorization filtering

use std::str::FromStr;
use std::sync::Arc;

use gotosync_domain::{Product, Result};
use tracing::debug;

use super::ports::CapabilityAuthorizer;

/// Resolves which products a run may touch.
pub struct ProductCatalog {
    authorizer: Arc<dyn CapabilityAuthorizer>,
}

impl ProductCatalog {
    pub fn new(authorizer: Arc<dyn CapabilityAuthorizer>) -> Self {
        Self { authorizer }
    }

    /// Products whose capability is enabled, in declaration order.
    ///
    /// Only unscoped runs go through this filter. An explicitly requested
    /// product is synced without an authorization check, matching how the
    /// integration has always treated a direct request.
    pub async fn list_authorized(&self) -> Vec<Product> {
        let mut authorized = Vec::new();
        for product in Product::ALL {
            if self.authorizer.is_authorized(product.capability()).await {
                authorized.push(product);
            } else {
                debug!(product = %product, "product not authorized, skipped");
            }
        }
        authorized
    }

    /// Parse an explicitly requested product string.
    ///
    /// # Errors
    /// Returns `GotoSyncError::InvalidProduct` for anything outside the
    /// known identifiers.
    pub fn parse(&self, value: &str) -> Result<Product> {
        Product::from_str(value)
    }

    /// True when the string names a known product.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        Product::from_str(value).is_ok()
    }
}
