//! Port interfaces for registrant synchronization

use async_trait::async_trait;
use gotosync_domain::{Event, GotoSyncError, Product, Result};

/// Capability query against the integration settings.
///
/// Capability names follow the integration convention (`"Gotowebinar"`,
/// `"Gotomeeting"`, ...); see `Product::capability`.
#[async_trait]
pub trait CapabilityAuthorizer: Send + Sync {
    /// True when the named capability is enabled and usable.
    async fn is_authorized(&self, capability: &str) -> bool;
}

/// Directory of synchronizable events, one listing per product.
#[async_trait]
pub trait EventDirectory: Send + Sync {
    /// All known events for the product, in the order the upstream API
    /// returned them. Callers rely on that order being preserved.
    async fn list_events(&self, product: Product) -> Result<Vec<Event>>;
}

/// Per-event registrant synchronization.
#[async_trait]
pub trait RegistrantSyncer: Send + Sync {
    /// Pull registrants for one event and upsert them into the CRM.
    /// Returns the number of contacts synchronized.
    async fn sync_event(
        &self,
        product: Product,
        event_id: &str,
        label: &str,
        description: &str,
    ) -> Result<u64>;
}

/// Observer for run milestones, used for console reporting.
///
/// Hooks fire in processing order and must not block; implementations
/// format or collect, nothing more. All hooks default to no-ops so
/// observers implement only what they report on.
pub trait SyncObserver: Send + Sync {
    fn on_product_started(&self, _product: Product) {}

    /// Fires before the event is attempted.
    fn on_event_started(&self, _event_id: &str, _label: &str) {}

    fn on_event_failed(&self, _product: Product, _event_id: &str, _error: &GotoSyncError) {}

    /// Fires when a product's event listing fails and the run moves on.
    fn on_directory_failed(&self, _product: Product, _error: &GotoSyncError) {}
}

/// Observer that reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SyncObserver for NoopObserver {}
