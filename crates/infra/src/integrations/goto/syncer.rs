//! Registrant synchronization between the GoTo API and the CRM sink.
//!
//! One call moves one event: fetch the event's registrants, deliver them as
//! a single tagged batch, report how many contacts the sink accepted. Any
//! failure fails the whole event; per-event containment is owned by the
//! driver that called us.

use std::sync::Arc;

use async_trait::async_trait;
use gotosync_core::RegistrantSyncer;
use gotosync_domain::{Product, Result};
use tracing::{debug, info};

use super::client::GotoClient;
use super::types::Registrant;
use crate::integrations::crm::CrmClient;

/// Interface for reading one event's registrants.
#[async_trait]
pub trait RegistrantSource: Send + Sync {
    async fn fetch_registrants(&self, product: Product, event_id: &str)
        -> Result<Vec<Registrant>>;
}

#[async_trait]
impl RegistrantSource for GotoClient {
    async fn fetch_registrants(
        &self,
        product: Product,
        event_id: &str,
    ) -> Result<Vec<Registrant>> {
        self.registrants(product, event_id).await
    }
}

/// Interface for delivering registrant batches to a destination.
#[async_trait]
pub trait ContactSink: Send + Sync {
    /// Deliver one event's registrants tagged with the event label.
    /// Returns the number of contacts the sink accepted.
    async fn deliver(&self, registrants: &[Registrant], label: &str) -> Result<u64>;
}

#[async_trait]
impl ContactSink for CrmClient {
    async fn deliver(&self, registrants: &[Registrant], label: &str) -> Result<u64> {
        self.deliver_batch(registrants, label).await
    }
}

/// [`RegistrantSyncer`] backed by the GoTo API and the CRM sink.
pub struct GotoRegistrantSyncer {
    source: Arc<dyn RegistrantSource>,
    sink: Arc<dyn ContactSink>,
}

impl GotoRegistrantSyncer {
    pub fn new(source: Arc<dyn RegistrantSource>, sink: Arc<dyn ContactSink>) -> Self {
        Self { source, sink }
    }
}

#[async_trait]
impl RegistrantSyncer for GotoRegistrantSyncer {
    async fn sync_event(
        &self,
        product: Product,
        event_id: &str,
        label: &str,
        description: &str,
    ) -> Result<u64> {
        let registrants = self.source.fetch_registrants(product, event_id).await?;

        if registrants.is_empty() {
            debug!(product = %product, event_id, "no registrants to synchronize");
            return Ok(0);
        }

        let accepted = self.sink.deliver(&registrants, label).await?;
        info!(product = %product, event_id, description, accepted, "synchronized registrants");
        Ok(accepted)
    }
}
