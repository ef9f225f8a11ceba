//! Event resolution per product

use std::sync::Arc;

use gotosync_domain::{Event, Product, Result};
use tracing::debug;

use super::ports::EventDirectory;

/// Resolves the events a run will attempt for one product.
pub struct EventSource {
    directory: Arc<dyn EventDirectory>,
}

impl EventSource {
    pub fn new(directory: Arc<dyn EventDirectory>) -> Self {
        Self { directory }
    }

    /// Events for the product: everything the directory knows, or a
    /// singleton when an explicit id was requested.
    ///
    /// The explicit-id path never consults the directory, so the id doubles
    /// as the event description and shows up in the derived label where a
    /// description slug would normally be. Known limitation, kept because
    /// downstream systems match on labels built exactly this way.
    ///
    /// # Errors
    /// Propagates directory failures; the explicit-id path cannot fail.
    pub async fn resolve(
        &self,
        product: Product,
        explicit_id: Option<&str>,
    ) -> Result<Vec<Event>> {
        match explicit_id {
            Some(id) => Ok(vec![Event::from_id(id)]),
            None => {
                let events = self.directory.list_events(product).await?;
                debug!(product = %product, count = events.len(), "events resolved");
                Ok(events)
            }
        }
    }
}
