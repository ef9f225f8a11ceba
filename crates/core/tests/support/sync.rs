use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gotosync_core::sync::ports::{
    CapabilityAuthorizer, EventDirectory, RegistrantSyncer, SyncObserver,
};
use gotosync_domain::{Event, GotoSyncError, Product, Result as DomainResult};

/// In-memory mock for `CapabilityAuthorizer`.
///
/// Authorizes exactly the products it was seeded with.
#[derive(Default, Clone)]
pub struct MockAuthorizer {
    enabled: Vec<&'static str>,
}

impl MockAuthorizer {
    /// Authorizer that enables the given products' capabilities.
    pub fn authorizing(products: &[Product]) -> Self {
        Self { enabled: products.iter().map(Product::capability).collect() }
    }

    /// Authorizer that enables nothing.
    pub fn denying_all() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CapabilityAuthorizer for MockAuthorizer {
    async fn is_authorized(&self, capability: &str) -> bool {
        self.enabled.contains(&capability)
    }
}

/// In-memory mock for `EventDirectory`.
///
/// Returns seeded events in seeded order; products marked as failing return
/// a network error on every listing.
#[derive(Default, Clone)]
pub struct MockDirectory {
    events: HashMap<Product, Vec<Event>>,
    failing: Vec<Product>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(mut self, product: Product, events: Vec<Event>) -> Self {
        self.events.insert(product, events);
        self
    }

    pub fn with_failure(mut self, product: Product) -> Self {
        self.failing.push(product);
        self
    }
}

#[async_trait]
impl EventDirectory for MockDirectory {
    async fn list_events(&self, product: Product) -> DomainResult<Vec<Event>> {
        if self.failing.contains(&product) {
            return Err(GotoSyncError::Network("directory offline".to_string()));
        }
        Ok(self.events.get(&product).cloned().unwrap_or_default())
    }
}

/// One recorded `sync_event` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncCall {
    pub product: Product,
    pub event_id: String,
    pub label: String,
    pub description: String,
}

/// In-memory mock for `RegistrantSyncer`.
///
/// Responses are scripted as a FIFO queue consumed one per call; when the
/// queue runs dry every further call succeeds with `default_count`.
pub struct MockSyncer {
    responses: Mutex<Vec<DomainResult<u64>>>,
    calls: Arc<Mutex<Vec<SyncCall>>>,
    default_count: u64,
}

impl MockSyncer {
    pub fn new(responses: Vec<DomainResult<u64>>) -> Self {
        Self { responses: Mutex::new(responses), calls: Arc::new(Mutex::new(Vec::new())), default_count: 0 }
    }

    /// Syncer that always succeeds with the given count.
    pub fn succeeding_with(count: u64) -> Self {
        Self { responses: Mutex::new(Vec::new()), calls: Arc::new(Mutex::new(Vec::new())), default_count: count }
    }

    pub fn calls(&self) -> Vec<SyncCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RegistrantSyncer for MockSyncer {
    async fn sync_event(
        &self,
        product: Product,
        event_id: &str,
        label: &str,
        description: &str,
    ) -> DomainResult<u64> {
        self.calls.lock().unwrap().push(SyncCall {
            product,
            event_id: event_id.to_string(),
            label: label.to_string(),
            description: description.to_string(),
        });

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(self.default_count)
        } else {
            responses.remove(0)
        }
    }
}

/// Observer that records every hook invocation as a formatted line.
#[derive(Default)]
pub struct RecordingObserver {
    log: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl SyncObserver for RecordingObserver {
    fn on_product_started(&self, product: Product) {
        self.log.lock().unwrap().push(format!("product:{product}"));
    }

    fn on_event_started(&self, event_id: &str, label: &str) {
        self.log.lock().unwrap().push(format!("event:{event_id}:{label}"));
    }

    fn on_event_failed(&self, product: Product, event_id: &str, _error: &GotoSyncError) {
        self.log.lock().unwrap().push(format!("failed:{product}:{event_id}"));
    }

    fn on_directory_failed(&self, product: Product, _error: &GotoSyncError) {
        self.log.lock().unwrap().push(format!("directory:{product}"));
    }
}
