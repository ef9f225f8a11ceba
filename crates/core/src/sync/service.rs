//! Sync run orchestration - core business logic

use std::sync::Arc;

use gotosync_domain::{
    event_label, DirectoryFailure, Result, SyncLedger, SyncReport, SyncRequest,
};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::catalog::ProductCatalog;
use super::events::EventSource;
use super::guard::RunGuard;
use super::ports::{NoopObserver, RegistrantSyncer, SyncObserver};

/// Drives one synchronization run end to end.
///
/// Products are walked in catalog order and their events strictly
/// sequentially; a failed event is recorded in the ledger and the run moves
/// on. The driver never retries anything itself. Running it again is the
/// retry mechanism, gated by the same run key.
pub struct SyncDriver {
    guard: RunGuard,
    catalog: ProductCatalog,
    events: EventSource,
    syncer: Arc<dyn RegistrantSyncer>,
    observer: Arc<dyn SyncObserver>,
}

impl SyncDriver {
    pub fn new(
        guard: RunGuard,
        catalog: ProductCatalog,
        events: EventSource,
        syncer: Arc<dyn RegistrantSyncer>,
    ) -> Self {
        Self { guard, catalog, events, syncer, observer: Arc::new(NoopObserver) }
    }

    /// Attach an observer for run milestones (console reporting).
    pub fn with_observer(mut self, observer: Arc<dyn SyncObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Execute one run.
    ///
    /// The run key is claimed before anything is validated, so a repeat of
    /// an invalid request contends with an identical in-flight one. A
    /// contended key or an empty authorized product set ends the run
    /// cleanly; the outcome on the report says which.
    ///
    /// # Errors
    /// Returns `GotoSyncError::InvalidProduct` when the requested product is
    /// not a known identifier. The key is released before the error reaches
    /// the caller; no events are attempted.
    pub async fn run(&self, request: &SyncRequest) -> Result<SyncReport> {
        let run_id = Uuid::now_v7();
        let run_key = request.run_key();
        let span = info_span!("sync_run", %run_id, run_key = %run_key);
        self.run_guarded(request, run_id, &run_key).instrument(span).await
    }

    async fn run_guarded(
        &self,
        request: &SyncRequest,
        run_id: Uuid,
        run_key: &str,
    ) -> Result<SyncReport> {
        // The permit drops on every path out of this function.
        let _permit = match self.guard.try_acquire(run_key) {
            Some(permit) => permit,
            None => {
                info!("previous run still in flight, skipping");
                return Ok(SyncReport::skipped(run_id));
            }
        };

        let products = match &request.product {
            Some(raw) => vec![self.catalog.parse(raw)?],
            None => {
                let authorized = self.catalog.list_authorized().await;
                if authorized.is_empty() {
                    info!("no products authorized, nothing to do");
                    return Ok(SyncReport::nothing_to_do(run_id));
                }
                authorized
            }
        };

        let mut ledger = SyncLedger::new();
        let mut directory_failures: Vec<DirectoryFailure> = Vec::new();

        for product in products {
            info!(product = %product, "synchronizing registrants");
            self.observer.on_product_started(product);

            let events = match self.events.resolve(product, request.event_id.as_deref()).await {
                Ok(events) => events,
                Err(err) => {
                    error!(product = %product, error = %err, "event listing failed");
                    self.observer.on_directory_failed(product, &err);
                    directory_failures.push(DirectoryFailure { product, error: err });
                    continue;
                }
            };

            for event in events {
                let label = event_label(&event.description, &event.id);
                self.observer.on_event_started(&event.id, &label);
                info!(event_id = %event.id, label = %label, "synchronizing event");

                match self
                    .syncer
                    .sync_event(product, &event.id, &label, &event.description)
                    .await
                {
                    Ok(contacts) => {
                        ledger.record_success(product, event.id, label, contacts);
                    }
                    Err(err) => {
                        warn!(
                            product = %product,
                            event_id = %event.id,
                            error = %err,
                            "event sync failed, continuing with next event"
                        );
                        self.observer.on_event_failed(product, &event.id, &err);
                        ledger.record_failure(product, event.id, label, err);
                    }
                }
            }
        }

        info!(
            contacts = ledger.total_contacts(),
            events = ledger.len(),
            failures = ledger.failure_count(),
            directory_failures = directory_failures.len(),
            "run finished"
        );
        Ok(SyncReport::completed(run_id, ledger, directory_failures))
    }
}
