//! Request and result types for a synchronization run

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::GotoSyncError;
use crate::types::product::Product;

/// What the caller asked a run to cover.
///
/// Both fields hold the raw strings as given on the command line. Validation
/// happens inside the run, after the run key has been claimed, so a repeat of
/// an invalid request contends on the same key as the first attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncRequest {
    /// Lowercase product identifier, or `None` for all authorized products.
    pub product: Option<String>,
    /// Upstream event id, or `None` for every event of the selected products.
    pub event_id: Option<String>,
}

impl SyncRequest {
    /// Request covering all authorized products and all of their events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_product(product: impl Into<String>) -> Self {
        Self { product: Some(product.into()), event_id: None }
    }

    pub fn for_event(product: impl Into<String>, event_id: impl Into<String>) -> Self {
        Self { product: Some(product.into()), event_id: Some(event_id.into()) }
    }

    /// Key identifying this run for overlap detection.
    ///
    /// The raw product string and raw event id, concatenated, with absent
    /// parts contributing nothing. An all-products all-events run therefore
    /// has the empty key and excludes every other unscoped run.
    #[must_use]
    pub fn run_key(&self) -> String {
        let mut key = String::new();
        if let Some(product) = &self.product {
            key.push_str(product);
        }
        if let Some(id) = &self.event_id {
            key.push_str(id);
        }
        key
    }
}

/// Per-event outcome recorded in the ledger.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SyncOutcome {
    Succeeded { contacts: u64 },
    Failed { error: GotoSyncError },
}

impl SyncOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// Contacts synchronized by this event; zero for failed events.
    #[must_use]
    pub fn contacts(&self) -> u64 {
        match self {
            Self::Succeeded { contacts } => *contacts,
            Self::Failed { .. } => 0,
        }
    }
}

/// One ledger line: which event was attempted and how it went.
#[derive(Debug, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub product: Product,
    pub event_id: String,
    pub label: String,
    pub outcome: SyncOutcome,
}

/// Append-only record of every event attempted during a run.
///
/// Entries are recorded in processing order and never amended. The running
/// total counts successfully synchronized contacts only; a failed event
/// contributes nothing even if the downstream operation made partial
/// progress before failing.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SyncLedger {
    entries: Vec<LedgerEntry>,
    total_contacts: u64,
}

impl SyncLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(
        &mut self,
        product: Product,
        event_id: impl Into<String>,
        label: impl Into<String>,
        contacts: u64,
    ) {
        self.total_contacts += contacts;
        self.entries.push(LedgerEntry {
            product,
            event_id: event_id.into(),
            label: label.into(),
            outcome: SyncOutcome::Succeeded { contacts },
        });
    }

    pub fn record_failure(
        &mut self,
        product: Product,
        event_id: impl Into<String>,
        label: impl Into<String>,
        error: GotoSyncError,
    ) {
        self.entries.push(LedgerEntry {
            product,
            event_id: event_id.into(),
            label: label.into(),
            outcome: SyncOutcome::Failed { error },
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Entry for the given product and event id, if that event was attempted.
    #[must_use]
    pub fn entry(&self, product: Product, event_id: &str) -> Option<&LedgerEntry> {
        self.entries.iter().find(|e| e.product == product && e.event_id == event_id)
    }

    /// Sum of contacts over all succeeded events.
    #[must_use]
    pub fn total_contacts(&self) -> u64 {
        self.total_contacts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.outcome.is_success()).count()
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// Products and events were resolved and walked to the end.
    Completed,
    /// Another run holds the same run key; nothing was attempted.
    SkippedActiveRun,
    /// No product requested and none authorized.
    NothingToDo,
}

/// A product whose event listing failed before any event could be attempted.
#[derive(Debug, Serialize, Deserialize)]
pub struct DirectoryFailure {
    pub product: Product,
    pub error: GotoSyncError,
}

/// Everything a caller learns about a finished run.
#[derive(Debug, Serialize, Deserialize)]
pub struct SyncReport {
    /// Correlation id stamped on every log line of the run.
    pub run_id: Uuid,
    pub outcome: RunOutcome,
    pub ledger: SyncLedger,
    /// Products whose event directory could not be listed at all. The run
    /// keeps going with the remaining products and reports these here.
    pub directory_failures: Vec<DirectoryFailure>,
}

impl SyncReport {
    #[must_use]
    pub fn skipped(run_id: Uuid) -> Self {
        Self {
            run_id,
            outcome: RunOutcome::SkippedActiveRun,
            ledger: SyncLedger::new(),
            directory_failures: Vec::new(),
        }
    }

    #[must_use]
    pub fn nothing_to_do(run_id: Uuid) -> Self {
        Self {
            run_id,
            outcome: RunOutcome::NothingToDo,
            ledger: SyncLedger::new(),
            directory_failures: Vec::new(),
        }
    }

    #[must_use]
    pub fn completed(
        run_id: Uuid,
        ledger: SyncLedger,
        directory_failures: Vec<DirectoryFailure>,
    ) -> Self {
        Self { run_id, outcome: RunOutcome::Completed, ledger, directory_failures }
    }
}
