//! Keyed mutual exclusion for sync runs

use std::sync::Arc;

use dashmap::DashSet;
use tracing::debug;

/// Keyed mutual exclusion over in-flight runs.
///
/// One instance is shared by everything in the process that can start a
/// run. Acquisition is atomic: of any number of concurrent claims on the
/// same key, exactly one receives a permit until that permit is dropped.
/// Distinct keys never contend.
#[derive(Clone, Default)]
pub struct RunGuard {
    active: Arc<DashSet<String>>,
}

impl RunGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the key. Returns `None` while another permit for the same key
    /// is alive; the caller must then skip the run entirely.
    #[must_use]
    pub fn try_acquire(&self, key: &str) -> Option<RunPermit> {
        if self.active.insert(key.to_string()) {
            debug!(run_key = %key, "run guard acquired");
            Some(RunPermit { active: Arc::clone(&self.active), key: key.to_string() })
        } else {
            debug!(run_key = %key, "run guard contended");
            None
        }
    }

    /// True while a permit for the key is alive.
    #[must_use]
    pub fn is_active(&self, key: &str) -> bool {
        self.active.contains(key)
    }
}

/// Proof of an exclusive claim on a run key.
///
/// Dropping the permit releases the key, so release happens on every exit
/// path of the holder, including early returns and panics.
pub struct RunPermit {
    active: Arc<DashSet<String>>,
    key: String,
}

impl RunPermit {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for RunPermit {
    fn drop(&mut self) {
        self.active.remove(&self.key);
        debug!(run_key = %self.key, "run guard released");
    }
}
