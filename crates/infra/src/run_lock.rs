//! Cross-process run locks using PID files
//!
//! A scheduled run must not overlap an earlier run for the same scope that
//! is still executing. Each run key gets its own PID file; files left behind
//! by dead processes are reclaimed.

use std::fs;
use std::path::{Path, PathBuf};

use gotosync_domain::constants::RUN_LOCK_DIR;
use gotosync_domain::{clean_string, GotoSyncError, Result, SyncSettings};

/// PID-file lock scoped to a single run key.
///
/// The file is removed when the lock is dropped.
pub struct RunLock {
    pid_file: PathBuf,
}

impl RunLock {
    /// Claim the lock file for the given run key.
    ///
    /// Returns `Ok(None)` when another live process already holds the key,
    /// which callers treat as "skip this run". Stale PID files are removed
    /// and the lock is taken over.
    ///
    /// # Errors
    /// Returns `GotoSyncError::Internal` when the lock directory or PID file
    /// cannot be written.
    pub fn try_acquire<P: AsRef<Path>>(lock_dir: P, run_key: &str) -> Result<Option<Self>> {
        let dir = lock_dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| {
            GotoSyncError::Internal(format!(
                "Failed to create lock directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let pid_file = dir.join(file_name(run_key));

        if pid_file.exists() {
            if let Ok(content) = fs::read_to_string(&pid_file) {
                if let Ok(pid) = content.trim().parse::<u32>() {
                    if is_process_running(pid) {
                        tracing::warn!(existing_pid = pid, run_key, "run_lock.run_active");
                        return Ok(None);
                    }
                    tracing::warn!(stale_pid = pid, run_key, "run_lock.stale_pid_file_detected");
                }
            }
            if let Err(err) = fs::remove_file(&pid_file) {
                tracing::warn!(error = %err, path = %pid_file.display(), "run_lock.remove_stale_pid_failed");
            }
        }

        let current_pid = std::process::id();
        fs::write(&pid_file, current_pid.to_string())
            .map_err(|e| GotoSyncError::Internal(format!("Failed to create PID file: {}", e)))?;

        tracing::info!(pid = current_pid, run_key, path = %pid_file.display(), "run_lock.acquired");

        Ok(Some(Self { pid_file }))
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.pid_file) {
            tracing::warn!(error = %e, path = %self.pid_file.display(), "run_lock.remove_pid_failed");
        } else {
            tracing::info!(path = %self.pid_file.display(), "run_lock.released");
        }
    }
}

/// Resolve the lock directory from the settings.
///
/// Falls back to a fixed directory under the system temp dir when no state
/// directory is configured.
pub fn lock_dir(settings: &SyncSettings) -> PathBuf {
    settings
        .state_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(RUN_LOCK_DIR))
}

/// Derive the PID file name for a run key.
///
/// The sanitized key keeps the name readable; the digest keeps distinct keys
/// from colliding after sanitization truncates them. `DefaultHasher::new()`
/// uses fixed keys, so the digest is stable across processes of the same
/// build.
fn file_name(run_key: &str) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    run_key.hash(&mut hasher);
    let digest = hasher.finish();

    let slug = clean_string(run_key);
    if slug.is_empty() {
        format!("gotosync-{digest:016x}.pid")
    } else {
        format!("gotosync-{slug}-{digest:016x}.pid")
    }
}

#[cfg(target_os = "linux")]
fn is_process_running(pid: u32) -> bool {
    Path::new("/proc").join(pid.to_string()).exists()
}

#[cfg(target_os = "macos")]
fn is_process_running(pid: u32) -> bool {
    use std::process::Command;

    // `kill -0` probes for existence without delivering a signal
    Command::new("kill")
        .arg("-0")
        .arg(pid.to_string())
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn is_process_running(pid: u32) -> bool {
    tracing::warn!(pid, "run_lock.process_check_unsupported");
    false
}
