//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Event label construction
pub const MAX_LABEL_LENGTH: usize = 20;
pub const LABEL_ID_SEPARATOR: &str = "_#";

// Sync run configuration
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 250;

// Run lock files land here when no state directory is configured
pub const RUN_LOCK_DIR: &str = "gotosync-run-locks";
