//! # GotoSync Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client with retry and backoff
//! - GoTo API and CRM adapters
//! - Configuration loading (environment variables and files)
//! - Cross-process run locks
//!
//! ## Architecture
//! - Implements traits defined in `gotosync-core`
//! - Depends on `gotosync-domain` and `gotosync-core`
//! - Contains all "impure" code (I/O, external APIs)

pub mod auth;
pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod run_lock;

// Re-export commonly used items
pub use auth::*;
pub use errors::*;
pub use http::*;
pub use integrations::*;
pub use run_lock::*;
