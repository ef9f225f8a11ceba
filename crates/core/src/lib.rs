//! # GotoSync Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits)
//! - The sync driver and its collaborators
//!
//! ## Architecture Principles
//! - Only depends on `gotosync-domain`
//! - No HTTP, filesystem, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod sync;

// Re-export specific items to avoid ambiguity
pub use sync::ports::{
    CapabilityAuthorizer, EventDirectory, NoopObserver, RegistrantSyncer, SyncObserver,
};
pub use sync::{EventSource, ProductCatalog, RunGuard, RunPermit, SyncDriver};
