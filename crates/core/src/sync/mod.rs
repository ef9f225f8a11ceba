//! Registrant synchronization: run guard, product catalog, event
//! resolution, and the driver that orchestrates them.

pub mod catalog;
pub mod events;
pub mod guard;
pub mod ports;
pub mod service;

pub use catalog::ProductCatalog;
pub use events::EventSource;
pub use guard::{RunGuard, RunPermit};
pub use ports::{
    CapabilityAuthorizer, EventDirectory, NoopObserver, RegistrantSyncer, SyncObserver,
};
pub use service::SyncDriver;
