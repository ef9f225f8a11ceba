//! GoTo API adapter
//!
//! Event listing and registrant fetching against the GoTo REST endpoints
//! (G2W, G2M, G2T, G2A), plus the syncer that moves registrants into the
//! CRM sink.

pub mod client;
pub mod syncer;
pub mod types;

// Re-export commonly used items
pub use client::GotoClient;
pub use syncer::{ContactSink, GotoRegistrantSyncer, RegistrantSource};
pub use types::Registrant;
