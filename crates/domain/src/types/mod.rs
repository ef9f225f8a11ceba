//! Domain types and models

pub mod event;
pub mod product;
pub mod sync;

pub use event::Event;
pub use product::Product;
pub use sync::{
    DirectoryFailure, LedgerEntry, RunOutcome, SyncLedger, SyncOutcome, SyncReport, SyncRequest,
};
