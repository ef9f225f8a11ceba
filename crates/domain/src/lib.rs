//! # GotoSync Domain
//!
//! Business domain types and models for GotoSync.
//!
//! This crate contains:
//! - Domain data types (Product, Event, SyncLedger, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and pure string utilities
//!
//! ## Architecture
//! - No dependencies on other GotoSync crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
// Re-export label utilities used at every seam that names an event
pub use utils::label::{clean_string, event_label};
