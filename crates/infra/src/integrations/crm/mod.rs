//! CRM ingest adapter

pub mod client;

// Re-export commonly used items
pub use client::CrmClient;
