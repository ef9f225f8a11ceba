//! HTTP client shared by the GoTo and CRM adapters

pub mod client;

// Re-export commonly used items
pub use client::{HttpClient, HttpClientBuilder};
