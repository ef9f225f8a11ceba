//! Error conversions for the infrastructure layer

pub mod conversions;

// Re-export commonly used items
pub use conversions::{status_to_error, InfraError};
