//! External service adapters

pub mod crm;
pub mod goto;

// Re-export commonly used items
pub use crm::*;
pub use goto::*;
