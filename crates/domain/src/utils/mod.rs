//! Pure utility functions with no dependencies on the rest of the crate

pub mod label;

pub use label::{clean_string, event_label};
