//! Synchronizable registration batches resolved from the product directory

use serde::{Deserialize, Serialize};

/// A single synchronizable unit: one webinar, meeting, training session or
/// assist session known to the upstream directory.
///
/// Events are resolved on demand and never stored; the pair is just enough
/// identity to fetch registrants and derive a contact label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Upstream key of the event, unique per product.
    pub id: String,
    /// Human-readable description as returned by the directory.
    pub description: String,
}

impl Event {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id: id.into(), description: description.into() }
    }

    /// Event standing in for an explicitly requested id.
    ///
    /// No directory lookup happens on the explicit-id path, so the id doubles
    /// as the description. Labels derived from such events carry the id where
    /// a description slug would normally appear; see the event source docs
    /// for why this is kept as-is.
    pub fn from_id(id: impl Into<String>) -> Self {
        let id = id.into();
        Self { description: id.clone(), id }
    }
}
