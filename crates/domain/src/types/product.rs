//! The closed set of conferencing products that carry registrant data

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GotoSyncError;

/// A GoTo conferencing product.
///
/// The set is closed and ordered; sync runs walk products in declaration
/// order. Each variant carries three derived names:
///
/// - [`Product::as_str`] - lowercase identifier used on the CLI and in run
///   keys (`"webinar"`)
/// - [`Product::capability`] - integration capability checked before a
///   product is synced (`"Gotowebinar"`)
/// - [`Product::display_name`] - human-facing name used in console output
///   (`"GoToWebinar"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Product {
    Webinar,
    Meeting,
    Training,
    Assist,
}

impl Product {
    /// All products in declaration order.
    pub const ALL: [Product; 4] =
        [Product::Webinar, Product::Meeting, Product::Training, Product::Assist];

    /// Lowercase identifier used on the CLI and in run keys.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Webinar => "webinar",
            Self::Meeting => "meeting",
            Self::Training => "training",
            Self::Assist => "assist",
        }
    }

    /// Capability name checked against the integration settings.
    #[must_use]
    pub fn capability(&self) -> &'static str {
        match self {
            Self::Webinar => "Gotowebinar",
            Self::Meeting => "Gotomeeting",
            Self::Training => "Gototraining",
            Self::Assist => "Gotoassist",
        }
    }

    /// Human-facing product name used in console output.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Webinar => "GoToWebinar",
            Self::Meeting => "GoToMeeting",
            Self::Training => "GoToTraining",
            Self::Assist => "GoToAssist",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Product {
    type Err = GotoSyncError;

    /// Parses the lowercase identifier. Matching is exact; `"Webinar"` is
    /// rejected the same way `"bogus"` is.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "webinar" => Ok(Self::Webinar),
            "meeting" => Ok(Self::Meeting),
            "training" => Ok(Self::Training),
            "assist" => Ok(Self::Assist),
            other => Err(GotoSyncError::InvalidProduct(other.to_string())),
        }
    }
}
