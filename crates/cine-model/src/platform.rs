//! Streaming platforms and their display labels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::LogicalField;

/// A streaming service with a dedicated membership flag column.
///
/// Variant order is the order labels are listed when several flags are
/// set on one title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    Netflix,
    DisneyPlus,
    Hulu,
    AmazonPrime,
}

impl Platform {
    /// Flag evaluation order.
    pub const PRIORITY: [Platform; 4] = [
        Platform::Netflix,
        Platform::DisneyPlus,
        Platform::Hulu,
        Platform::AmazonPrime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Netflix => "Netflix",
            Platform::DisneyPlus => "Disney+",
            Platform::Hulu => "Hulu",
            Platform::AmazonPrime => "Amazon Prime",
        }
    }

    /// The flag column this platform is read from.
    pub fn flag_field(&self) -> LogicalField {
        match self {
            Platform::Netflix => LogicalField::Netflix,
            Platform::DisneyPlus => LogicalField::Disney,
            Platform::Hulu => LogicalField::Hulu,
            Platform::AmazonPrime => LogicalField::Prime,
        }
    }

    /// Canonical label for a free-text platform alias, if it is a known alias.
    ///
    /// Matching is case-insensitive on the already cleaned text.
    pub fn canonical_alias(text: &str) -> Option<&'static str> {
        match text.to_lowercase().as_str() {
            "prime video" | "amazon" | "amazon prime video" => Some("Amazon Prime"),
            "disney plus" => Some("Disney+"),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
