//! Normalized catalog records.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Release year after coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Year {
    Known(u64),
    /// Column absent or its digits did not form a number.
    #[default]
    Unknown,
}

impl Year {
    pub fn value(&self) -> Option<u64> {
        match self {
            Year::Known(year) => Some(*year),
            Year::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Year::Known(_))
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Known(year) => write!(f, "{year}"),
            Year::Unknown => f.write_str("unknown"),
        }
    }
}

/// One catalog row with every logical field in its own slot.
///
/// `None` means the file had no column for that field. Text slots hold
/// the cell verbatim; only `content_type` and `year` are rewritten during
/// normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub title: Option<String>,
    pub content_type: Option<String>,
    pub genre: Option<String>,
    pub year: Year,
    pub duration: Option<String>,
    pub seasons: Option<String>,
    pub description: Option<String>,
    pub platform_text: Option<String>,
    /// Raw flag cells, keyed by platform, for flag columns that exist.
    pub flags: BTreeMap<Platform, String>,
}

impl Title {
    /// Raw flag cell for a platform.
    pub fn flag(&self, platform: Platform) -> Option<&str> {
        self.flags.get(&platform).map(String::as_str)
    }

    /// A flag counts as set only when its trimmed text is exactly `"1"`.
    pub fn has_flag(&self, platform: Platform) -> bool {
        self.flag(platform).is_some_and(|value| value.trim() == "1")
    }
}
