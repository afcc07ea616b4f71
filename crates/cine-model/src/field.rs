//! Logical fields and the map binding them to concrete CSV columns.
//!
//! Catalog exports name the same information differently (`listed_in`
//! versus `genre`, `release_year` versus `year`). Each [`LogicalField`]
//! carries a prioritized list of header aliases; the ingest crate picks
//! the first alias present in a file and records it in a [`FieldMap`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// An abstract field name, independent of the column name used in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalField {
    Title,
    Type,
    Genre,
    Year,
    Duration,
    Seasons,
    Description,
    /// Free-text platform column, used when no platform flag is set.
    Platform,
    Netflix,
    Hulu,
    Disney,
    Prime,
}

impl LogicalField {
    /// All logical fields in resolution order.
    pub const ALL: [LogicalField; 12] = [
        LogicalField::Title,
        LogicalField::Type,
        LogicalField::Genre,
        LogicalField::Year,
        LogicalField::Duration,
        LogicalField::Seasons,
        LogicalField::Description,
        LogicalField::Platform,
        LogicalField::Netflix,
        LogicalField::Hulu,
        LogicalField::Prime,
        LogicalField::Disney,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalField::Title => "title",
            LogicalField::Type => "type",
            LogicalField::Genre => "genre",
            LogicalField::Year => "year",
            LogicalField::Duration => "duration",
            LogicalField::Seasons => "seasons",
            LogicalField::Description => "description",
            LogicalField::Platform => "platform",
            LogicalField::Netflix => "netflix",
            LogicalField::Hulu => "hulu",
            LogicalField::Disney => "disney",
            LogicalField::Prime => "prime",
        }
    }

    /// Lowercase header aliases, highest priority first.
    pub fn candidates(&self) -> &'static [&'static str] {
        match self {
            LogicalField::Title => &["title", "show_id", "name"],
            LogicalField::Type => &["type", "content_type"],
            LogicalField::Genre => &["listed_in", "genre", "genres", "category"],
            LogicalField::Year => &["release_year", "year", "date_added_year"],
            LogicalField::Duration => &[
                "duration",
                "runtime",
                "minutes",
                "runtime_minutes",
                "duration_class",
            ],
            LogicalField::Seasons => &["seasons", "season", "num_seasons"],
            LogicalField::Description => &["description", "overview", "summary"],
            LogicalField::Platform => &["platform", "service"],
            LogicalField::Netflix => &["netflix"],
            LogicalField::Hulu => &["hulu"],
            LogicalField::Disney => &["disney+", "disney_plus", "disney"],
            LogicalField::Prime => &[
                "prime_video",
                "amazon_prime",
                "amazon",
                "amazon prime video",
            ],
        }
    }

    /// Returns true for the boolean membership columns.
    pub fn is_flag(&self) -> bool {
        matches!(
            self,
            LogicalField::Netflix | LogicalField::Hulu | LogicalField::Disney | LogicalField::Prime
        )
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicalField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        LogicalField::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}

/// A concrete column a logical field resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedColumn {
    /// Header text as it appears in the file (trimmed).
    pub header: String,
    /// Zero-based column position.
    pub index: usize,
}

/// Binding of every logical field to a column, or to nothing.
///
/// Built once per load and never changed afterwards. A field without a
/// binding contributes no value and no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap {
    columns: BTreeMap<LogicalField, ResolvedColumn>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a logical field to a column, replacing any previous binding.
    pub fn bind(&mut self, field: LogicalField, column: ResolvedColumn) {
        self.columns.insert(field, column);
    }

    pub fn get(&self, field: LogicalField) -> Option<&ResolvedColumn> {
        self.columns.get(&field)
    }

    /// Column position for a field, if bound.
    pub fn index_of(&self, field: LogicalField) -> Option<usize> {
        self.columns.get(&field).map(|column| column.index)
    }

    /// Header name for a field, if bound.
    pub fn header_of(&self, field: LogicalField) -> Option<&str> {
        self.columns.get(&field).map(|column| column.header.as_str())
    }

    pub fn is_present(&self, field: LogicalField) -> bool {
        self.columns.contains_key(&field)
    }

    /// Number of bound fields.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Every logical field paired with its binding, in [`LogicalField::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = (LogicalField, Option<&ResolvedColumn>)> + '_ {
        LogicalField::ALL
            .into_iter()
            .map(|field| (field, self.columns.get(&field)))
    }

    /// Fields with no binding.
    pub fn absent(&self) -> Vec<LogicalField> {
        LogicalField::ALL
            .into_iter()
            .filter(|field| !self.columns.contains_key(field))
            .collect()
    }
}
