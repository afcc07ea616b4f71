//! Filter queries over the four facet axes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A facet a query can constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Type,
    Genre,
    Decade,
    Platform,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Type, Axis::Genre, Axis::Decade, Axis::Platform];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Type => "type",
            Axis::Genre => "genre",
            Axis::Decade => "decade",
            Axis::Platform => "platform",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "type" => Ok(Axis::Type),
            "genre" => Ok(Axis::Genre),
            "decade" => Ok(Axis::Decade),
            "platform" => Ok(Axis::Platform),
            _ => Err(ModelError::UnknownAxis(s.to_string())),
        }
    }
}

/// Active filter values. An unset axis matches everything.
///
/// Values are trimmed when set, and a blank value clears the axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    content_type: Option<String>,
    genre: Option<String>,
    decade: Option<String>,
    platform: Option<String>,
}

fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl Query {
    /// The wildcard query.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type(self, value: &str) -> Self {
        self.with(Axis::Type, Some(value))
    }

    #[must_use]
    pub fn with_genre(self, value: &str) -> Self {
        self.with(Axis::Genre, Some(value))
    }

    #[must_use]
    pub fn with_decade(self, value: &str) -> Self {
        self.with(Axis::Decade, Some(value))
    }

    #[must_use]
    pub fn with_platform(self, value: &str) -> Self {
        self.with(Axis::Platform, Some(value))
    }

    /// Sets or clears one axis.
    #[must_use]
    pub fn with(mut self, axis: Axis, value: Option<&str>) -> Self {
        let value = clean(value);
        match axis {
            Axis::Type => self.content_type = value,
            Axis::Genre => self.genre = value,
            Axis::Decade => self.decade = value,
            Axis::Platform => self.platform = value,
        }
        self
    }

    /// A copy of this query with `axis` turned into a wildcard.
    #[must_use]
    pub fn without(&self, axis: Axis) -> Self {
        self.clone().with(axis, None)
    }

    pub fn get(&self, axis: Axis) -> Option<&str> {
        match axis {
            Axis::Type => self.content_type.as_deref(),
            Axis::Genre => self.genre.as_deref(),
            Axis::Decade => self.decade.as_deref(),
            Axis::Platform => self.platform.as_deref(),
        }
    }

    /// Axes with a value set.
    pub fn active_axes(&self) -> Vec<Axis> {
        Axis::ALL
            .into_iter()
            .filter(|axis| self.get(*axis).is_some())
            .collect()
    }

    pub fn is_wildcard(&self) -> bool {
        Axis::ALL.iter().all(|axis| self.get(*axis).is_none())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wildcard() {
            return f.write_str("(any)");
        }
        let parts: Vec<String> = Axis::ALL
            .iter()
            .filter_map(|axis| self.get(*axis).map(|value| format!("{axis}={value}")))
            .collect();
        f.write_str(&parts.join(", "))
    }
}
