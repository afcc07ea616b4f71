//! Display settings for rendered result lists.

use serde::{Deserialize, Serialize};

use cine_model::Query;

/// Result cap applied once a filter is active.
pub const DEFAULT_RESULT_LIMIT: usize = 400;

/// Result cap for the unfiltered first view.
pub const DEFAULT_INITIAL_LIMIT: usize = 100;

/// Options controlling how results are presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Maximum number of rendered titles for a filtered query.
    pub result_limit: usize,

    /// Maximum number of rendered titles when no axis is set.
    pub initial_limit: usize,

    /// Shown in place of an empty duration or season count.
    pub placeholder: String,

    /// Shown when a title has no name.
    pub untitled: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            initial_limit: DEFAULT_INITIAL_LIMIT,
            placeholder: "\u{2014}".to_string(),
            untitled: "(Untitled)".to_string(),
        }
    }
}

impl DisplayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    #[must_use]
    pub fn with_initial_limit(mut self, limit: usize) -> Self {
        self.initial_limit = limit;
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Render cap for a query. Zero means unlimited.
    pub fn limit_for(&self, query: &Query) -> usize {
        if query.is_wildcard() {
            self.initial_limit
        } else {
            self.result_limit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_caps() {
        let config = DisplayConfig::default();
        assert_eq!(config.limit_for(&Query::new()), 100);
        assert_eq!(config.limit_for(&Query::new().with_type("Movie")), 400);
        assert_eq!(config.placeholder, "—");
    }

    #[test]
    fn builders_override() {
        let config = DisplayConfig::new()
            .with_result_limit(10)
            .with_initial_limit(0)
            .with_placeholder("-");
        assert_eq!(config.limit_for(&Query::new().with_genre("Drama")), 10);
        assert_eq!(config.limit_for(&Query::new()), 0);
        assert_eq!(config.placeholder, "-");
    }
}
