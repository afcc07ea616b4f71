//! Dependent option lists for one facet axis.

use std::collections::BTreeSet;

use cine_model::{Axis, Query, Title};
use tracing::debug;

use crate::facets::{decade_of, genres_of, platform_labels};
use crate::filter::filter;

/// The values a title contributes to an axis.
///
/// Genre and platform yield one value per element; type and decade yield
/// at most one. Empty values are dropped.
pub fn axis_values(title: &Title, axis: Axis) -> Vec<String> {
    let values = match axis {
        Axis::Type => title
            .content_type
            .as_deref()
            .map(|value| vec![value.trim().to_string()])
            .unwrap_or_default(),
        Axis::Genre => genres_of(title),
        Axis::Decade => vec![decade_of(title)],
        Axis::Platform => platform_labels(title),
    };
    values.into_iter().filter(|value| !value.is_empty()).collect()
}

/// Distinct values for `axis` among titles matching every other active axis.
///
/// The query's own value for `axis` is ignored, so a selection never
/// narrows its own list. The result is sorted ascending.
pub fn available_values(titles: &[Title], query: &Query, axis: Axis) -> Vec<String> {
    let relaxed = query.without(axis);
    let values: BTreeSet<String> = filter(titles, &relaxed)
        .into_iter()
        .flat_map(|title| axis_values(title, axis))
        .collect();
    debug!(axis = %axis, query = %relaxed, values = values.len(), "built option list");
    values.into_iter().collect()
}
