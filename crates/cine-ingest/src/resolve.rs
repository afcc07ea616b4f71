//! Header-driven field resolution.

use tracing::debug;

use cine_model::{FieldMap, LogicalField, ResolvedColumn};

/// Position of the header matching the highest-priority candidate.
///
/// Candidates are tried in order; for each, the headers are compared after
/// trimming and lowercasing. The first candidate with any match wins.
pub fn resolve_index(headers: &[String], candidates: &[&str]) -> Option<usize> {
    candidates.iter().find_map(|candidate| {
        headers
            .iter()
            .position(|header| header.trim().to_lowercase() == *candidate)
    })
}

/// Header text for the highest-priority candidate present, or `None`.
pub fn resolve<'a>(headers: &'a [String], candidates: &[&str]) -> Option<&'a str> {
    resolve_index(headers, candidates).map(|index| headers[index].trim())
}

/// Resolve every logical field against one header row.
pub fn build_field_map(headers: &[String]) -> FieldMap {
    let mut map = FieldMap::new();
    for field in LogicalField::ALL {
        match resolve_index(headers, field.candidates()) {
            Some(index) => {
                let header = headers[index].trim().to_string();
                debug!(field = %field, column = %header, index, "resolved field");
                map.bind(field, ResolvedColumn { header, index });
            }
            None => debug!(field = %field, "field absent"),
        }
    }
    map
}
