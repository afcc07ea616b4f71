//! CSV header normalization.

/// Normalizes a header value by stripping a UTF-8 byte order mark and
/// surrounding whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_matches('\u{feff}').trim().to_string()
}
