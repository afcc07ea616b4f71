//! Row normalization into typed titles.

use cine_model::{FieldMap, LogicalField, Platform, Title, Year};

/// Coerce a raw year cell.
///
/// Every character that is not an ASCII digit is dropped and the rest is
/// parsed. No digits, or more digits than fit in a `u64`, give
/// [`Year::Unknown`].
pub fn coerce_year(raw: Option<&str>) -> Year {
    let Some(raw) = raw else {
        return Year::Unknown;
    };
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<u64>().map_or(Year::Unknown, Year::Known)
}

/// Canonical casing for the content type.
///
/// `"movie"` (any case, surrounding space ignored) becomes `"Movie"`; any
/// value containing `"tv"` becomes `"TV Show"`; everything else is kept,
/// trimmed.
pub fn canonical_type(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    if lowered == "movie" {
        "Movie".to_string()
    } else if lowered.contains("tv") {
        "TV Show".to_string()
    } else {
        raw.trim().to_string()
    }
}

/// Build a normalized title from one CSV row.
pub fn normalize_row(row: &[String], fields: &FieldMap) -> Title {
    let cell = |field: LogicalField| {
        fields
            .index_of(field)
            .map(|index| row.get(index).map_or("", String::as_str))
    };
    let text = |field: LogicalField| cell(field).map(str::to_string);

    let mut flags = std::collections::BTreeMap::new();
    for platform in Platform::PRIORITY {
        if let Some(value) = cell(platform.flag_field()) {
            flags.insert(platform, value.to_string());
        }
    }

    let title = Title {
        title: text(LogicalField::Title),
        content_type: text(LogicalField::Type),
        genre: text(LogicalField::Genre),
        year: coerce_year(cell(LogicalField::Year)),
        duration: text(LogicalField::Duration),
        seasons: text(LogicalField::Seasons),
        description: text(LogicalField::Description),
        platform_text: text(LogicalField::Platform),
        flags,
    };
    normalize_title(title)
}

/// Apply type canonicalization to a title. Idempotent.
pub fn normalize_title(mut title: Title) -> Title {
    title.content_type = title.content_type.as_deref().map(canonical_type);
    title
}
