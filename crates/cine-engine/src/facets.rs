//! Derived facets: decade, genre list and platform list.
//!
//! Facets are recomputed from a [`Title`] on every call and never stored.

use cine_model::{Platform, Title, Year};

/// `"1990s"` for 1990..=1999; empty for an unknown year.
pub fn decade_label(year: Year) -> String {
    match year {
        Year::Known(year) => format!("{}s", year / 10 * 10),
        Year::Unknown => String::new(),
    }
}

pub fn decade_of(title: &Title) -> String {
    decade_label(title.year)
}

/// Split genre text on `,`, `|` or `/`, trimming pieces and dropping empty ones.
pub fn split_genres(text: &str) -> Vec<String> {
    text.split([',', '|', '/'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn genres_of(title: &Title) -> Vec<String> {
    title.genre.as_deref().map(split_genres).unwrap_or_default()
}

/// Comma-joined platform labels for a title.
///
/// Set flags win and are listed in [`Platform::PRIORITY`] order. With no
/// flag set, the free-text platform column is used: underscores become
/// spaces, known aliases map to their canonical label, and anything else
/// is returned as cleaned. No flag and no text column gives an empty
/// string.
pub fn platforms_of(title: &Title) -> String {
    let flagged: Vec<&str> = Platform::PRIORITY
        .iter()
        .filter(|platform| title.has_flag(**platform))
        .map(Platform::label)
        .collect();
    if !flagged.is_empty() {
        return flagged.join(", ");
    }

    let Some(text) = title.platform_text.as_deref() else {
        return String::new();
    };
    let cleaned = text.replace('_', " ");
    let cleaned = cleaned.trim();
    Platform::canonical_alias(cleaned)
        .map_or_else(|| cleaned.to_string(), str::to_string)
}

/// The individual labels of [`platforms_of`], trimmed, empties dropped.
pub fn platform_labels(title: &Title) -> Vec<String> {
    platforms_of(title)
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_flags(flags: &[(Platform, &str)]) -> Title {
        let mut title = Title::default();
        for (platform, value) in flags {
            title.flags.insert(*platform, (*value).to_string());
        }
        title
    }

    #[test]
    fn decades() {
        assert_eq!(decade_label(Year::Known(1994)), "1990s");
        assert_eq!(decade_label(Year::Known(2000)), "2000s");
        assert_eq!(decade_label(Year::Known(2019)), "2010s");
        assert_eq!(decade_label(Year::Known(7)), "0s");
        assert_eq!(decade_label(Year::Unknown), "");
    }

    #[test]
    fn genre_split() {
        assert_eq!(
            split_genres("Action, Drama|Thriller"),
            vec!["Action", "Drama", "Thriller"]
        );
        assert_eq!(split_genres("Sci-Fi / Fantasy"), vec!["Sci-Fi", "Fantasy"]);
        assert_eq!(split_genres(" , |/ "), Vec::<String>::new());
        assert_eq!(split_genres("Drama, Drama"), vec!["Drama", "Drama"]);
    }

    #[test]
    fn absent_genre_column_has_no_genres() {
        assert!(genres_of(&Title::default()).is_empty());
    }

    #[test]
    fn flags_listed_in_priority_order() {
        let title = with_flags(&[(Platform::AmazonPrime, "1"), (Platform::Netflix, "1")]);
        assert_eq!(platforms_of(&title), "Netflix, Amazon Prime");

        let title = with_flags(&[
            (Platform::Hulu, "1"),
            (Platform::DisneyPlus, " 1"),
            (Platform::Netflix, "0"),
        ]);
        assert_eq!(platforms_of(&title), "Disney+, Hulu");
        assert_eq!(platform_labels(&title), vec!["Disney+", "Hulu"]);
    }

    #[test]
    fn flags_override_platform_text() {
        let mut title = with_flags(&[(Platform::Hulu, "1")]);
        title.platform_text = Some("netflix".to_string());
        assert_eq!(platforms_of(&title), "Hulu");
    }

    #[test]
    fn text_fallback_canonicalizes_aliases() {
        let mut title = with_flags(&[(Platform::Netflix, "0")]);
        title.platform_text = Some("prime_video".to_string());
        assert_eq!(platforms_of(&title), "Amazon Prime");

        title.platform_text = Some("Disney_Plus ".to_string());
        assert_eq!(platforms_of(&title), "Disney+");

        title.platform_text = Some(" apple_tv ".to_string());
        assert_eq!(platforms_of(&title), "apple tv");
    }

    #[test]
    fn nothing_to_go_on_is_empty() {
        assert_eq!(platforms_of(&Title::default()), "");
        assert!(platform_labels(&Title::default()).is_empty());
    }
}
