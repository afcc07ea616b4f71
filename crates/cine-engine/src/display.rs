//! Record-to-display mapping.

use serde::Serialize;

use cine_model::Title;

use crate::config::DisplayConfig;
use crate::facets::{decade_of, genres_of, platforms_of};

/// Returns true for cell text that renders as the placeholder.
///
/// Triggers: empty (after trimming), `"0"`, `"nan"` or `"none"`, case-insensitive.
pub fn is_placeholder_value(value: &str) -> bool {
    let lowered = value.trim().to_lowercase();
    matches!(lowered.as_str(), "" | "0" | "nan" | "none")
}

/// Everything a renderer shows for one title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleView {
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub genres: Vec<String>,
    pub year: Option<u64>,
    pub decade: String,
    pub platforms: String,
    pub duration: String,
    pub seasons: String,
    pub description: String,
}

impl TitleView {
    pub fn new(title: &Title, config: &DisplayConfig) -> Self {
        let or_placeholder = |value: Option<&str>| match value {
            Some(value) if !is_placeholder_value(value) => value.to_string(),
            _ => config.placeholder.clone(),
        };
        let name = title
            .title
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .map_or_else(|| config.untitled.clone(), str::to_string);

        Self {
            title: name,
            content_type: title.content_type.clone().unwrap_or_default(),
            genres: genres_of(title),
            year: title.year.value(),
            decade: decade_of(title),
            platforms: platforms_of(title),
            duration: or_placeholder(title.duration.as_deref()),
            seasons: or_placeholder(title.seasons.as_deref()),
            description: title.description.clone().unwrap_or_default(),
        }
    }

    /// Year as text, empty when unknown.
    pub fn year_text(&self) -> String {
        self.year.map(|year| year.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cine_model::Year;

    #[test]
    fn placeholder_triggers() {
        for value in ["", "  ", "0", "nan", "NaN", "none", "None", "NONE"] {
            assert!(is_placeholder_value(value), "{value:?}");
        }
        for value in ["90 min", "1 Season", "00", "null"] {
            assert!(!is_placeholder_value(value), "{value:?}");
        }
    }

    #[test]
    fn view_fills_placeholders_and_facets() {
        let title = Title {
            title: Some("Inception".to_string()),
            content_type: Some("Movie".to_string()),
            genre: Some("Sci-Fi, Thriller".to_string()),
            year: Year::Known(2010),
            duration: Some("148 min".to_string()),
            seasons: Some("nan".to_string()),
            ..Title::default()
        };
        let view = TitleView::new(&title, &DisplayConfig::default());
        assert_eq!(view.title, "Inception");
        assert_eq!(view.genres, vec!["Sci-Fi", "Thriller"]);
        assert_eq!(view.year_text(), "2010");
        assert_eq!(view.decade, "2010s");
        assert_eq!(view.duration, "148 min");
        assert_eq!(view.seasons, "—");
        assert_eq!(view.description, "");
    }

    #[test]
    fn missing_name_uses_untitled_label() {
        let view = TitleView::new(&Title::default(), &DisplayConfig::default());
        assert_eq!(view.title, "(Untitled)");
        assert_eq!(view.duration, "—");
        assert_eq!(view.year_text(), "");
    }
}
