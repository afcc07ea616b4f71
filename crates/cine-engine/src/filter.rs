//! AND-combined facet filtering.

use cine_model::{Axis, Query, Title};
use tracing::debug;

use crate::facets::{decade_of, genres_of, platform_labels};

/// Returns true when the title satisfies every set axis of the query.
pub fn matches(title: &Title, query: &Query) -> bool {
    Axis::ALL.into_iter().all(|axis| match query.get(axis) {
        Some(wanted) => matches_axis(title, axis, wanted),
        None => true,
    })
}

fn matches_axis(title: &Title, axis: Axis, wanted: &str) -> bool {
    match axis {
        Axis::Type => title
            .content_type
            .as_deref()
            .is_some_and(|value| value.trim().to_lowercase() == wanted.to_lowercase()),
        Axis::Genre => {
            let wanted = wanted.to_lowercase();
            genres_of(title)
                .iter()
                .any(|genre| genre.to_lowercase() == wanted)
        }
        // Decades are compared verbatim.
        Axis::Decade => decade_of(title) == wanted,
        Axis::Platform => {
            let wanted = wanted.to_lowercase();
            platform_labels(title)
                .iter()
                .any(|label| label.to_lowercase() == wanted)
        }
    }
}

/// Titles matching the query, in their original order.
///
/// The result is never truncated; display caps are applied by the caller.
pub fn filter<'a>(titles: &'a [Title], query: &Query) -> Vec<&'a Title> {
    let matched: Vec<&Title> = titles
        .iter()
        .filter(|title| matches(title, query))
        .collect();
    debug!(
        query = %query,
        matched = matched.len(),
        total = titles.len(),
        "filtered titles"
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use cine_model::{Platform, Year};

    fn title(content_type: &str, genre: &str, year: Year, platform: Platform) -> Title {
        let mut title = Title {
            content_type: Some(content_type.to_string()),
            genre: Some(genre.to_string()),
            year,
            ..Title::default()
        };
        title.flags.insert(platform, "1".to_string());
        title
    }

    #[test]
    fn wildcard_matches_everything() {
        let t = title("Movie", "Drama", Year::Unknown, Platform::Hulu);
        assert!(matches(&t, &Query::new()));
    }

    #[test]
    fn type_is_case_insensitive_exact() {
        let t = title("TV Show", "Drama", Year::Known(2001), Platform::Hulu);
        assert!(matches(&t, &Query::new().with_type("tv show")));
        assert!(!matches(&t, &Query::new().with_type("TV")));
        assert!(!matches(&Title::default(), &Query::new().with_type("Movie")));
    }

    #[test]
    fn genre_matches_whole_elements_only() {
        let t = title("Movie", "Action, Science Fiction", Year::Known(2001), Platform::Hulu);
        assert!(matches(&t, &Query::new().with_genre("science fiction")));
        assert!(!matches(&t, &Query::new().with_genre("Science")));
        assert!(!matches(&t, &Query::new().with_genre("Act")));
    }

    #[test]
    fn decade_excludes_unknown_years() {
        let known = title("Movie", "Drama", Year::Known(1994), Platform::Hulu);
        let unknown = title("Movie", "Drama", Year::Unknown, Platform::Hulu);
        let query = Query::new().with_decade("1990s");
        assert!(matches(&known, &query));
        assert!(!matches(&unknown, &query));
        assert!(!matches(&known, &Query::new().with_decade("1990S")));
    }

    #[test]
    fn platform_is_membership_not_substring() {
        let mut t = title("Movie", "Drama", Year::Known(1994), Platform::Netflix);
        t.flags.insert(Platform::AmazonPrime, "1".to_string());
        assert!(matches(&t, &Query::new().with_platform("amazon prime")));
        assert!(matches(&t, &Query::new().with_platform("NETFLIX")));
        assert!(!matches(&t, &Query::new().with_platform("Amazon")));
        assert!(!matches(&t, &Query::new().with_platform("Hulu")));
    }

    #[test]
    fn filter_keeps_input_order() {
        let titles = vec![
            title("Movie", "Drama", Year::Known(1994), Platform::Hulu),
            title("TV Show", "Drama", Year::Known(1995), Platform::Netflix),
            title("Movie", "Comedy", Year::Known(1996), Platform::Hulu),
        ];
        let hits = filter(&titles, &Query::new().with_platform("Hulu"));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].year, Year::Known(1994));
        assert_eq!(hits[1].year, Year::Known(1996));
    }

    #[test]
    fn empty_catalog_gives_empty_result() {
        assert!(filter(&[], &Query::new().with_genre("Drama")).is_empty());
        assert!(filter(&[], &Query::new()).is_empty());
    }
}
