//! Property tests for normalization and filtering.

use std::collections::BTreeMap;

use proptest::prelude::*;

use cine_engine::{
    Axis, Platform, Query, Title, Year, canonical_type, coerce_year, filter, normalize_title,
};

fn arb_year() -> impl Strategy<Value = Year> {
    prop_oneof![
        Just(Year::Unknown),
        (1920u64..2030).prop_map(Year::Known),
    ]
}

fn arb_type() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop::sample::select(vec![
        "Movie", "movie ", "MOVIE", "TV Show", "tv_show", "TV Series", "Documentary", " Short",
    ]))
    .prop_map(|value| value.map(str::to_string))
}

fn arb_genre() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop::sample::subsequence(
        vec!["Action", "Drama", "Comedy", "Horror", "Sci-Fi"],
        0..4,
    ))
    .prop_map(|genres| genres.map(|genres| genres.join(", ")))
}

fn arb_flags() -> impl Strategy<Value = BTreeMap<Platform, String>> {
    prop::collection::btree_map(
        prop::sample::select(Platform::PRIORITY.to_vec()),
        prop::sample::select(vec!["0", "1", " 1 ", ""]).prop_map(str::to_string),
        0..4,
    )
}

prop_compose! {
    fn arb_title()(
        content_type in arb_type(),
        genre in arb_genre(),
        year in arb_year(),
        flags in arb_flags(),
    ) -> Title {
        normalize_title(Title {
            title: Some("t".to_string()),
            content_type,
            genre,
            year,
            flags,
            ..Title::default()
        })
    }
}

fn arb_query() -> impl Strategy<Value = Query> {
    (
        proptest::option::of(prop::sample::select(vec!["Movie", "tv show", "Documentary"])),
        proptest::option::of(prop::sample::select(vec!["drama", "Action", "Sci-Fi"])),
        proptest::option::of(prop::sample::select(vec!["1990s", "2000s", "2010s"])),
        proptest::option::of(prop::sample::select(vec!["Netflix", "hulu", "Disney+"])),
    )
        .prop_map(|(content_type, genre, decade, platform)| {
            Query::new()
                .with(Axis::Type, content_type)
                .with(Axis::Genre, genre)
                .with(Axis::Decade, decade)
                .with(Axis::Platform, platform)
        })
}

proptest! {
    #[test]
    fn normalization_is_idempotent(title in arb_title()) {
        prop_assert_eq!(normalize_title(title.clone()), title);
    }

    #[test]
    fn canonical_type_is_idempotent(raw in ".{0,12}") {
        let once = canonical_type(&raw);
        prop_assert_eq!(canonical_type(&once), once);
    }

    #[test]
    fn year_coercion_never_panics(raw in ".{0,24}") {
        let year = coerce_year(Some(&raw));
        if let Year::Known(value) = year {
            let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
            prop_assert_eq!(digits.parse::<u64>().ok(), Some(value));
        }
    }

    #[test]
    fn wildcard_is_identity(titles in prop::collection::vec(arb_title(), 0..20)) {
        let hits = filter(&titles, &Query::new());
        prop_assert_eq!(hits.len(), titles.len());
        for (hit, title) in hits.iter().zip(&titles) {
            prop_assert!(std::ptr::eq(*hit, title));
        }
    }

    #[test]
    fn axes_intersect(
        titles in prop::collection::vec(arb_title(), 0..20),
        query in arb_query(),
    ) {
        let combined = filter(&titles, &query);
        for axis in query.active_axes() {
            let single = Query::new().with(axis, query.get(axis));
            let alone = filter(&titles, &single);
            for hit in &combined {
                prop_assert!(alone.iter().any(|other| std::ptr::eq(*other, *hit)));
            }
        }
    }

    #[test]
    fn options_are_sorted_and_distinct(
        titles in prop::collection::vec(arb_title(), 0..20),
        query in arb_query(),
    ) {
        for axis in Axis::ALL {
            let values = cine_engine::available_values(&titles, &query, axis);
            prop_assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert!(values.iter().all(|value| !value.is_empty()));
        }
    }
}
