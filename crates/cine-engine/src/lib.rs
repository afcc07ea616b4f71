//! Faceted filtering over a streaming-title catalog.
//!
//! # Overview
//!
//! - **Normalization**: turn CSV rows into typed [`Title`] records
//!   (year coercion, type casing)
//! - **Facets**: derive decade, platform list and genre list on demand
//! - **Filtering**: AND-combined matching over type, genre, decade and platform
//! - **Options**: distinct values for one axis given the other active filters
//!
//! # Example
//!
//! ```ignore
//! use cine_engine::Catalog;
//! use cine_model::{Axis, Query};
//!
//! let catalog = Catalog::load(Path::new("cleaned_streaming_titles_final.csv"))?;
//! let query = Query::new().with_platform("Hulu");
//! let genres = catalog.available_values(&query, Axis::Genre);
//! let hits = catalog.filter(&query.with_genre("Comedy"));
//! ```
//!
//! # Design Principles
//!
//! - **Load once**: a [`Catalog`] is built in one step and never mutated
//! - **Stateless functions**: facets, filters and options are pure
//! - **Absent is not an error**: a missing column contributes nothing

mod catalog;
mod config;
mod display;
mod facets;
mod filter;
mod normalize;
mod options;

pub use catalog::Catalog;
pub use config::DisplayConfig;
pub use display::{TitleView, is_placeholder_value};
pub use facets::{
    decade_label, decade_of, genres_of, platform_labels, platforms_of, split_genres,
};
pub use filter::{filter, matches};
pub use normalize::{canonical_type, coerce_year, normalize_row, normalize_title};
pub use options::{available_values, axis_values};

pub use cine_model::{Axis, FieldMap, LogicalField, Platform, Query, Title, Year};
