//! Data model for the streaming catalog filter.
//!
//! The types here carry no I/O: the ingest crate fills a [`FieldMap`] from
//! CSV headers, and the engine builds [`Title`] records and answers
//! [`Query`] values against them.

pub mod error;
pub mod field;
pub mod platform;
pub mod query;
pub mod title;

pub use error::{ModelError, Result};
pub use field::{FieldMap, LogicalField, ResolvedColumn};
pub use platform::Platform;
pub use query::{Axis, Query};
pub use title::{Title, Year};
