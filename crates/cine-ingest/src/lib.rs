//! Catalog ingestion.
//!
//! Reads a streaming-catalog CSV into an in-memory [`CsvTable`] and maps
//! its headers onto logical fields.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use cine_ingest::{build_field_map, read_csv_table};
//!
//! let table = read_csv_table(Path::new("cleaned_streaming_titles_final.csv"))?;
//! let fields = build_field_map(&table.headers);
//! ```

mod csv;
mod error;
mod resolve;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{
    CsvTable, MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, normalize_header,
    parse_csv_str, read_csv_table, validate_encoding,
};

// === Field Resolution ===
pub use resolve::{build_field_map, resolve, resolve_index};
