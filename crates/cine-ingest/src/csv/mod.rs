//! CSV reading utilities.

mod header;
mod reader;

pub use header::normalize_header;
pub use reader::{
    CsvTable, MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, parse_csv_str,
    read_csv_table, validate_encoding,
};
