//! CSV file reading into an in-memory table.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ::csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};

use super::header::normalize_header;

/// Maximum file size for CSV loading (100 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Parsed CSV: a header row plus data rows in file order.
///
/// Rows may be shorter than the header; missing trailing cells read as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `row`/`column`, if the row has that many cells.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::io(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::io(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| IngestError::io(path, e))?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped from the first header)
    Ok(())
}

/// Read a CSV file with a single header row.
///
/// An empty file or a file with only a header row is a valid, empty table.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    let origin = path.display().to_string();
    let table = read_table(file, &origin)?;
    info!(
        path = %origin,
        rows = table.len(),
        columns = table.headers.len(),
        "loaded catalog CSV"
    );
    Ok(table)
}

/// Parse CSV text that is already in memory.
pub fn parse_csv_str(text: &str) -> Result<CsvTable> {
    read_table(text.as_bytes(), "<memory>")
}

fn read_table<R: Read>(input: R, origin: &str) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::csv(origin, e))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    loop {
        match reader.read_record(&mut record) {
            Ok(true) => rows.push(record.iter().map(str::to_string).collect()),
            Ok(false) => break,
            Err(e) => return Err(IngestError::csv(origin, e)),
        }
    }

    if headers.is_empty() {
        warn!(origin, "CSV has no header row");
    } else if rows.is_empty() {
        warn!(origin, columns = headers.len(), "CSV appears empty");
    } else {
        debug!(origin, rows = rows.len(), "parsed CSV records");
    }

    Ok(CsvTable { headers, rows })
}
