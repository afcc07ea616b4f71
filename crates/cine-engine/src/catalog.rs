//! The loaded, immutable catalog.

use std::path::Path;

use cine_ingest::{CsvTable, build_field_map, parse_csv_str, read_csv_table};
use cine_model::{Axis, FieldMap, LogicalField, Query, Title};
use tracing::{debug, info, info_span, trace};

use crate::normalize::normalize_row;
use crate::{filter, options};

/// Field map plus normalized titles, built in one step.
///
/// Nothing mutates a catalog after construction; every query borrows it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    fields: FieldMap,
    titles: Vec<Title>,
}

impl Catalog {
    /// A catalog with no fields and no titles.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve fields from the table header and normalize every row.
    pub fn from_table(table: &CsvTable) -> Self {
        let span = info_span!("normalize", rows = table.len());
        let _guard = span.enter();

        let fields = build_field_map(&table.headers);
        let absent = fields.absent();
        if !absent.is_empty() {
            let names: Vec<&str> = absent.iter().map(LogicalField::as_str).collect();
            debug!(absent = %names.join(", "), "some fields have no matching column");
        }

        let titles: Vec<Title> = table
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let title = normalize_row(row, &fields);
                if !title.year.is_known() {
                    trace!(row = index, "year unknown");
                }
                title
            })
            .collect();

        info!(
            titles = titles.len(),
            fields = fields.len(),
            "catalog ready"
        );
        Self { fields, titles }
    }

    /// Load a catalog CSV from disk.
    pub fn load(path: &Path) -> cine_ingest::Result<Self> {
        read_csv_table(path).map(|table| Self::from_table(&table))
    }

    /// Build a catalog from CSV text.
    pub fn from_csv_str(text: &str) -> cine_ingest::Result<Self> {
        parse_csv_str(text).map(|table| Self::from_table(&table))
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Titles matching `query`, in catalog order.
    pub fn filter(&self, query: &Query) -> Vec<&Title> {
        filter::filter(&self.titles, query)
    }

    /// Sorted distinct values for `axis` under the other active filters.
    pub fn available_values(&self, query: &Query, axis: Axis) -> Vec<String> {
        options::available_values(&self.titles, query, axis)
    }
}
