//! Table parsing and positional access

use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::TableError;
use crate::parser::LoaderFactory;

use super::cell::{first_occupied, last_occupied, Cell, Document};
use super::column::Column;
use super::schema::TableSchema;

/// Columns parsed from one document against a [`TableSchema`].
///
/// Only declared columns that appear in the header row are present. Columns
/// are not required to have equal lengths: a row that ends before a column's
/// position contributes nothing to it.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: IndexMap<String, Column>,
}

impl Table {
    /// Load the document at `path` and parse it against `schema`
    pub fn from_path(
        path: &Path,
        schema: &TableSchema,
        sheet_name: Option<&str>,
    ) -> Result<Self, TableError> {
        let document = LoaderFactory::new().load(path, sheet_name)?;
        let table = Self::from_document(&document, schema)?;
        debug!(path = %path.display(), columns = table.column_count(), "table parsed");
        Ok(table)
    }

    /// Parse a document whose first row is the header row
    pub fn from_document(document: &Document, schema: &TableSchema) -> Result<Self, TableError> {
        let header = document.rows.first().ok_or(TableError::EmptyDocument)?;
        let first_column = first_occupied(header).ok_or(TableError::EmptyDocument)?;
        let last_header = last_occupied(header).unwrap_or(first_column);

        let mut columns: IndexMap<String, Column> = IndexMap::new();
        let mut first_seen: Vec<usize> = Vec::new();
        // position -> index into `columns`
        let mut positions: Vec<Option<usize>> = vec![None; last_header + 1];

        for (position, cell) in header.iter().enumerate().take(last_header + 1).skip(first_column) {
            let Some(name) = cell.as_text().filter(|name| !name.is_empty()) else {
                continue;
            };
            let Some(column_type) = schema.type_of(name) else {
                warn!(header = name, position, "ignoring undeclared column");
                continue;
            };
            if let Some(existing) = columns.get_index_of(name) {
                return Err(TableError::DuplicateHeader {
                    name: name.to_string(),
                    first: first_seen[existing],
                    second: position,
                });
            }
            let (index, _) = columns.insert_full(name.to_string(), Column::new(name, column_type));
            first_seen.push(position);
            positions[position] = Some(index);
        }

        debug!(
            declared = schema.len(),
            found = columns.len(),
            first_column,
            "header mapped"
        );

        for (row_index, row) in document.rows.iter().enumerate().skip(1) {
            let Some(last) = last_occupied(row) else {
                continue;
            };
            for position in first_column..=last {
                let Some(&Some(index)) = positions.get(position) else {
                    continue;
                };
                let column = &mut columns[index];
                let cell = row.get(position).unwrap_or(&Cell::Empty);
                column.push(cell).map_err(|e| TableError::Parse {
                    row: document.row_number(row_index),
                    column: column.name().to_string(),
                    raw: e.raw,
                    message: e.message,
                })?;
            }
        }

        for column in columns.values() {
            debug!(column = column.name(), length = column.len(), "column populated");
        }

        Ok(Self { columns })
    }

    /// Number of entries in the named column, or 0 if it is not present
    pub fn length(&self, name: &str) -> usize {
        self.columns.get(name).map_or(0, Column::len)
    }

    /// Text at `index` in the named text column
    pub fn text_at(&self, name: &str, index: usize) -> Option<&str> {
        self.columns.get(name)?.text_at(index)
    }

    /// Integer at `index` in the named integer column
    pub fn integer_at(&self, name: &str, index: usize) -> Option<i64> {
        self.columns.get(name)?.integer_at(index)
    }

    /// Get column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
