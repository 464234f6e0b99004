//! Excel file loader (xlsx, xls, ods)

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::error::LoadError;
use crate::model::{Cell, Document};

use super::DocumentLoader;

/// Loader for Excel workbooks
pub struct ExcelLoader;

impl DocumentLoader for ExcelLoader {
    fn load(&self, path: &Path, sheet_name: Option<&str>) -> Result<Document, LoadError> {
        let mut workbook = open_workbook_auto(path)?;

        let sheet_name = match sheet_name {
            Some(name) => {
                if !workbook.sheet_names().iter().any(|s| s == name) {
                    return Err(LoadError::SheetNotFound(name.to_string()));
                }
                name.to_string()
            }
            // Use first sheet
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or(LoadError::NoSheets)?,
        };

        let range: Range<Data> = workbook.worksheet_range(&sheet_name)?;
        Ok(range_to_document(&range))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "xlsx" | "xls" | "xlsb" | "ods" | "xlsm")
    }
}

/// Rows of the used range. Positions are relative to the range's first column.
fn range_to_document(range: &Range<Data>) -> Document {
    let origin_row = range.start().map_or(0, |(r, _)| r as usize);
    let rows = range
        .rows()
        .map(|row| row.iter().map(convert_cell).collect::<Vec<_>>())
        .collect();

    Document::new(rows).with_origin_row(origin_row)
}

fn convert_cell(cell: &Data) -> Cell {
    match cell {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        // Excel stores dates as serial day numbers
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::Error(e) => Cell::Error(format!("#{:?}", e)),
    }
}

#[cfg(test)]
mod tests {
    use calamine::CellErrorType;

    use super::*;
    use crate::model::{ColumnType, Table, TableSchema};

    #[test]
    fn test_convert_cell() {
        assert_eq!(convert_cell(&Data::Empty), Cell::Empty);
        assert_eq!(convert_cell(&Data::Float(2.5)), Cell::Number(2.5));
        assert_eq!(convert_cell(&Data::Int(4)), Cell::Number(4.0));
        assert_eq!(
            convert_cell(&Data::String("foo".to_string())),
            Cell::Text("foo".to_string())
        );
        assert_eq!(convert_cell(&Data::Bool(true)), Cell::Text("true".to_string()));
        assert_eq!(
            convert_cell(&Data::Error(CellErrorType::Div0)),
            Cell::Error("#Div0".to_string())
        );
    }

    fn range(cells: &[Vec<Data>]) -> Range<Data> {
        let height = cells.len() as u32;
        let width = cells.iter().map(Vec::len).max().unwrap_or(1) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                range.set_value((r as u32, c as u32), cell.clone());
            }
        }
        range
    }

    fn schema() -> TableSchema {
        TableSchema::new()
            .with_column("numberSetOne", ColumnType::Integer)
            .unwrap()
    }

    #[test]
    fn test_error_cell_in_undeclared_column_is_skipped() {
        let range = range(&[
            vec![Data::String("numberSetOne".into()), Data::String("notes".into())],
            vec![Data::Float(1.0), Data::Error(CellErrorType::Div0)],
            vec![Data::Float(2.0), Data::String("fine".into())],
        ]);

        let table = Table::from_document(&range_to_document(&range), &schema()).unwrap();
        assert_eq!(table.length("numberSetOne"), 2);
        assert_eq!(table.integer_at("numberSetOne", 1), Some(2));
    }

    #[test]
    fn test_error_cell_in_declared_column_fails() {
        let range = range(&[
            vec![Data::String("numberSetOne".into())],
            vec![Data::Float(1.0)],
            vec![Data::Error(CellErrorType::NA)],
        ]);

        let err = Table::from_document(&range_to_document(&range), &schema()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::TableError::Parse { row: 3, ref raw, .. } if raw == "#NA"
        ));
    }
}
