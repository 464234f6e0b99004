//! CSV file loader

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::LoadError;
use crate::model::{Cell, Document};

use super::DocumentLoader;

/// Loader for delimited text files. Every non-empty field is loaded as text.
pub struct CsvLoader;

impl DocumentLoader for CsvLoader {
    fn load(&self, path: &Path, _sheet_name: Option<&str>) -> Result<Document, LoadError> {
        let file = File::open(path)?;
        let delimiter = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
            _ => b',',
        };
        read_document(BufReader::new(file), delimiter)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "csv" | "tsv" | "txt")
    }
}

fn read_document<R: Read>(reader: R, delimiter: u8) -> Result<Document, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        rows.push(record.iter().map(parse_field).collect());
    }
    Ok(Document::new(rows))
}

fn parse_field(s: &str) -> Cell {
    if s.is_empty() {
        Cell::Empty
    } else {
        Cell::Text(s.to_string())
    }
}
