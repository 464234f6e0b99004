//! Document loaders for spreadsheet formats

mod csv;
mod excel;

use std::path::Path;

use tracing::debug;

use crate::error::LoadError;
use crate::model::Document;

pub use self::csv::CsvLoader;
pub use self::excel::ExcelLoader;

/// Trait for reading a source file into a [`Document`]
pub trait DocumentLoader: Send + Sync {
    /// Read one sheet of the file at `path`
    fn load(&self, path: &Path, sheet_name: Option<&str>) -> Result<Document, LoadError>;

    /// Check if this loader can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Factory for choosing a loader based on file extension
pub struct LoaderFactory {
    loaders: Vec<Box<dyn DocumentLoader>>,
}

impl Default for LoaderFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LoaderFactory {
    /// Create a new factory with all supported loaders
    pub fn new() -> Self {
        Self {
            loaders: vec![Box::new(ExcelLoader), Box::new(CsvLoader)],
        }
    }

    /// Get a loader for the given file path
    pub fn get_loader(&self, path: &Path) -> Result<&dyn DocumentLoader, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        self.loaders
            .iter()
            .find(|loader| loader.supports_extension(&ext))
            .map(|loader| loader.as_ref())
            .ok_or_else(|| {
                LoadError::UnsupportedFormat(if ext.is_empty() {
                    path.display().to_string()
                } else {
                    ext
                })
            })
    }

    /// Load a file using the appropriate loader
    pub fn load(&self, path: &Path, sheet_name: Option<&str>) -> Result<Document, LoadError> {
        let document = self.get_loader(path)?.load(path, sheet_name)?;
        debug!(path = %path.display(), rows = document.row_count(), "document loaded");
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_selection() {
        let factory = LoaderFactory::new();
        assert!(factory.get_loader(Path::new("Data1.xlsx")).is_ok());
        assert!(factory.get_loader(Path::new("Data1.XLSX")).is_ok());
        assert!(factory.get_loader(Path::new("data.csv")).is_ok());
        assert!(matches!(
            factory.get_loader(Path::new("data.parquet")),
            Err(LoadError::UnsupportedFormat(ext)) if ext == "parquet"
        ));
        assert!(matches!(
            factory.get_loader(Path::new("noext")),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }
}
