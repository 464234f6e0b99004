//! Error types shared across loading, parsing, transforming and reporting

use thiserror::Error;

/// Convenience result type for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Rejected column declaration.
///
/// Recovered locally by [`crate::model::TableSchema::add`], which reports it as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("column name must not be empty")]
    EmptyName,

    #[error("column '{0}' is already declared")]
    Duplicate(String),
}

/// The source document could not be opened or read.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("workbook has no sheets")]
    NoSheets,

    #[error("sheet '{0}' not found in workbook")]
    SheetNotFound(String),

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// A document could not be turned into a [`crate::model::Table`].
#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("document has no header row")]
    EmptyDocument,

    #[error("header '{name}' appears twice (columns {first} and {second})")]
    DuplicateHeader {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    Parse {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

/// A paired operation over two tables could not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("element count mismatch for '{column}': {left} vs {right}")]
    LengthMismatch {
        column: String,
        left: usize,
        right: usize,
    },

    #[error("missing operand for '{column}' at index {index}")]
    NullOperand { column: String, index: usize },

    #[error("division by zero for '{column}' at index {index}")]
    DivisionByZero { column: String, index: usize },

    #[error("integer overflow for '{column}' at index {index}")]
    Overflow { column: String, index: usize },
}

/// The report could not be built or sent.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("http client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Top-level error for a full run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Error::Table(TableError::Load(err))
    }
}
