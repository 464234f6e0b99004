//! sheetpair - Paired-series transforms over schema-validated spreadsheets
//!
//! Parses two spreadsheet documents against a shared [`model::TableSchema`],
//! combines same-named columns element by element and reports the results
//! to a remote collector as JSON.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod transform;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{Column, ColumnType, Table, TableSchema};
pub use transform::SeriesPair;
