//! Data model for schema-validated tabular data

mod cell;
mod column;
mod schema;
mod table;

pub use cell::{Cell, Document};
pub use column::{format_number, CoercionError, Column};
pub use schema::{ColumnType, TableSchema};
pub use table::Table;
