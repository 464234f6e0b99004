//! End-to-end computation of a report from two source documents

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::model::{ColumnType, Table, TableSchema};
use crate::report::Payload;
use crate::transform::SeriesPair;

/// The series read from both documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSeries {
    NumberSetOne,
    NumberSetTwo,
    WordSetOne,
}

impl DataSeries {
    pub const ALL: [DataSeries; 3] = [
        DataSeries::NumberSetOne,
        DataSeries::NumberSetTwo,
        DataSeries::WordSetOne,
    ];

    /// Header name of the series
    pub fn as_str(self) -> &'static str {
        match self {
            DataSeries::NumberSetOne => "numberSetOne",
            DataSeries::NumberSetTwo => "numberSetTwo",
            DataSeries::WordSetOne => "wordSetOne",
        }
    }

    pub fn column_type(self) -> ColumnType {
        match self {
            DataSeries::NumberSetOne | DataSeries::NumberSetTwo => ColumnType::Integer,
            DataSeries::WordSetOne => ColumnType::Text,
        }
    }
}

impl std::fmt::Display for DataSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schema declaring every [`DataSeries`]
pub fn series_schema() -> Result<TableSchema> {
    let mut schema = TableSchema::new();
    for series in DataSeries::ALL {
        schema.try_add(series.as_str(), series.column_type())?;
    }
    Ok(schema)
}

/// Combine two parsed tables into a report payload
pub fn build_payload(id: &str, first: &Table, second: &Table) -> Result<Payload> {
    let pair = SeriesPair::new(first, second);
    Ok(Payload {
        id: id.to_string(),
        number_set_one: pair.multiply(DataSeries::NumberSetOne.as_str())?,
        number_set_two: pair.divide(DataSeries::NumberSetTwo.as_str())?,
        word_set_one: pair.concatenate(DataSeries::WordSetOne.as_str())?,
    })
}

/// Load both documents named by `config` and compute the payload
pub fn compute(config: &Config) -> Result<Payload> {
    let schema = series_schema()?;
    let first = load(&config.first_file, &schema, config)?;
    let second = load(&config.second_file, &schema, config)?;

    let payload = build_payload(&config.id, &first, &second)?;
    info!(
        products = payload.number_set_one.len(),
        quotients = payload.number_set_two.len(),
        words = payload.word_set_one.len(),
        "payload computed"
    );
    Ok(payload)
}

fn load(path: &Path, schema: &TableSchema, config: &Config) -> Result<Table> {
    Ok(Table::from_path(path, schema, config.sheet_name.as_deref())?)
}
