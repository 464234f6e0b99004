//! Wire format of the report sent to the collector

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Flat JSON object with the three computed series.
///
/// Field order and key names are part of the collector's contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub id: String,
    pub number_set_one: Vec<i64>,
    pub number_set_two: Vec<i64>,
    pub word_set_one: Vec<String>,
}

impl Payload {
    /// Serialize to compact JSON
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
