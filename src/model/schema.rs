//! Column declarations and their data types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Declared data kind of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Text,
    Integer,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Text => write!(f, "text"),
            ColumnType::Integer => write!(f, "integer"),
        }
    }
}

/// Write-once mapping from column name to [`ColumnType`].
///
/// Built before any table is parsed and only read afterwards. Declaration
/// order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSchema {
    columns: IndexMap<String, ColumnType>,
}

impl TableSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a column, returning `false` without changing anything if the
    /// name is empty or already declared.
    pub fn add(&mut self, name: impl Into<String>, column_type: ColumnType) -> bool {
        self.try_add(name, column_type).is_ok()
    }

    /// Declare a column, reporting why a declaration was rejected
    pub fn try_add(
        &mut self,
        name: impl Into<String>,
        column_type: ColumnType,
    ) -> Result<(), SchemaError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SchemaError::EmptyName);
        }
        if self.columns.contains_key(&name) {
            return Err(SchemaError::Duplicate(name));
        }
        self.columns.insert(name, column_type);
        Ok(())
    }

    /// Chainable form of [`TableSchema::try_add`]
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        column_type: ColumnType,
    ) -> Result<Self, SchemaError> {
        self.try_add(name, column_type)?;
        Ok(self)
    }

    /// Declared type of `name`, if any
    pub fn type_of(&self, name: &str) -> Option<ColumnType> {
        if name.is_empty() {
            return None;
        }
        self.columns.get(name).copied()
    }

    /// Declared columns in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, ColumnType)> {
        self.columns.iter().map(|(name, ty)| (name.as_str(), *ty))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
