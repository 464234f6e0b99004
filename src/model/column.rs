//! Typed column storage and per-cell coercion

use super::cell::Cell;
use super::schema::ColumnType;

/// Values of a column. Missing source cells are kept as `None` so that
/// positions stay aligned with the rows they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ColumnValues {
    Text(Vec<Option<String>>),
    Integer(Vec<Option<i64>>),
}

/// Why a cell could not be coerced into a column's type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionError {
    pub raw: String,
    pub message: String,
}

/// A named, typed series parsed from one spreadsheet column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    values: ColumnValues,
}

impl Column {
    /// Create an empty column of the given type
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        let values = match column_type {
            ColumnType::Text => ColumnValues::Text(Vec::new()),
            ColumnType::Integer => ColumnValues::Integer(Vec::new()),
        };
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> ColumnType {
        match self.values {
            ColumnValues::Text(_) => ColumnType::Text,
            ColumnValues::Integer(_) => ColumnType::Integer,
        }
    }

    /// Number of entries, including "no value" entries
    pub fn len(&self) -> usize {
        match &self.values {
            ColumnValues::Text(v) => v.len(),
            ColumnValues::Integer(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coerce `cell` to this column's type and append it
    pub fn push(&mut self, cell: &Cell) -> Result<(), CoercionError> {
        match &mut self.values {
            ColumnValues::Text(v) => v.push(coerce_text(cell)?),
            ColumnValues::Integer(v) => v.push(coerce_integer(cell)?),
        }
        Ok(())
    }

    /// Text at `index`; `None` for integer columns, gaps and out-of-range positions
    pub fn text_at(&self, index: usize) -> Option<&str> {
        match &self.values {
            ColumnValues::Text(v) => v.get(index).and_then(|s| s.as_deref()),
            ColumnValues::Integer(_) => None,
        }
    }

    /// Integer at `index`; `None` for text columns, gaps and out-of-range positions
    pub fn integer_at(&self, index: usize) -> Option<i64> {
        match &self.values {
            ColumnValues::Integer(v) => v.get(index).copied().flatten(),
            ColumnValues::Text(_) => None,
        }
    }
}

fn coerce_text(cell: &Cell) -> Result<Option<String>, CoercionError> {
    match cell {
        Cell::Empty => Ok(None),
        Cell::Text(s) => Ok(Some(s.clone())),
        Cell::Number(f) => Ok(Some(format_number(*f))),
        Cell::Error(code) => Err(error_cell(code)),
    }
}

fn coerce_integer(cell: &Cell) -> Result<Option<i64>, CoercionError> {
    match cell {
        Cell::Empty => Ok(None),
        // `as` truncates toward zero and saturates at the i64 bounds
        Cell::Number(f) => Ok(Some(*f as i64)),
        Cell::Text(s) => s.parse::<i64>().map(Some).map_err(|e| CoercionError {
            raw: s.clone(),
            message: e.to_string(),
        }),
        Cell::Error(code) => Err(error_cell(code)),
    }
}

fn error_cell(code: &str) -> CoercionError {
    CoercionError {
        raw: code.to_string(),
        message: "cell holds a spreadsheet error".to_string(),
    }
}

/// Render a spreadsheet number the way the source documents' numeric text
/// convention does: `7` becomes `"7.0"`, very large or small magnitudes use
/// `E` notation with a fractional mantissa (`1.0E7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if value == 0.0 || (1e-3..1e7).contains(&magnitude) {
        let s = value.to_string();
        if s.contains('.') {
            s
        } else {
            format!("{s}.0")
        }
    } else {
        let s = format!("{value:E}");
        match s.split_once('E') {
            Some((mantissa, exponent)) if !mantissa.contains('.') => {
                format!("{mantissa}.0E{exponent}")
            }
            _ => s,
        }
    }
}
