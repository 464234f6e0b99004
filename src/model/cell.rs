//! Raw cells and documents as produced by a loader

/// Raw value of one source cell, before coercion to a column type
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
    /// Spreadsheet error value such as a division by zero
    Error(String),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Textual content, if the cell holds text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(f: f64) -> Self {
        Cell::Number(f)
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        Cell::Number(i as f64)
    }
}

impl<T> From<Option<T>> for Cell
where
    T: Into<Cell>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Cell::Empty,
        }
    }
}

/// One sheet of a source document: rows of cells in document order.
///
/// A cell's index within its row is its column position. Rows may have
/// different lengths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub rows: Vec<Vec<Cell>>,
    /// 0-based index of `rows[0]` within the source file
    pub origin_row: usize,
}

impl Document {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self {
            rows,
            origin_row: 0,
        }
    }

    pub fn with_origin_row(mut self, origin_row: usize) -> Self {
        self.origin_row = origin_row;
        self
    }

    /// 1-based row number in the source file for `rows[index]`
    pub fn row_number(&self, index: usize) -> usize {
        self.origin_row + index + 1
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Position of the first non-empty cell in a row
pub(crate) fn first_occupied(row: &[Cell]) -> Option<usize> {
    row.iter().position(|c| !c.is_empty())
}

/// Position of the last non-empty cell in a row
pub(crate) fn last_occupied(row: &[Cell]) -> Option<usize> {
    row.iter().rposition(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupied_span() {
        let row = vec![Cell::Empty, Cell::from("a"), Cell::Empty, Cell::from(3.0), Cell::Empty];
        assert_eq!(first_occupied(&row), Some(1));
        assert_eq!(last_occupied(&row), Some(3));
        assert_eq!(first_occupied(&[Cell::Empty]), None);
        assert_eq!(last_occupied(&[]), None);
    }

    #[test]
    fn test_row_number_uses_origin() {
        let doc = Document::new(vec![vec![], vec![]]).with_origin_row(4);
        assert_eq!(doc.row_number(0), 5);
        assert_eq!(doc.row_number(1), 6);
    }
}
