//! Element-wise operations over same-named columns of two tables
//!
//! Every operation first checks that both tables hold the same number of
//! entries for the column, then computes element `i` from element `i` of each
//! side only. Any failure discards the whole result.

use tracing::debug;

use crate::error::TransformError;
use crate::model::Table;

/// Two tables whose same-named columns are combined pairwise.
/// `left` is always the first operand.
#[derive(Debug, Clone, Copy)]
pub struct SeriesPair<'a> {
    pub left: &'a Table,
    pub right: &'a Table,
}

impl<'a> SeriesPair<'a> {
    pub fn new(left: &'a Table, right: &'a Table) -> Self {
        Self { left, right }
    }

    /// `left[i] * right[i]` for every position of `column`
    pub fn multiply(&self, column: &str) -> Result<Vec<i64>, TransformError> {
        self.integers(column, |a, b, index| {
            a.checked_mul(b).ok_or_else(|| TransformError::Overflow {
                column: column.to_string(),
                index,
            })
        })
    }

    /// `left[i] / right[i]`, truncating toward zero
    pub fn divide(&self, column: &str) -> Result<Vec<i64>, TransformError> {
        self.integers(column, |a, b, index| {
            if b == 0 {
                return Err(TransformError::DivisionByZero {
                    column: column.to_string(),
                    index,
                });
            }
            a.checked_div(b).ok_or_else(|| TransformError::Overflow {
                column: column.to_string(),
                index,
            })
        })
    }

    /// `left[i] + " " + right[i]`
    pub fn concatenate(&self, column: &str) -> Result<Vec<String>, TransformError> {
        let len = self.checked_len(column)?;
        let result = (0..len)
            .map(|index| {
                match (self.left.text_at(column, index), self.right.text_at(column, index)) {
                    (Some(a), Some(b)) => Ok(format!("{a} {b}")),
                    _ => Err(null_operand(column, index)),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(column, len, "concatenated");
        Ok(result)
    }

    fn integers<F>(&self, column: &str, op: F) -> Result<Vec<i64>, TransformError>
    where
        F: Fn(i64, i64, usize) -> Result<i64, TransformError>,
    {
        let len = self.checked_len(column)?;
        let result = (0..len)
            .map(|index| {
                match (
                    self.left.integer_at(column, index),
                    self.right.integer_at(column, index),
                ) {
                    (Some(a), Some(b)) => op(a, b, index),
                    _ => Err(null_operand(column, index)),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(column, len, "integer series combined");
        Ok(result)
    }

    fn checked_len(&self, column: &str) -> Result<usize, TransformError> {
        let left = self.left.length(column);
        let right = self.right.length(column);
        if left != right {
            return Err(TransformError::LengthMismatch {
                column: column.to_string(),
                left,
                right,
            });
        }
        Ok(left)
    }
}

fn null_operand(column: &str, index: usize) -> TransformError {
    TransformError::NullOperand {
        column: column.to_string(),
        index,
    }
}
