use crate::{map::Slot, stmt::Value, Error, Result};

use std::{collections::VecDeque, fmt::Debug};

/// Pull-based access to the rows of an executed statement.
///
/// Dropping a row set releases whatever cursor backs it.
pub trait RowSet: Debug + Send {
    /// Column names in result order.
    fn columns(&self) -> &[String];

    /// Total number of rows, if the driver knows it up front.
    fn row_count(&self) -> Option<usize> {
        None
    }

    /// Returns the next row's values in column order, or `None` when the
    /// result is exhausted.
    fn next_row(&mut self) -> Result<Option<Vec<Value>>>;

    /// Fills `slots` from the next row and advances.
    ///
    /// Returns `false` once the rows are exhausted. `slots` must be aligned
    /// 1:1 with [`RowSet::columns`]; discarded slots read and drop their value.
    fn scan(&mut self, slots: &mut [Slot<'_>]) -> Result<bool> {
        let Some(row) = self.next_row()? else {
            return Ok(false);
        };

        if row.len() != slots.len() {
            let position = row.len().min(slots.len());
            let column = self.columns().get(position).cloned().unwrap_or_default();
            return Err(crate::err!(
                "row has {} values but {} slots were bound",
                row.len(),
                slots.len()
            )
            .context(Error::column_scan(column, position)));
        }

        for (position, (slot, value)) in slots.iter_mut().zip(row).enumerate() {
            if let Err(err) = slot.fill(value) {
                let column = self
                    .columns()
                    .get(position)
                    .cloned()
                    .unwrap_or_default();
                return Err(err.context(Error::column_scan(column, position)));
            }
        }

        Ok(true)
    }
}

/// A fully buffered [`RowSet`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRows {
    columns: Vec<String>,
    rows: VecDeque<Vec<Value>>,
    total: usize,
}

impl ValueRows {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self {
            columns,
            total: rows.len(),
            rows: rows.into(),
        }
    }

    /// A result with columns but no rows.
    pub fn empty(columns: Vec<String>) -> Self {
        Self::new(columns, vec![])
    }

    /// Rows not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl RowSet for ValueRows {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn row_count(&self) -> Option<usize> {
        Some(self.total)
    }

    fn next_row(&mut self) -> Result<Option<Vec<Value>>> {
        Ok(self.rows.pop_front())
    }
}
