use super::{Element, Scan, Slot};
use crate::schema::SchemaIndex;

/// Column-to-field plan for one result.
///
/// Resolved once from the result's column names, then reused to bind every
/// row's element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowBinder {
    /// Field position bound by each column, in column order
    positions: Vec<Option<usize>>,
}

impl RowBinder {
    /// Plans a record binding by matching each column against `index`.
    ///
    /// Unmatched columns are discarded. When several columns resolve to the
    /// same field only the first one is bound.
    pub fn new(columns: &[String], index: &SchemaIndex) -> Self {
        let mut claimed = vec![false; index.iter().map(|(_, p)| p + 1).max().unwrap_or(0)];
        let mut positions = Vec::with_capacity(columns.len());

        for column in columns {
            let position = index.get(column).filter(|&position| {
                let first = !claimed[position];
                claimed[position] = true;
                first
            });

            if position.is_none() {
                tracing::trace!(column = %column, "discarding column");
            }

            positions.push(position);
        }

        Self { positions }
    }

    /// Plans a positional binding: the first column fills the element, the
    /// rest are discarded.
    pub fn scalar(column_count: usize) -> Self {
        let positions = (0..column_count)
            .map(|column| (column == 0).then_some(0))
            .collect();

        Self { positions }
    }

    /// Number of columns, and therefore slots per row.
    pub fn width(&self) -> usize {
        self.positions.len()
    }

    /// Number of columns bound to a field.
    pub fn bound(&self) -> usize {
        self.positions.iter().filter(|p| p.is_some()).count()
    }

    /// Builds one slot per column pointing into `element`.
    pub fn bind<'a>(&self, element: &'a mut dyn Element) -> Vec<Slot<'a>> {
        let mut targets: Vec<Option<&'a mut dyn Scan>> =
            element.scan_targets().into_iter().map(Some).collect();

        let mut slots = Vec::with_capacity(self.positions.len());

        for position in &self.positions {
            let target = position
                .and_then(|position| targets.get_mut(position))
                .and_then(Option::take);

            slots.push(match target {
                Some(target) => Slot::Bound(target),
                None => Slot::Discard,
            });
        }

        slots
    }
}
