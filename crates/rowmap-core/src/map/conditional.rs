use super::{Destination, DestinationKind, Element, IntoDestination, Shape};
use crate::{driver::Session, stmt::Statement, stmt::Value, Error, Result};

use indexmap::IndexMap;

/// Executes conditional writes and copies the returned row into a record.
#[derive(Debug, Clone, Default)]
pub struct ConditionalMapper {}

impl ConditionalMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes `stmt` as a conditional write and returns whether it was
    /// applied.
    ///
    /// The record is updated from the returned row whether or not the write
    /// was applied.
    pub async fn map<D>(
        &self,
        session: &dyn Session,
        destination: &mut D,
        stmt: &Statement,
    ) -> Result<bool>
    where
        D: IntoDestination + ?Sized,
    {
        let record = match destination.as_destination() {
            Destination::Record(record) => record,
            Destination::Shared(type_name) => {
                return Err(Error::destination_not_writable(type_name))
            }
            other => {
                return Err(Error::unexpected_destination_kind(
                    other.kind(),
                    other.type_name(),
                ))
            }
        };

        tracing::debug!(sql = stmt.sql(), params = stmt.params().len(), "executing conditional write");

        let outcome = session.execute_conditional(stmt).await?;
        let assigned = self.assign(record, &outcome.row)?;

        tracing::debug!(
            applied = outcome.applied,
            columns = outcome.row.len(),
            assigned,
            "conditional write finished"
        );

        Ok(outcome.applied)
    }

    /// Copies every compatible entry of `row` into `record` and returns the
    /// number of fields assigned.
    ///
    /// Columns with no matching field and values whose type differs from the
    /// field's declared type are skipped.
    pub fn assign(&self, record: &mut dyn Element, row: &IndexMap<String, Value>) -> Result<usize> {
        let Shape::Record(schema) = record.shape() else {
            return Err(Error::unexpected_destination_kind(
                DestinationKind::Scalar,
                record.type_name(),
            ));
        };

        let mut targets = record.scan_targets();
        let mut assigned = 0;

        for (column, value) in row {
            let Some(field) = schema.field_for_column(column) else {
                tracing::debug!(record = schema.name(), column = %column, "skipping unknown column");
                continue;
            };

            if !field.accepts(value) {
                tracing::warn!(
                    record = schema.name(),
                    column = %column,
                    field = field.name,
                    expected = %field.ty,
                    actual = %value.ty(),
                    "skipping column with mismatched type"
                );
                continue;
            }

            let Some(target) = targets.get_mut(field.position) else {
                continue;
            };

            target
                .scan(value.clone())
                .map_err(|err| err.context(Error::column_scan(column.as_str(), field.position)))?;
            assigned += 1;
        }

        Ok(assigned)
    }
}
